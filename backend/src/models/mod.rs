//! Request and document schemas.
//!
//! Each record type maps 1:1 onto a document collection (see
//! [`crate::db::Collection`]). Field presence, types and enumerated values
//! are checked by `serde` when a request body is deserialized; unknown
//! fields are ignored.

pub mod horoscope;
pub mod macros;
pub mod reading;

pub use horoscope::{Horoscope, HoroscopePeriod, ZodiacSign};
pub use reading::{PaidReading, ReadingPackage, ReadingSession, ReadingStatus};
