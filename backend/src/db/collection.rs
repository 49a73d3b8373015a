//! Static registry mapping entity types to collection names.
//!
//! Collection names are the lower-cased, singular entity names. They must
//! stay exactly as they are so existing stored data remains reachable.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::document::Document;
use super::repository::{ErrorContext, RepositoryError, RepositoryResult};
use crate::models::{Horoscope, PaidReading, ReadingSession};

/// A document collection known to this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Horoscope,
    PaidReading,
    ReadingSession,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Horoscope,
        Collection::PaidReading,
        Collection::ReadingSession,
    ];

    /// Collection name in the store.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Horoscope => "horoscope",
            Collection::PaidReading => "paidreading",
            Collection::ReadingSession => "readingsession",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| format!("Unknown collection: {}", s))
    }
}

/// A record type that can be persisted as a document.
///
/// Implementors pick their collection through [`Storable::COLLECTION`]; the
/// serialized form must be a JSON object.
pub trait Storable: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: Collection;

    /// Serialize the record into a document, field for field.
    fn to_document(&self) -> RepositoryResult<Document> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(RepositoryError::validation_with_context(
                format!("record did not serialize to an object: {}", other),
                ErrorContext::new("to_document").with_collection(Self::COLLECTION.name()),
            )),
        }
    }
}

impl Storable for Horoscope {
    const COLLECTION: Collection = Collection::Horoscope;
}

impl Storable for PaidReading {
    const COLLECTION: Collection = Collection::PaidReading;
}

impl Storable for ReadingSession {
    const COLLECTION: Collection = Collection::ReadingSession;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReadingPackage, ReadingStatus};

    #[test]
    fn test_collection_names_are_exact() {
        assert_eq!(Collection::Horoscope.name(), "horoscope");
        assert_eq!(Collection::PaidReading.name(), "paidreading");
        assert_eq!(Collection::ReadingSession.name(), "readingsession");
    }

    #[test]
    fn test_storable_collections() {
        assert_eq!(Horoscope::COLLECTION, Collection::Horoscope);
        assert_eq!(PaidReading::COLLECTION, Collection::PaidReading);
        assert_eq!(ReadingSession::COLLECTION, Collection::ReadingSession);
    }

    #[test]
    fn test_collection_from_str() {
        for collection in Collection::ALL {
            assert_eq!(collection.name().parse::<Collection>().unwrap(), collection);
        }
        assert!("PaidReading".parse::<Collection>().is_err());
    }

    #[test]
    fn test_to_document_mirrors_fields() {
        let reading = PaidReading {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            question: "Career?".to_string(),
            package: ReadingPackage::Deep,
            status: ReadingStatus::Pending,
        };

        let doc = reading.to_document().unwrap();
        assert_eq!(doc.len(), 5);
        assert_eq!(doc["package"], "deep");
        assert_eq!(doc["status"], "pending");
    }
}
