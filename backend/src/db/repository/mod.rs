//! Repository trait definitions for database operations.
//!
//! - [`error`]: Error types for repository operations
//! - [`document`]: The [`DocumentRepository`] trait implemented by every backend

pub mod document;
pub mod error;

pub use document::DocumentRepository;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
