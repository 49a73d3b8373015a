//! Database module: the persistence adapter between request schemas and
//! document collections.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers                                          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! │  - create_document / get_documents                      │
//! │  - audit timestamps, limit semantics                    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  DocumentRepository trait (repository/)                 │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                 │
//! ┌───▼──────────────┐     ┌──────────▼──────────────┐
//! │ Mongo Repository │     │ Local Repository        │
//! │ (mongodb driver) │     │ (in-memory)             │
//! └──────────────────┘     └─────────────────────────┘
//! ```
//!
//! Record types reach the store through the [`Storable`] capability; their
//! collection names come from the static [`Collection`] registry.

// Feature flag priority: mongo > local
#[cfg(not(any(feature = "mongo-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod collection;
pub mod document;
pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

// Mongo config is colocated with the repository implementation.
#[cfg(feature = "mongo-repo")]
pub use repositories::{MongoConfig, MongoRepository};
#[cfg(not(feature = "mongo-repo"))]
#[derive(Debug, Clone)]
pub struct MongoConfig {
    _private: (),
}

pub use services::{create_document, get_documents, health_check, list_collections};

pub use collection::{Collection, Storable};
pub use document::{Document, DocumentFilter, DocumentId};
pub use factory::{RepositoryBuilder, RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
pub use repository::{DocumentRepository, ErrorContext, RepositoryError, RepositoryResult};
