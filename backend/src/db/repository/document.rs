//! Document repository trait.
//!
//! The whole persistence surface of the service: insert one document, find
//! documents by exact-match filter, and enumerate collections for
//! diagnostics.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::db::collection::Collection;
use crate::db::document::{Document, DocumentFilter, DocumentId};

/// Repository trait for document store operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`; one instance is shared by every
/// request task for the lifetime of the process.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Check if the store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the store answered
    /// - `Ok(false)` if it did not but no error was raised
    /// - `Err(RepositoryError)` if the check itself failed
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Insert one document into a collection.
    ///
    /// The store assigns the identifier; any `_id` already present in
    /// `document` is replaced.
    ///
    /// # Returns
    /// * `Ok(DocumentId)` - Identifier assigned by the store
    /// * `Err(RepositoryError)` - If the insert fails
    async fn insert_document(
        &self,
        collection: Collection,
        document: Document,
    ) -> RepositoryResult<DocumentId>;

    /// Find documents matching every clause of `filter`.
    ///
    /// Results come back in store-native order, truncated to `limit` when
    /// given. The store-native `_id` key is exposed as a string `id`.
    ///
    /// # Arguments
    /// * `collection` - Collection to query
    /// * `filter` - Exact-match clauses; empty matches everything
    /// * `limit` - Maximum number of documents, `None` for no limit
    async fn find_documents(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
        limit: Option<usize>,
    ) -> RepositoryResult<Vec<Document>>;

    /// List the names of the collections that exist in the database.
    async fn list_collection_names(&self) -> RepositoryResult<Vec<String>>;

    /// Whether documents live only in process memory and are lost on restart.
    fn is_in_memory(&self) -> bool {
        false
    }
}
