//! In-memory local repository implementation.
//!
//! Stores every collection as an insertion-ordered `Vec` of documents
//! behind a `parking_lot::RwLock`. Suitable for unit tests and local
//! development: fast, deterministic and isolated per instance.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::collection::Collection;
use crate::db::document::{expose_id, Document, DocumentFilter, DocumentId, STORE_ID_FIELD};
use crate::db::repository::{DocumentRepository, ErrorContext, RepositoryError, RepositoryResult};

/// In-memory local repository.
///
/// Clones share the same underlying data.
///
/// # Example
/// ```
/// use tarot_blog::db::{Collection, DocumentFilter, DocumentRepository, LocalRepository};
///
/// # #[tokio::main]
/// # async fn main() {
/// let repo = LocalRepository::new();
/// let mut doc = serde_json::Map::new();
/// doc.insert("title".into(), "The Star".into());
///
/// let id = repo.insert_document(Collection::Horoscope, doc).await.unwrap();
/// let docs = repo
///     .find_documents(Collection::Horoscope, &DocumentFilter::new(), None)
///     .await
///     .unwrap();
/// assert_eq!(docs[0]["id"], id.as_str());
/// # }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    collections: HashMap<Collection, Vec<Document>>,
    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            collections: HashMap::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    ///
    /// While unhealthy, every repository operation fails with a connection
    /// error.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        data.collections.clear();
    }

    /// Number of documents stored in a collection.
    pub fn document_count(&self, collection: Collection) -> usize {
        self.data
            .read()
            .collections
            .get(&collection)
            .map_or(0, Vec::len)
    }

    /// Raw stored documents of a collection, with the store-native `_id` key.
    pub fn raw_documents(&self, collection: Collection) -> Vec<Document> {
        self.data
            .read()
            .collections
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection_with_context(
                "Database is not healthy",
                ErrorContext::new(operation),
            ));
        }
        Ok(())
    }

    fn generate_id() -> DocumentId {
        DocumentId::new(Uuid::new_v4().simple().to_string())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn insert_document(
        &self,
        collection: Collection,
        mut document: Document,
    ) -> RepositoryResult<DocumentId> {
        self.check_health("insert_document")?;

        let id = Self::generate_id();
        document.insert(STORE_ID_FIELD.to_string(), id.as_str().into());

        self.data
            .write()
            .collections
            .entry(collection)
            .or_default()
            .push(document);

        Ok(id)
    }

    async fn find_documents(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
        limit: Option<usize>,
    ) -> RepositoryResult<Vec<Document>> {
        self.check_health("find_documents")?;

        let data = self.data.read();
        let Some(documents) = data.collections.get(&collection) else {
            return Ok(Vec::new());
        };

        Ok(documents
            .iter()
            .filter(|doc| filter.matches(doc))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .map(expose_id)
            .collect())
    }

    async fn list_collection_names(&self) -> RepositoryResult<Vec<String>> {
        self.check_health("list_collection_names")?;

        let mut names: Vec<String> = self
            .data
            .read()
            .collections
            .keys()
            .map(|c| c.name().to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    fn is_in_memory(&self) -> bool {
        true
    }
}
