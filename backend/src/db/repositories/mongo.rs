//! MongoDB repository implementation.
//!
//! One [`mongodb::Client`] is created at startup and shared by every request;
//! the driver pools connections internally.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `DATABASE_URL`: Connection string (required)
//! - `DATABASE_NAME`: Database holding the collections (required)
//! - `MONGO_APP_NAME`: Application name reported to the server (optional)
//! - `MONGO_MAX_POOL_SIZE`: Maximum connection pool size (optional)

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, Bson};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use serde_json::Value;

use crate::db::collection::Collection;
use crate::db::document::{Document, DocumentFilter, DocumentId, ID_FIELD, STORE_ID_FIELD};
use crate::db::repository::{DocumentRepository, RepositoryError, RepositoryResult};

/// Configuration for connecting to MongoDB.
#[derive(Debug, Clone, Default)]
pub struct MongoConfig {
    /// Connection string
    pub database_url: String,
    /// Database name
    pub database_name: String,
    /// Application name sent in the connection handshake
    pub app_name: Option<String>,
    /// Maximum number of pooled connections
    pub max_pool_size: Option<u32>,
}

impl MongoConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set".to_string())?;
        let database_name = std::env::var("DATABASE_NAME")
            .map_err(|_| "DATABASE_NAME must be set".to_string())?;

        let app_name = std::env::var("MONGO_APP_NAME").ok();
        let max_pool_size = std::env::var("MONGO_MAX_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok());

        Ok(Self {
            database_url,
            database_name,
            app_name,
            max_pool_size,
        })
    }

    /// Create a new configuration with a connection string and database name.
    pub fn with_url(database_url: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            database_name: database_name.into(),
            ..Default::default()
        }
    }
}

/// MongoDB-backed document repository.
#[derive(Clone, Debug)]
pub struct MongoRepository {
    client: Client,
    database: Database,
}

impl MongoRepository {
    /// Build a client from the configuration.
    ///
    /// The driver connects lazily, so an unreachable server is only reported
    /// by the first operation, not here.
    pub async fn new(config: MongoConfig) -> RepositoryResult<Self> {
        if config.database_url.is_empty() || config.database_name.is_empty() {
            return Err(RepositoryError::configuration(
                "MongoDB repository requires database_url and database_name",
            ));
        }

        let mut options = ClientOptions::parse(&config.database_url)
            .await
            .map_err(|e| {
                RepositoryError::configuration(format!("Invalid DATABASE_URL: {}", e))
            })?;
        if config.app_name.is_some() {
            options.app_name = config.app_name.clone();
        }
        if config.max_pool_size.is_some() {
            options.max_pool_size = config.max_pool_size;
        }

        let client = Client::with_options(options)?;
        let database = client.database(&config.database_name);

        Ok(Self { client, database })
    }

    fn collection(&self, collection: Collection) -> mongodb::Collection<bson::Document> {
        self.database.collection(collection.name())
    }

    fn to_bson(document: &Document) -> RepositoryResult<bson::Document> {
        bson::to_document(document)
            .map_err(|e| RepositoryError::internal(format!("BSON serialization error: {}", e)))
    }

    /// Convert a stored document to JSON, exposing `_id` as a string `id`.
    fn from_bson(mut document: bson::Document) -> Document {
        let id = document.remove(STORE_ID_FIELD).map(|raw| match raw {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        });

        let mut json = match Bson::Document(document).into_relaxed_extjson() {
            Value::Object(map) => map,
            _ => Document::new(),
        };
        if let Some(id) = id {
            json.insert(ID_FIELD.to_string(), Value::String(id));
        }
        json
    }
}

#[async_trait]
impl DocumentRepository for MongoRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        match self.client.database("admin").run_command(doc! { "ping": 1 }).await {
            Ok(_) => Ok(true),
            Err(e) => {
                log::warn!("MongoDB ping failed: {}", e);
                Ok(false)
            }
        }
    }

    async fn insert_document(
        &self,
        collection: Collection,
        mut document: Document,
    ) -> RepositoryResult<DocumentId> {
        document.remove(STORE_ID_FIELD);
        let bson_doc = Self::to_bson(&document)?;

        let result = self
            .collection(collection)
            .insert_one(bson_doc)
            .await
            .map_err(|e| {
                RepositoryError::from(e)
                    .with_operation("insert_document")
                    .with_collection(collection.name())
            })?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        };
        Ok(DocumentId::new(id))
    }

    async fn find_documents(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
        limit: Option<usize>,
    ) -> RepositoryResult<Vec<Document>> {
        let query = Self::to_bson(&filter.to_document())?;
        let classify = |e: mongodb::error::Error| {
            RepositoryError::from(e)
                .with_operation("find_documents")
                .with_collection(collection.name())
        };

        let find = self.collection(collection).find(query);
        let cursor = match limit {
            Some(n) => find.limit(i64::try_from(n).unwrap_or(i64::MAX)).await,
            None => find.await,
        }
        .map_err(classify)?;

        let documents: Vec<bson::Document> = cursor.try_collect().await.map_err(classify)?;

        Ok(documents.into_iter().map(Self::from_bson).collect())
    }

    async fn list_collection_names(&self) -> RepositoryResult<Vec<String>> {
        self.database
            .list_collection_names()
            .await
            .map_err(|e| RepositoryError::from(e).with_operation("list_collection_names"))
    }
}
