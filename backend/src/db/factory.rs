//! Repository factory for dependency injection.
//!
//! Builds the single repository instance the server shares across requests,
//! from environment variables, a TOML file, or explicit settings.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
#[cfg(feature = "mongo-repo")]
use super::repositories::MongoRepository;
use super::repository::{DocumentRepository, RepositoryError, RepositoryResult};
use super::MongoConfig;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// MongoDB implementation
    Mongo,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("mongo", "mongodb", "local").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variable.
    ///
    /// Reads `REPOSITORY_TYPE`; an unparseable value falls back to Local.
    /// Without it, Mongo is chosen when `DATABASE_URL` is set, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("DATABASE_URL").is_ok() {
            Self::Mongo
        } else {
            Self::Local
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use tarot_blog::db::{MongoConfig, RepositoryFactory, RepositoryType};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = MongoConfig::from_env()?;
///     let _mongo = RepositoryFactory::create(RepositoryType::Mongo, Some(&config)).await?;
///
///     let _local = RepositoryFactory::create_local();
///     Ok(())
/// }
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `mongo_config` - Optional MongoDB configuration (required for Mongo)
    pub async fn create(
        repo_type: RepositoryType,
        mongo_config: Option<&MongoConfig>,
    ) -> RepositoryResult<Arc<dyn DocumentRepository>> {
        match repo_type {
            RepositoryType::Mongo => {
                #[cfg(feature = "mongo-repo")]
                {
                    let config = mongo_config.ok_or_else(|| {
                        RepositoryError::configuration("Mongo repository requires MongoConfig")
                    })?;
                    let mongo = Self::create_mongo(config).await?;
                    Ok(mongo as Arc<dyn DocumentRepository>)
                }
                #[cfg(not(feature = "mongo-repo"))]
                {
                    let _ = mongo_config;
                    Err(RepositoryError::configuration(
                        "Mongo repository feature not enabled",
                    ))
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create a MongoDB repository.
    #[cfg(feature = "mongo-repo")]
    pub async fn create_mongo(config: &MongoConfig) -> RepositoryResult<Arc<MongoRepository>> {
        let repo = MongoRepository::new(config.clone()).await?;
        Ok(Arc::new(repo))
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn DocumentRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create repository from environment configuration.
    ///
    /// See [`RepositoryType::from_env`] for how the backend is chosen.
    pub async fn from_env() -> RepositoryResult<Arc<dyn DocumentRepository>> {
        RepositoryBuilder::new().from_env()?.build().await
    }

    /// Create repository from a TOML configuration file.
    pub async fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn DocumentRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config).await
    }

    /// Create repository from the default configuration file location.
    ///
    /// Searches for `repository.toml` in standard locations.
    pub async fn from_default_config() -> RepositoryResult<Arc<dyn DocumentRepository>> {
        let config = RepositoryConfig::from_default_location()?;
        Self::from_repository_config(&config).await
    }

    /// Create repository from a RepositoryConfig instance.
    pub async fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn DocumentRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;
        let mongo_config = config.to_mongo_config()?;

        Self::create(repo_type, mongo_config.as_ref()).await
    }
}

/// Builder for configuring repository creation.
///
/// # Example
/// ```
/// use tarot_blog::db::{RepositoryBuilder, RepositoryType};
///
/// # #[tokio::main]
/// # async fn main() {
/// let repo = RepositoryBuilder::new()
///     .repository_type(RepositoryType::Local)
///     .build()
///     .await
///     .unwrap();
/// assert!(repo.health_check().await.unwrap());
/// # }
/// ```
pub struct RepositoryBuilder {
    repo_type: RepositoryType,
    mongo_config: Option<MongoConfig>,
}

impl RepositoryBuilder {
    /// Create a new repository builder.
    ///
    /// The initial type follows [`RepositoryType::from_env`].
    pub fn new() -> Self {
        Self {
            repo_type: RepositoryType::from_env(),
            mongo_config: None,
        }
    }

    /// Set the repository type.
    pub fn repository_type(mut self, repo_type: RepositoryType) -> Self {
        self.repo_type = repo_type;
        self
    }

    /// Set the MongoDB configuration.
    pub fn mongo_config(mut self, config: MongoConfig) -> Self {
        self.mongo_config = Some(config);
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, RepositoryError> {
        self.repo_type = RepositoryType::from_env();

        if self.repo_type == RepositoryType::Mongo {
            #[cfg(feature = "mongo-repo")]
            {
                let config = MongoConfig::from_env().map_err(RepositoryError::configuration)?;
                self.mongo_config = Some(config);
            }
            #[cfg(not(feature = "mongo-repo"))]
            {
                return Err(RepositoryError::configuration(
                    "Mongo repository feature not enabled",
                ));
            }
        }

        Ok(self)
    }

    /// Load configuration from a TOML file.
    pub fn from_config_file<P: AsRef<Path>>(
        mut self,
        config_path: P,
    ) -> Result<Self, RepositoryError> {
        let repo_config = RepositoryConfig::from_file(config_path)?;

        self.repo_type = repo_config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;
        self.mongo_config = repo_config.to_mongo_config()?;

        Ok(self)
    }

    /// Build the repository instance.
    pub async fn build(self) -> RepositoryResult<Arc<dyn DocumentRepository>> {
        RepositoryFactory::create(self.repo_type, self.mongo_config.as_ref()).await
    }
}

impl Default for RepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
