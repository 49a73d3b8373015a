//! Repository configuration file support.
//!
//! Reads the backend selection and MongoDB settings from a TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;
use crate::db::MongoConfig;

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub mongo: MongoSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// MongoDB connection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MongoSettings {
    #[serde(default)]
    pub database_url: String,
    #[serde(default)]
    pub database_name: String,
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub max_pool_size: Option<u32>,
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        content.parse()
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `repository.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = [
            PathBuf::from("repository.toml"),
            PathBuf::from("backend/repository.toml"),
            PathBuf::from("../repository.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No repository.toml found in standard locations",
        ))
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }

    /// Convert to MongoConfig if this is a MongoDB configuration.
    #[cfg(feature = "mongo-repo")]
    pub fn to_mongo_config(&self) -> Result<Option<MongoConfig>, RepositoryError> {
        if self.checked_repository_type()? != RepositoryType::Mongo {
            return Ok(None);
        }

        if self.mongo.database_url.is_empty() || self.mongo.database_name.is_empty() {
            return Err(RepositoryError::configuration(
                "Mongo repository requires 'mongo.database_url' and 'mongo.database_name' settings",
            ));
        }

        Ok(Some(MongoConfig {
            database_url: self.mongo.database_url.clone(),
            database_name: self.mongo.database_name.clone(),
            app_name: self.mongo.app_name.clone(),
            max_pool_size: self.mongo.max_pool_size,
        }))
    }

    /// Convert to MongoConfig when the feature is disabled.
    #[cfg(not(feature = "mongo-repo"))]
    pub fn to_mongo_config(&self) -> Result<Option<MongoConfig>, RepositoryError> {
        if self.checked_repository_type()? == RepositoryType::Mongo {
            return Err(RepositoryError::configuration(
                "Mongo repository feature not enabled",
            ));
        }

        Ok(None)
    }

    fn checked_repository_type(&self) -> Result<RepositoryType, RepositoryError> {
        self.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })
    }
}

impl FromStr for RepositoryConfig {
    type Err = RepositoryError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        toml::from_str(content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })
    }
}
