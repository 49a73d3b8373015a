//! Process configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Default port the server listens on.
pub const DEFAULT_PORT: u16 = 8000;
/// Default bind host (all interfaces).
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Server and store settings.
///
/// `database_url` and `database_name` are kept so the diagnostic endpoint
/// can report whether they were provided; the repository itself is built
/// from [`crate::db::RepositoryFactory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Store connection target, if configured
    pub database_url: Option<String>,
    /// Store database name, if configured
    pub database_name: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: None,
            database_name: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0)
    /// - `PORT` (optional, default: 8000)
    /// - `DATABASE_URL` (optional): store connection string
    /// - `DATABASE_NAME` (optional): store database name
    ///
    /// # Errors
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| format!("PORT must be a valid port number, got '{}'", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            database_url: non_empty_var("DATABASE_URL"),
            database_name: non_empty_var("DATABASE_NAME"),
        })
    }

    /// Socket address to bind.
    pub fn bind_address(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid bind address {}:{}: {}", self.host, self.port, e))
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
