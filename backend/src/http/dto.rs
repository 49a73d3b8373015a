//! Data Transfer Objects for the HTTP API.
//!
//! Request bodies are the schema types from [`crate::models`]; this module
//! holds query parameters and response shapes.

use serde::{Deserialize, Serialize};

use crate::models::ReadingStatus;

/// Default number of horoscopes returned by the listing endpoint.
pub const DEFAULT_HOROSCOPE_LIMIT: i64 = 30;

/// Maximum number of collection names reported by the diagnostic endpoint.
pub const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Root endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for a created document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// Store-assigned identifier
    pub id: String,
}

/// Response for a created paid reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaidReadingCreatedResponse {
    pub id: String,
    pub status: ReadingStatus,
}

/// Query parameters for the horoscope listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoroscopeQuery {
    /// Zodiac sign filter, matched case-insensitively
    #[serde(default)]
    pub sign: Option<String>,
    /// Period filter, matched exactly
    #[serde(default)]
    pub period: Option<String>,
    /// Maximum number of documents (0 = no limit)
    #[serde(default = "default_horoscope_limit")]
    pub limit: i64,
}

fn default_horoscope_limit() -> i64 {
    DEFAULT_HOROSCOPE_LIMIT
}

impl Default for HoroscopeQuery {
    fn default() -> Self {
        Self {
            sign: None,
            period: None,
            limit: DEFAULT_HOROSCOPE_LIMIT,
        }
    }
}

impl HoroscopeQuery {
    /// Lower-cased sign filter; empty values count as absent.
    pub fn normalized_sign(&self) -> Option<String> {
        self.sign
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Period filter; empty values count as absent.
    pub fn normalized_period(&self) -> Option<&str> {
        self.period.as_deref().filter(|s| !s.is_empty())
    }

    /// Limit handed to the store. Zero means unlimited; a negative limit is
    /// taken by magnitude, as the MongoDB driver does.
    pub fn effective_limit(&self) -> Option<usize> {
        match self.limit {
            0 => None,
            n => usize::try_from(n.unsigned_abs()).ok(),
        }
    }
}

/// Diagnostic response for `GET /test`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for DiagnosticsResponse {
    fn default() -> Self {
        Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}
