//! HTTP handlers for the REST API.
//!
//! Each handler validates its input, delegates to the persistence service
//! layer and shapes the JSON response.

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{
    CreatedResponse, DiagnosticsResponse, HoroscopeQuery, MessageResponse,
    PaidReadingCreatedResponse, MAX_REPORTED_COLLECTIONS,
};
use super::error::AppError;
use super::extract::{ApiJson, ApiQuery};
use super::state::AppState;
use crate::db::{self, Collection, Document, DocumentFilter};
use crate::models::{Horoscope, PaidReading, ReadingSession};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Service Endpoints
// =============================================================================

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Tarot Blog API is running".to_string(),
    })
}

/// GET /test
///
/// Reports store connectivity and whether the store settings are present.
/// Never fails: every problem is rendered into the response body.
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        database: "✅ Available".to_string(),
        connection_status: "Connected".to_string(),
        ..Default::default()
    };

    match db::list_collections(state.repository.as_ref()).await {
        Ok(mut collections) => {
            collections.truncate(MAX_REPORTED_COLLECTIONS);
            response.collections = collections;
            response.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            tracing::warn!("diagnostic collection listing failed: {}", e);
            response.database = format!(
                "⚠️  Connected but Error: {}",
                truncate_chars(&e.to_string(), 50)
            );
        }
    }

    response.database_url = Some(presence(state.config.database_url.is_some()));
    response.database_name = Some(presence(state.config.database_name.is_some()));

    Json(response)
}

fn presence(set: bool) -> String {
    if set { "✅ Set" } else { "❌ Not Set" }.to_string()
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

// =============================================================================
// Horoscopes
// =============================================================================

/// POST /api/horoscopes
pub async fn create_horoscope(
    State(state): State<AppState>,
    ApiJson(horoscope): ApiJson<Horoscope>,
) -> HandlerResult<CreatedResponse> {
    let id = db::create_document(state.repository.as_ref(), &horoscope).await?;

    Ok(Json(CreatedResponse {
        id: id.into_inner(),
    }))
}

/// GET /api/horoscopes
///
/// Lists horoscopes, optionally filtered by sign (case-insensitive) and
/// period, up to `limit` (default 30).
pub async fn list_horoscopes(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<HoroscopeQuery>,
) -> HandlerResult<Vec<Document>> {
    let mut filter = DocumentFilter::new();
    if let Some(sign) = query.normalized_sign() {
        filter = filter.eq("sign", sign);
    }
    if let Some(period) = query.normalized_period() {
        filter = filter.eq("period", period);
    }

    let documents = db::get_documents(
        state.repository.as_ref(),
        Collection::Horoscope,
        &filter,
        query.effective_limit(),
    )
    .await?;

    Ok(Json(documents))
}

// =============================================================================
// Readings
// =============================================================================

/// POST /api/pick
///
/// Records a pick-a-card session.
pub async fn create_pick_session(
    State(state): State<AppState>,
    ApiJson(session): ApiJson<ReadingSession>,
) -> HandlerResult<CreatedResponse> {
    let id = db::create_document(state.repository.as_ref(), &session).await?;

    Ok(Json(CreatedResponse {
        id: id.into_inner(),
    }))
}

/// POST /api/paid-readings
pub async fn create_paid_reading(
    State(state): State<AppState>,
    ApiJson(reading): ApiJson<PaidReading>,
) -> HandlerResult<PaidReadingCreatedResponse> {
    let id = db::create_document(state.repository.as_ref(), &reading).await?;

    Ok(Json(PaidReadingCreatedResponse {
        id: id.into_inner(),
        status: reading.status,
    }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> (StatusCode, Json<super::error::ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(super::error::ApiError::new("NOT_FOUND", "Not Found")),
    )
}
