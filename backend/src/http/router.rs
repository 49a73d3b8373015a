//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, tracing) and creates the axum
//! router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Any origin, method and header, with credentials. Mirroring the request
    // is required because `*` is not allowed together with credentials.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let api = Router::new()
        .route(
            "/horoscopes",
            get(handlers::list_horoscopes).post(handlers::create_horoscope),
        )
        .route("/pick", post(handlers::create_pick_session))
        .route("/paid-readings", post(handlers::create_paid_reading));

    Router::new()
        .route("/", get(handlers::root))
        .route("/test", get(handlers::test_database))
        .nest("/api", api)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
