use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::trace::TraceLayer;

use sportscenter_store::app_config::CorsConfig;

pub mod activities;
pub mod auth;
pub mod bookings;
pub mod error;
pub mod members;
pub mod middleware;
pub mod state;

pub use state::AppState;

/// Assembles the full router: auth + the three record services behind
/// the admission filter, with the static exchange policy applied
/// uniformly. The admission layer is outermost apart from CORS (so
/// preflight requests are answered without a credential) and rejects
/// before any handler is scheduled.
pub fn app(state: AppState, cors: &CorsConfig) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(
            cors.allowed_origin
                .parse::<HeaderValue>()
                .expect("Invalid cors.allowed_origin"),
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        // Wildcard headers are incompatible with credentials, so mirror
        // whatever the request asks for instead
        .allow_headers(AllowHeaders::mirror_request())
        .expose_headers([header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(cors.max_age_seconds));

    Router::new()
        .merge(auth::routes())
        .merge(bookings::routes())
        .merge(activities::routes())
        .merge(members::routes())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::admission_middleware))
        .layer(cors_layer)
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "UP" }))
}
