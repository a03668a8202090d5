//! HTTP API route definitions.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_object, docs, get_environment, get_object, get_schedule, get_stats, health,
    list_objects, metrics_text, root, AppState,
};

/// Create the API router.
///
/// CORS is fully open: the service sits behind a trusted proxy and is
/// consumed by an internal dashboard on another origin.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        // Health endpoint
        .route("/api/health", get(health))
        // Object collection
        .route("/api/objects", get(list_objects).post(create_object))
        .route("/api/objects/:id", get(get_object))
        // Derived views
        .route("/api/stats", get(get_stats))
        .route("/api/schedule", get(get_schedule))
        // Operational endpoints
        .route("/api/environment", get(get_environment))
        .route("/docs", get(docs))
        .route("/metrics", get(metrics_text))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
