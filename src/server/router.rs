//! Route table for the contacts API

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::server::handlers::{self, AppState};

/// Build the application router.
///
/// Exposes the five contact routes plus health checks, with request tracing
/// on every route.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/contacts", get(handlers::index).post(handlers::store))
        .route(
            "/contacts/{id}",
            get(handlers::show)
                .patch(handlers::update)
                .delete(handlers::destroy),
        )
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "carnet"
    }))
}
