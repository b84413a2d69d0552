//! Axum router configuration with middleware.
//!
//! All routes are under `/api/v1/`.
//! Middleware: CORS (fully open -- single-user local service), request
//! tracing.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Session lifecycle
        .route("/sessions", post(handlers::session::create_session))
        .route("/sessions", get(handlers::session::list_sessions))
        .route(
            "/sessions/{id}/switch",
            post(handlers::session::switch_session),
        )
        .route("/sessions/{id}", delete(handlers::session::delete_session))
        // Conversation
        .route("/chat/ask", post(handlers::chat::ask))
        // Export & memory
        .route(
            "/sessions/current/export",
            post(handlers::memory::export_session),
        )
        .route(
            "/sessions/current/snapshot",
            get(handlers::memory::get_session_snapshot),
        )
        .route("/memory", get(handlers::memory::get_memory_info));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
