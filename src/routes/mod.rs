//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The whiteboard UI is served elsewhere; this router only carries the JSON
//! API it calls: the chat assistant and the panel catalog.

pub mod chat;
pub mod panels;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes with permissive CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/api/panels", get(panels::list_panels))
        .route("/api/panels/{kind}", get(panels::get_panel))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
