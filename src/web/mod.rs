// src/web/mod.rs
// Web server layer for Consult

pub mod api;
pub mod page;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::web::state::AppState;

/// Create the web server router
pub fn create_router(state: AppState) -> Router {
    let api_router = Router::new()
        .route("/personas", get(api::list_personas))
        .route("/ask", post(api::ask));

    Router::new()
        .route("/", get(page::index).post(page::submit))
        .route("/health", get(api::health))
        .nest("/api", api_router)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
