//! Route table for the search admin API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{documents, health, indices, search};
use crate::state::AppState;

/// Prefix the resource routes are mounted under.
pub const API_PREFIX: &str = "/api/elastic";

/// Resource routes, relative to [`API_PREFIX`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::check_health))
        .route("/indices", get(indices::list_indices))
        .route(
            "/indices/:name",
            post(indices::create_index).delete(indices::delete_index),
        )
        .route("/indices/:name/document", post(documents::index_document))
        .route(
            "/indices/:name/document/:id",
            get(documents::get_document).delete(documents::delete_document),
        )
        .route("/search/:name", post(search::search_index))
}

/// The complete application: service routes, resource routes, CORS and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/api/elastic-health", get(health::engine_health))
        .nest(API_PREFIX, api_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
