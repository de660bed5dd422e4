//! Liveness and cluster health handlers.

use axum::{extract::State, Json};
use serde_json::Value;
use tracing::instrument;

use crate::errors::ApiError;
use crate::state::AppState;

/// Plain-text liveness banner served at `/`.
pub async fn root() -> &'static str {
    "Search admin API is running"
}

/// `GET /health`: the engine's cluster health report.
#[instrument(skip(state))]
pub async fn check_health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let health = state
        .engine
        .health()
        .await
        .map_err(|e| ApiError::upstream("Unable to check cluster health", e))?;

    Ok(Json(health))
}

/// `GET /api/elastic-health`: connectivity check outside the resource routes.
#[instrument(skip(state))]
pub async fn engine_health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let health = state
        .engine
        .health()
        .await
        .map_err(|e| ApiError::upstream("Unable to connect to the search engine", e))?;

    Ok(Json(health))
}
