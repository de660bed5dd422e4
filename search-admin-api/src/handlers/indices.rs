//! Index lifecycle handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::{info, instrument};

use crate::errors::{ApiError, Resource};
use crate::handlers::require_index;
use crate::state::AppState;

/// `GET /indices`: every index with the stats the engine reports.
#[instrument(skip(state))]
pub async fn list_indices(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let indices = state
        .engine
        .list_indices()
        .await
        .map_err(|e| ApiError::upstream("Unable to retrieve indices", e))?;

    Ok(Json(indices))
}

/// `POST /indices/{name}`: create an index, refusing one that already exists.
#[instrument(skip(state))]
pub async fn create_index(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let resource = Resource::Index(&name);
    let failure = format!("Unable to create index {}", name);

    let exists = state
        .engine
        .index_exists(&name)
        .await
        .map_err(|e| ApiError::from_engine(e, &resource, &failure))?;
    if exists {
        return Err(ApiError::conflict(resource.conflict_message()));
    }

    let response = state
        .engine
        .create_index(&name)
        .await
        .map_err(|e| ApiError::from_engine(e, &resource, &failure))?;

    info!(index = %name, "Created index");
    Ok((StatusCode::CREATED, Json(response)))
}

/// `DELETE /indices/{name}`: delete an existing index.
#[instrument(skip(state))]
pub async fn delete_index(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let failure = format!("Unable to delete index {}", name);
    require_index(state.engine.as_ref(), &name, &failure).await?;

    let response = state
        .engine
        .delete_index(&name)
        .await
        .map_err(|e| ApiError::from_engine(e, &Resource::Index(&name), &failure))?;

    info!(index = %name, "Deleted index");
    Ok(Json(response))
}
