//! Query passthrough handler.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use search_admin_shared::SearchBody;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::errors::{ApiError, Resource};
use crate::handlers::{decode_body, require_index};
use crate::state::AppState;

/// `POST /search/{name}`: run a native query against an existing index.
///
/// A request with an empty body, or without `query`, searches with the
/// engine's default (`match_all`).
#[instrument(skip(state, payload))]
pub async fn search_index(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Bytes,
) -> Result<Json<Value>, ApiError> {
    let body: SearchBody = decode_body(&payload)?;

    let failure = format!("Unable to search index {}", name);
    require_index(state.engine.as_ref(), &name, &failure).await?;

    let response = state
        .engine
        .search(&name, body.effective_query())
        .await
        .map_err(|e| ApiError::from_engine(e, &Resource::Index(&name), &failure))?;

    debug!(
        index = %name,
        took = response.get("took").and_then(serde_json::Value::as_u64).unwrap_or_default(),
        "Search completed"
    );
    Ok(Json(response))
}
