//! Document lifecycle handlers.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use search_admin_repository::SearchEngineError;
use search_admin_shared::IndexDocumentBody;
use serde_json::Value;
use tracing::{info, instrument};

use crate::errors::{ApiError, Resource};
use crate::handlers::{decode_body, require_document, require_index};
use crate::state::AppState;

/// `POST /indices/{name}/document`: index (upsert) a document.
///
/// The body is validated before any engine call. Without an id the engine
/// generates one.
#[instrument(skip(state, payload))]
pub async fn index_document(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Bytes,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let body: IndexDocumentBody = decode_body(&payload)?;
    let document = body
        .valid_document()
        .ok_or_else(|| ApiError::validation("Document is required"))?;

    let failure = "Unable to index the document";
    require_index(state.engine.as_ref(), &name, failure).await?;

    // A 404 on write means the index went away after the check.
    let id = body.effective_id();
    let response = state
        .engine
        .index_document(&name, id, document)
        .await
        .map_err(|e| match (e, id) {
            (SearchEngineError::NotFound(_), _) => {
                ApiError::not_found(Resource::Index(&name).missing_message())
            }
            (e, Some(id)) => ApiError::from_engine(
                e,
                &Resource::Document { index: &name, id },
                failure,
            ),
            (e, None) => ApiError::upstream(failure, e),
        })?;

    info!(
        index = %name,
        id = response.get("_id").and_then(serde_json::Value::as_str).unwrap_or_default(),
        "Indexed document"
    );
    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /indices/{name}/document/{id}`: fetch a document.
#[instrument(skip(state))]
pub async fn get_document(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let failure = format!("Unable to retrieve document {}", id);
    require_document(state.engine.as_ref(), &name, &id, &failure).await?;

    let resource = Resource::Document {
        index: &name,
        id: &id,
    };
    let response = state
        .engine
        .get_document(&name, &id)
        .await
        .map_err(|e| ApiError::from_engine(e, &resource, &failure))?;

    Ok(Json(response))
}

/// `DELETE /indices/{name}/document/{id}`: delete a document.
#[instrument(skip(state))]
pub async fn delete_document(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let failure = format!("Unable to delete document {}", id);
    require_document(state.engine.as_ref(), &name, &id, &failure).await?;

    let resource = Resource::Document {
        index: &name,
        id: &id,
    };
    let response = state
        .engine
        .delete_document(&name, &id)
        .await
        .map_err(|e| ApiError::from_engine(e, &resource, &failure))?;

    info!(index = %name, id = %id, "Deleted document");
    Ok(Json(response))
}
