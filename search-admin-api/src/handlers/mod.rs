//! Request handlers, one per resource operation.
//!
//! Reads and mutations first confirm the target exists. The check and the
//! call that follows are two separate engine round trips, so a concurrent
//! change in between is reported with whatever the engine answers.

pub mod documents;
pub mod health;
pub mod indices;
pub mod search;

use axum::body::Bytes;
use search_admin_repository::SearchEngineClient;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::{ApiError, Resource};

/// Decode a JSON request body, treating an empty or blank body as the default.
///
/// The content type is not checked.
pub(crate) fn decode_body<T>(body: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "Rejected request body");
        ApiError::validation("Request body must be valid JSON")
    })
}

/// Fail with `NotFound` unless the index exists.
pub(crate) async fn require_index(
    engine: &dyn SearchEngineClient,
    index: &str,
    failure: &str,
) -> Result<(), ApiError> {
    let resource = Resource::Index(index);
    let exists = engine
        .index_exists(index)
        .await
        .map_err(|e| ApiError::from_engine(e, &resource, failure))?;

    if exists {
        Ok(())
    } else {
        Err(ApiError::not_found(resource.missing_message()))
    }
}

/// Fail with `NotFound` unless both the index and the document exist.
pub(crate) async fn require_document(
    engine: &dyn SearchEngineClient,
    index: &str,
    id: &str,
    failure: &str,
) -> Result<(), ApiError> {
    require_index(engine, index, failure).await?;

    let resource = Resource::Document { index, id };
    let exists = engine
        .document_exists(index, id)
        .await
        .map_err(|e| ApiError::from_engine(e, &resource, failure))?;

    if exists {
        Ok(())
    } else {
        Err(ApiError::not_found(resource.missing_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_admin_shared::{IndexDocumentBody, SearchBody};

    #[test]
    fn test_decode_empty_body_is_default() {
        let body: SearchBody = decode_body(&Bytes::new()).unwrap();
        assert!(body.effective_query().is_none());

        let body: IndexDocumentBody = decode_body(&Bytes::from_static(b" \n")).unwrap();
        assert!(body.valid_document().is_none());
    }

    #[test]
    fn test_decode_malformed_body() {
        let result = decode_body::<SearchBody>(&Bytes::from_static(b"{\"query\": "));
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
