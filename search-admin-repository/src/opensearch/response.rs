//! Helpers turning raw engine responses into results.

use ::opensearch::http::response::Response;
use serde_json::Value;
use tracing::{debug, error};

use crate::errors::SearchEngineError;

/// Decode a response body as JSON, or classify the failure status.
pub(crate) async fn json_or_error(
    response: Response,
    operation: &str,
) -> Result<Value, SearchEngineError> {
    let status = response.status_code().as_u16();

    if (200..300).contains(&status) {
        return response.json::<Value>().await.map_err(|e| {
            error!(operation, error = %e, "Failed to parse engine response");
            SearchEngineError::engine(status, format!("unreadable response: {}", e))
        });
    }

    let body = response.text().await.unwrap_or_default();
    Err(failure(status, &body, operation))
}

/// Interpret a HEAD request: 200 means present, 404 means absent.
pub(crate) fn exists_from_status(status: u16, operation: &str) -> Result<bool, SearchEngineError> {
    match status {
        200..=299 => Ok(true),
        404 => Ok(false),
        _ => Err(failure(status, "", operation)),
    }
}

fn failure(status: u16, body: &str, operation: &str) -> SearchEngineError {
    let err = SearchEngineError::from_status(status, body);
    if err.is_not_found() {
        debug!(operation, status, "Engine reported resource missing");
    } else {
        error!(operation, status, body = %body, "Engine request failed");
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exists_from_status() {
        assert_eq!(exists_from_status(200, "index_exists"), Ok(true));
        assert_eq!(exists_from_status(404, "index_exists"), Ok(false));
    }

    #[test]
    fn test_exists_from_status_unexpected() {
        let err = exists_from_status(401, "document_exists").unwrap_err();
        assert!(matches!(
            err,
            SearchEngineError::EngineError { status: 401, .. }
        ));
    }
}
