//! Error types for the HTTP layer.
//!
//! Engine failures are translated into one of four categories, each with a
//! fixed status code. The response body only ever carries the categorized
//! message; the engine's own error text goes to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use search_admin_repository::SearchEngineError;
use search_admin_shared::ErrorBody;
use thiserror::Error;
use tracing::{error, warn};

/// Errors returned by request handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The index or document does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The index already exists.
    #[error("{0}")]
    Conflict(String),

    /// A required input is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The engine was unreachable or failed.
    #[error("{message}")]
    Upstream {
        message: String,
        #[source]
        source: SearchEngineError,
    },
}

impl ApiError {
    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a conflict error.
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an upstream error wrapping the engine failure.
    pub fn upstream(msg: impl Into<String>, source: SearchEngineError) -> Self {
        Self::Upstream {
            message: msg.into(),
            source,
        }
    }

    /// Categorize an engine failure that happened while acting on `resource`.
    ///
    /// The engine's own 404 and 409 answers keep their meaning so a resource
    /// removed between the existence check and the call still reads as missing.
    pub fn from_engine(
        err: SearchEngineError,
        resource: &Resource<'_>,
        failure: impl Into<String>,
    ) -> Self {
        match err {
            SearchEngineError::NotFound(_) => Self::not_found(resource.missing_message()),
            SearchEngineError::Conflict(_) => Self::conflict(resource.conflict_message()),
            other => Self::upstream(failure, other),
        }
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Upstream { message, source } => error!(error = %source, "{}", message),
            other => warn!(status = status.as_u16(), "{}", other),
        }

        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// The thing a request operates on, used to phrase error messages.
#[derive(Debug, Clone, Copy)]
pub enum Resource<'a> {
    Index(&'a str),
    Document { index: &'a str, id: &'a str },
}

impl Resource<'_> {
    pub fn missing_message(&self) -> String {
        match self {
            Resource::Index(name) => format!("Index {} does not exist", name),
            Resource::Document { id, .. } => format!("Document with ID {} does not exist", id),
        }
    }

    pub fn conflict_message(&self) -> String {
        match self {
            Resource::Index(name) => format!("Index {} already exists", name),
            Resource::Document { index, id } => {
                format!("Document {} in index {} was modified concurrently", id, index)
            }
        }
    }
}
