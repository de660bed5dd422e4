//! Search engine error types.
//!
//! Every adapter call fails with one of four categories so callers can map
//! them to a fixed response without inspecting engine payloads.

use thiserror::Error;

/// Engine error type reported when an index is created twice.
const RESOURCE_ALREADY_EXISTS: &str = "resource_already_exists_exception";

/// Errors that can occur during search engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchEngineError {
    /// The index or document does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The resource already exists or a version check failed.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The engine could not be reached.
    #[error("Connection failure: {0}")]
    ConnectionFailure(String),

    /// The engine answered with an unexpected status or an unreadable body.
    #[error("Engine error (status {status}): {message}")]
    EngineError { status: u16, message: String },
}

impl SearchEngineError {
    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a conflict error.
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a connection failure.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionFailure(msg.into())
    }

    /// Create an engine error.
    pub fn engine(status: u16, msg: impl Into<String>) -> Self {
        Self::EngineError {
            status,
            message: msg.into(),
        }
    }

    /// Classify a non-success engine response.
    ///
    /// 404 becomes `NotFound`, 409 and "already exists" rejections become
    /// `Conflict`, everything else is an `EngineError`.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            404 => Self::not_found(body),
            409 => Self::conflict(body),
            400 if body.contains(RESOURCE_ALREADY_EXISTS) => Self::conflict(body),
            _ => Self::engine(status, body),
        }
    }

    /// Whether this error means the target does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
