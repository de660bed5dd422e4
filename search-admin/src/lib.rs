//! # Search Admin
//!
//! Service binary support for the search admin API: configuration from the
//! environment, dependency wiring, and the server lifecycle.

pub mod config;
pub mod server;
pub mod telemetry;

pub use config::{AppConfig, Dependencies};

use std::net::SocketAddr;
use thiserror::Error;

/// Errors that can occur during startup or while serving.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search engine client error.
    #[error("Search engine error: {0}")]
    SearchEngineError(#[from] search_admin_repository::SearchEngineError),

    /// Failed to bind the listen address.
    #[error("Failed to bind {addr}: {source}")]
    BindError {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
