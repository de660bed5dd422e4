//! Environment-driven settings.

use std::env;
use std::net::{Ipv4Addr, SocketAddr};

use search_admin_repository::config::DEFAULT_ENGINE_URL;
use search_admin_repository::EngineConfig;

use crate::telemetry::LogFormat;
use crate::AppError;

/// Default listen port.
const DEFAULT_PORT: u16 = 5000;

/// Everything the service reads from its environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Search engine address and credentials.
    pub engine: EngineConfig,
    /// Port the HTTP server listens on (all interfaces).
    pub port: u16,
    /// Log line format.
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTICSEARCH_NODE`: engine URL (default: http://localhost:9200)
    /// - `ELASTICSEARCH_USERNAME`: basic auth user (default: none)
    /// - `ELASTICSEARCH_PASSWORD`: basic auth password (default: none)
    /// - `PORT`: listen port (default: 5000)
    /// - `LOG_FORMAT`: `text` or `json` (default: text)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("ELASTICSEARCH_NODE")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENGINE_URL.to_string());
        let username = lookup("ELASTICSEARCH_USERNAME").unwrap_or_default();
        let password = lookup("ELASTICSEARCH_PASSWORD").unwrap_or_default();

        let port = match lookup("PORT").filter(|v| !v.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("Invalid PORT {:?}: {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            engine: EngineConfig::new(url).with_credentials(username, password),
            port,
            log_format,
        })
    }

    /// Address the server binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
