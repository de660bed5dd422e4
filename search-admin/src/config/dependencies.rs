//! Dependency initialization and wiring for the search admin service.

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::AppError;
use search_admin_api::AppState;
use search_admin_repository::{OpenSearchClient, SearchEngineClient};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// Handler state holding the shared engine client.
    pub state: AppState,
}

impl Dependencies {
    /// Build the engine client and the handler state.
    ///
    /// Cluster health is checked once so a misconfigured address shows up in the
    /// startup logs. An unreachable cluster is not fatal: the health routes
    /// report it and every other route answers 500 until it comes back.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If the client can't be constructed (e.g. invalid URL)
    pub async fn new(config: &AppConfig) -> Result<Self, AppError> {
        info!(
            engine_url = %config.engine.url,
            port = config.port,
            "Initializing dependencies"
        );

        let client = OpenSearchClient::new(&config.engine).await?;

        Ok(Self::with_client(Arc::new(client)).await)
    }

    /// Wire the dependencies around an already built client.
    pub async fn with_client(client: Arc<dyn SearchEngineClient>) -> Self {
        match client.health().await {
            Ok(health) => info!(
                cluster = health.get("cluster_name").and_then(|v| v.as_str()).unwrap_or("unknown"),
                status = health.get("status").and_then(|v| v.as_str()).unwrap_or("unknown"),
                "Search engine connection verified"
            ),
            Err(e) => warn!(error = %e, "Search engine is not reachable yet"),
        }

        Self {
            state: AppState::new(client),
        }
    }
}
