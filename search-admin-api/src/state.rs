//! Shared application state.

use std::sync::Arc;

use search_admin_repository::SearchEngineClient;

/// State handed to every handler.
///
/// The engine client is created once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn SearchEngineClient>,
}

impl AppState {
    pub fn new(engine: Arc<dyn SearchEngineClient>) -> Self {
        Self { engine }
    }
}
