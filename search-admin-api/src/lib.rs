//! # Search Admin API
//!
//! HTTP layer of the search admin service. Each handler validates its input,
//! checks that the target exists, makes the engine call and maps the outcome
//! to a status code. The engine itself is reached through
//! [`SearchEngineClient`](search_admin_repository::SearchEngineClient).

pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

#[cfg(test)]
pub(crate) mod mock;

pub use errors::{ApiError, Resource};
pub use routes::{api_routes, app, API_PREFIX};
pub use state::AppState;
