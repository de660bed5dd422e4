//! Interface definitions for the search engine client.
//!
//! This module defines the abstract `SearchEngineClient` trait that allows
//! handlers to be tested against a mock and keeps the engine swappable.

mod search_engine_client;

pub use search_engine_client::SearchEngineClient;
