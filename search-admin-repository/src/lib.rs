//! # Search Admin Repository
//!
//! This crate provides the interface the search admin service uses to talk to
//! the search engine. It includes the error taxonomy, the engine connection
//! configuration, and a concrete implementation backed by the OpenSearch
//! client (which also speaks to Elasticsearch-compatible clusters).

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;

pub use config::EngineConfig;
pub use errors::SearchEngineError;
pub use interfaces::SearchEngineClient;
pub use crate::opensearch::OpenSearchClient;
