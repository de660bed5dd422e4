//! OpenSearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! using the OpenSearch REST client, which is wire compatible with the
//! Elasticsearch index and document APIs the admin service relies on.

mod client;
mod response;

pub use client::OpenSearchClient;
