//! Search engine client trait definition.
//!
//! This module defines the abstract interface for the index and document
//! operations the admin service proxies to the engine.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchEngineError;

/// Abstract interface for search engine operations.
///
/// Every method is a single round trip to the engine. Successful calls return
/// the engine's native JSON response untouched; failures are categorized as a
/// [`SearchEngineError`]. There are no retries, no caching and no batching.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` so a single client can be shared
/// by every request handler.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Fetch the cluster health report.
    async fn health(&self) -> Result<Value, SearchEngineError>;

    /// Check whether an index exists.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The engine answered 200
    /// * `Ok(false)` - The engine answered 404
    /// * `Err(SearchEngineError)` - Any other outcome
    async fn index_exists(&self, index: &str) -> Result<bool, SearchEngineError>;

    /// Create an index with the engine's default settings.
    async fn create_index(&self, index: &str) -> Result<Value, SearchEngineError>;

    /// Delete an index and all of its documents.
    async fn delete_index(&self, index: &str) -> Result<Value, SearchEngineError>;

    /// List all indices with the stats the engine reports (health, doc count, size).
    async fn list_indices(&self) -> Result<Value, SearchEngineError>;

    /// Check whether a document exists in an index.
    async fn document_exists(&self, index: &str, id: &str) -> Result<bool, SearchEngineError>;

    /// Fetch a document by id.
    async fn get_document(&self, index: &str, id: &str) -> Result<Value, SearchEngineError>;

    /// Index (upsert) a document.
    ///
    /// # Arguments
    ///
    /// * `index` - Target index name
    /// * `id` - Document id; `None` lets the engine generate one
    /// * `document` - The document body, passed through unmodified
    async fn index_document(
        &self,
        index: &str,
        id: Option<&str>,
        document: &Value,
    ) -> Result<Value, SearchEngineError>;

    /// Delete a document by id.
    async fn delete_document(&self, index: &str, id: &str) -> Result<Value, SearchEngineError>;

    /// Run a query written in the engine's native query language.
    ///
    /// `None` sends no body, which the engine treats as `match_all`.
    async fn search(&self, index: &str, query: Option<&Value>)
        -> Result<Value, SearchEngineError>;
}
