//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use ::opensearch::{
    auth::Credentials,
    cat::CatIndicesParts,
    cluster::ClusterHealthParts,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts},
    DeleteParts, ExistsParts, GetParts, IndexParts, OpenSearch, SearchParts,
};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::config::EngineConfig;
use crate::errors::SearchEngineError;
use crate::interfaces::SearchEngineClient;
use crate::opensearch::response::{exists_from_status, json_or_error};

/// OpenSearch client implementation.
///
/// Holds one transport to a single cluster node. The client is cheap to share
/// behind an `Arc` and safe for concurrent use.
///
/// # Example
///
/// ```ignore
/// use search_admin_repository::{EngineConfig, OpenSearchClient, SearchEngineClient};
///
/// let config = EngineConfig::new("http://localhost:9200").with_credentials("elastic", "changeme");
/// let client = OpenSearchClient::new(&config).await?;
///
/// if !client.index_exists("books").await? {
///     client.create_index("books").await?;
/// }
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new client connected to the configured node.
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchEngineError::ConnectionFailure)` - If the URL is invalid or the transport can't be built
    pub async fn new(config: &EngineConfig) -> Result<Self, SearchEngineError> {
        let parsed_url =
            Url::parse(&config.url).map_err(|e| SearchEngineError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();
        if let Some((username, password)) = config.credentials() {
            builder = builder.auth(Credentials::Basic(
                username.to_string(),
                password.to_string(),
            ));
        }
        let transport = builder
            .build()
            .map_err(|e| SearchEngineError::connection(e.to_string()))?;

        info!(
            url = %config.url,
            authenticated = config.credentials().is_some(),
            "Created OpenSearch client"
        );

        Ok(Self {
            client: OpenSearch::new(transport),
        })
    }

    fn transport_error(operation: &str, e: ::opensearch::Error) -> SearchEngineError {
        error!(operation, error = %e, "Engine unreachable");
        SearchEngineError::connection(e.to_string())
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    #[instrument(skip(self))]
    async fn health(&self) -> Result<Value, SearchEngineError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| Self::transport_error("health", e))?;

        json_or_error(response, "health").await
    }

    #[instrument(skip(self))]
    async fn index_exists(&self, index: &str) -> Result<bool, SearchEngineError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| Self::transport_error("index_exists", e))?;

        let exists = exists_from_status(response.status_code().as_u16(), "index_exists")?;
        debug!(index, exists, "Checked index");
        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn create_index(&self, index: &str) -> Result<Value, SearchEngineError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .send()
            .await
            .map_err(|e| Self::transport_error("create_index", e))?;

        let body = json_or_error(response, "create_index").await?;
        info!(index, "Index created");
        Ok(body)
    }

    #[instrument(skip(self))]
    async fn delete_index(&self, index: &str) -> Result<Value, SearchEngineError> {
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| Self::transport_error("delete_index", e))?;

        let body = json_or_error(response, "delete_index").await?;
        info!(index, "Index deleted");
        Ok(body)
    }

    #[instrument(skip(self))]
    async fn list_indices(&self) -> Result<Value, SearchEngineError> {
        let response = self
            .client
            .cat()
            .indices(CatIndicesParts::None)
            .format("json")
            .send()
            .await
            .map_err(|e| Self::transport_error("list_indices", e))?;

        json_or_error(response, "list_indices").await
    }

    #[instrument(skip(self))]
    async fn document_exists(&self, index: &str, id: &str) -> Result<bool, SearchEngineError> {
        let response = self
            .client
            .exists(ExistsParts::IndexId(index, id))
            .send()
            .await
            .map_err(|e| Self::transport_error("document_exists", e))?;

        let exists = exists_from_status(response.status_code().as_u16(), "document_exists")?;
        debug!(index, id, exists, "Checked document");
        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn get_document(&self, index: &str, id: &str) -> Result<Value, SearchEngineError> {
        let response = self
            .client
            .get(GetParts::IndexId(index, id))
            .send()
            .await
            .map_err(|e| Self::transport_error("get_document", e))?;

        json_or_error(response, "get_document").await
    }

    #[instrument(skip(self, document))]
    async fn index_document(
        &self,
        index: &str,
        id: Option<&str>,
        document: &Value,
    ) -> Result<Value, SearchEngineError> {
        let parts = match id {
            Some(id) => IndexParts::IndexId(index, id),
            None => IndexParts::Index(index),
        };

        let response = self
            .client
            .index(parts)
            .body(document)
            .send()
            .await
            .map_err(|e| Self::transport_error("index_document", e))?;

        let body = json_or_error(response, "index_document").await?;
        debug!(
            index,
            id = body.get("_id").and_then(serde_json::Value::as_str).unwrap_or_default(),
            result = body.get("result").and_then(serde_json::Value::as_str).unwrap_or_default(),
            "Document indexed"
        );
        Ok(body)
    }

    #[instrument(skip(self))]
    async fn delete_document(&self, index: &str, id: &str) -> Result<Value, SearchEngineError> {
        let response = self
            .client
            .delete(DeleteParts::IndexId(index, id))
            .send()
            .await
            .map_err(|e| Self::transport_error("delete_document", e))?;

        let body = json_or_error(response, "delete_document").await?;
        debug!(index, id, "Document deleted");
        Ok(body)
    }

    #[instrument(skip(self, query))]
    async fn search(
        &self,
        index: &str,
        query: Option<&Value>,
    ) -> Result<Value, SearchEngineError> {
        let indices = [index];
        let request = self.client.search(SearchParts::Index(&indices));
        let sent = match query {
            Some(query) => request.body(query).send().await,
            None => request.send().await,
        };
        let response = sent.map_err(|e| Self::transport_error("search", e))?;

        json_or_error(response, "search").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_rejects_invalid_url() {
        let config = EngineConfig::new("not a url");
        let result = OpenSearchClient::new(&config).await;
        assert!(matches!(
            result,
            Err(SearchEngineError::ConnectionFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_new_with_credentials() {
        let config = EngineConfig::new("http://localhost:9200").with_credentials("elastic", "pw");
        assert!(OpenSearchClient::new(&config).await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_engine_is_connection_failure() {
        // Nothing listens on the discard port.
        let config = EngineConfig::new("http://127.0.0.1:9");
        let client = OpenSearchClient::new(&config).await.unwrap();

        let result = client.index_exists("books").await;
        assert!(matches!(
            result,
            Err(SearchEngineError::ConnectionFailure(_))
        ));
    }
}
