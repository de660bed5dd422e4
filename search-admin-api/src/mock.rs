//! In-memory engine used by the handler and route tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use search_admin_repository::{SearchEngineClient, SearchEngineError};
use serde_json::{json, Value};
use tokio::sync::Mutex;

type Index = BTreeMap<String, Value>;

/// Mock engine keeping indices in memory and recording every call by name.
#[derive(Default)]
pub(crate) struct MockEngine {
    indices: Mutex<BTreeMap<String, Index>>,
    calls: Mutex<Vec<&'static str>>,
    failures: HashMap<&'static str, SearchEngineError>,
    next_id: AtomicU64,
}

impl MockEngine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Start with an empty index.
    pub(crate) fn with_index(self, name: &str) -> Self {
        self.indices
            .try_lock()
            .expect("fresh mock is unlocked")
            .insert(name.to_string(), Index::new());
        self
    }

    /// Make one operation fail.
    pub(crate) fn failing(mut self, operation: &'static str, err: SearchEngineError) -> Self {
        self.failures.insert(operation, err);
        self
    }

    pub(crate) async fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().await.clone()
    }

    pub(crate) async fn has_index(&self, name: &str) -> bool {
        self.indices.lock().await.contains_key(name)
    }

    pub(crate) async fn document_count(&self, name: &str) -> usize {
        self.indices
            .lock()
            .await
            .get(name)
            .map(BTreeMap::len)
            .unwrap_or_default()
    }

    async fn record(&self, operation: &'static str) -> Result<(), SearchEngineError> {
        self.calls.lock().await.push(operation);
        match self.failures.get(operation) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SearchEngineClient for MockEngine {
    async fn health(&self) -> Result<Value, SearchEngineError> {
        self.record("health").await?;
        let count = self.indices.lock().await.len();
        Ok(json!({
            "cluster_name": "mock",
            "status": "green",
            "number_of_nodes": 1,
            "active_primary_shards": count,
        }))
    }

    async fn index_exists(&self, index: &str) -> Result<bool, SearchEngineError> {
        self.record("index_exists").await?;
        Ok(self.indices.lock().await.contains_key(index))
    }

    async fn create_index(&self, index: &str) -> Result<Value, SearchEngineError> {
        self.record("create_index").await?;
        let mut indices = self.indices.lock().await;
        if indices.contains_key(index) {
            return Err(SearchEngineError::from_status(
                400,
                r#"{"error":{"type":"resource_already_exists_exception"}}"#,
            ));
        }
        indices.insert(index.to_string(), Index::new());
        Ok(json!({"acknowledged": true, "shards_acknowledged": true, "index": index}))
    }

    async fn delete_index(&self, index: &str) -> Result<Value, SearchEngineError> {
        self.record("delete_index").await?;
        match self.indices.lock().await.remove(index) {
            Some(_) => Ok(json!({"acknowledged": true})),
            None => Err(SearchEngineError::not_found("index_not_found_exception")),
        }
    }

    async fn list_indices(&self) -> Result<Value, SearchEngineError> {
        self.record("list_indices").await?;
        let indices = self.indices.lock().await;
        let rows: Vec<Value> = indices
            .iter()
            .map(|(name, docs)| {
                json!({
                    "health": "green",
                    "status": "open",
                    "index": name,
                    "docs.count": docs.len().to_string(),
                })
            })
            .collect();
        Ok(Value::Array(rows))
    }

    async fn document_exists(&self, index: &str, id: &str) -> Result<bool, SearchEngineError> {
        self.record("document_exists").await?;
        Ok(self
            .indices
            .lock()
            .await
            .get(index)
            .is_some_and(|docs| docs.contains_key(id)))
    }

    async fn get_document(&self, index: &str, id: &str) -> Result<Value, SearchEngineError> {
        self.record("get_document").await?;
        let indices = self.indices.lock().await;
        let source = indices
            .get(index)
            .and_then(|docs| docs.get(id))
            .ok_or_else(|| SearchEngineError::not_found(r#"{"found":false}"#))?;
        Ok(json!({
            "_index": index,
            "_id": id,
            "_version": 1,
            "found": true,
            "_source": source,
        }))
    }

    async fn index_document(
        &self,
        index: &str,
        id: Option<&str>,
        document: &Value,
    ) -> Result<Value, SearchEngineError> {
        self.record("index_document").await?;
        let mut indices = self.indices.lock().await;
        let docs = indices
            .get_mut(index)
            .ok_or_else(|| SearchEngineError::not_found("index_not_found_exception"))?;

        let id = match id {
            Some(id) => id.to_string(),
            None => format!("generated-{}", self.next_id.fetch_add(1, Ordering::SeqCst)),
        };
        let result = match docs.insert(id.clone(), document.clone()) {
            Some(_) => "updated",
            None => "created",
        };
        Ok(json!({"_index": index, "_id": id, "result": result}))
    }

    async fn delete_document(&self, index: &str, id: &str) -> Result<Value, SearchEngineError> {
        self.record("delete_document").await?;
        let mut indices = self.indices.lock().await;
        match indices.get_mut(index).and_then(|docs| docs.remove(id)) {
            Some(_) => Ok(json!({"_index": index, "_id": id, "result": "deleted"})),
            None => Err(SearchEngineError::not_found(r#"{"result":"not_found"}"#)),
        }
    }

    async fn search(
        &self,
        index: &str,
        query: Option<&Value>,
    ) -> Result<Value, SearchEngineError> {
        self.record("search").await?;
        let indices = self.indices.lock().await;
        let docs = indices
            .get(index)
            .ok_or_else(|| SearchEngineError::not_found("index_not_found_exception"))?;

        // Every document matches; the query is echoed so tests can see it arrived intact.
        let hits: Vec<Value> = docs
            .iter()
            .map(|(id, source)| json!({"_index": index, "_id": id, "_score": 1.0, "_source": source}))
            .collect();
        Ok(json!({
            "took": 1,
            "hits": {"total": {"value": hits.len(), "relation": "eq"}, "hits": hits},
            "echo": query.cloned().unwrap_or(Value::Null),
        }))
    }
}
