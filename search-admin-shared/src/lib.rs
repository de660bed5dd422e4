//! # Search Admin Shared
//!
//! Request and response bodies exchanged over the search admin HTTP API.
//! Engine payloads (documents, queries, responses) stay as opaque JSON values.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Body of `POST /indices/{name}/document`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexDocumentBody {
    /// Caller-chosen document id. Absent or empty lets the engine pick one.
    /// Numeric ids are accepted and sent as their decimal text.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// The document content.
    #[serde(default)]
    pub document: Option<Value>,
}

impl IndexDocumentBody {
    /// The id to send to the engine, treating an empty string as absent.
    pub fn effective_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// The document, if it is a non-empty JSON object.
    pub fn valid_document(&self) -> Option<&Value> {
        self.document
            .as_ref()
            .filter(|doc| doc.as_object().is_some_and(|map| !map.is_empty()))
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(Number),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    }))
}

/// Body of `POST /search/{name}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchBody {
    /// Query in the engine's native query language.
    #[serde(default)]
    pub query: Option<Value>,
}

impl SearchBody {
    /// The query to send, with an explicit JSON `null` treated as absent.
    pub fn effective_query(&self) -> Option<&Value> {
        self.query.as_ref().filter(|q| !q.is_null())
    }
}

/// JSON error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_index_document_body_with_id() {
        let body: IndexDocumentBody =
            serde_json::from_value(json!({"id": "doc1", "document": {"title": "Dune"}})).unwrap();
        assert_eq!(body.effective_id(), Some("doc1"));
        assert_eq!(body.valid_document(), Some(&json!({"title": "Dune"})));
    }

    #[test]
    fn test_index_document_body_empty_id_is_absent() {
        let body: IndexDocumentBody =
            serde_json::from_value(json!({"id": "", "document": {"a": 1}})).unwrap();
        assert_eq!(body.effective_id(), None);
    }

    #[test]
    fn test_index_document_body_numeric_id() {
        let body: IndexDocumentBody =
            serde_json::from_value(json!({"id": 42, "document": {"a": 1}})).unwrap();
        assert_eq!(body.effective_id(), Some("42"));

        let body: IndexDocumentBody =
            serde_json::from_value(json!({"id": null, "document": {"a": 1}})).unwrap();
        assert_eq!(body.effective_id(), None);
    }

    #[test]
    fn test_index_document_body_rejects_structured_id() {
        let result = serde_json::from_value::<IndexDocumentBody>(
            json!({"id": {"nested": true}, "document": {"a": 1}}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_index_document_body_rejects_missing_and_empty() {
        let missing: IndexDocumentBody = serde_json::from_value(json!({"id": "x"})).unwrap();
        assert!(missing.valid_document().is_none());

        let null: IndexDocumentBody = serde_json::from_value(json!({"document": null})).unwrap();
        assert!(null.valid_document().is_none());

        let empty: IndexDocumentBody = serde_json::from_value(json!({"document": {}})).unwrap();
        assert!(empty.valid_document().is_none());

        let scalar: IndexDocumentBody =
            serde_json::from_value(json!({"document": "text"})).unwrap();
        assert!(scalar.valid_document().is_none());
    }

    #[test]
    fn test_search_body_null_query() {
        let body: SearchBody = serde_json::from_value(json!({"query": null})).unwrap();
        assert!(body.effective_query().is_none());

        let body: SearchBody = serde_json::from_value(json!({})).unwrap();
        assert!(body.effective_query().is_none());

        let body: SearchBody =
            serde_json::from_value(json!({"query": {"query": {"match_all": {}}}})).unwrap();
        assert_eq!(
            body.effective_query(),
            Some(&json!({"query": {"match_all": {}}}))
        );
    }

    #[test]
    fn test_error_body_serializes() {
        let body = ErrorBody::new("Index books does not exist");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"error": "Index books does not exist"})
        );
    }
}
