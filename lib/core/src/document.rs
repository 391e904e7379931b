use serde::Serialize;
use std::collections::HashMap;

use crate::value::Value;

/// A search hit or a document fetched by key
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Document {
    pub primary_key: u64,
    /// Similarity to the query, bigger is more similar
    pub score: f32,
    /// Bytes-valued columns come back as raw [`Value::Bytes`]
    #[serde(rename = "forwards", skip_serializing_if = "HashMap::is_empty")]
    pub forward_columns: HashMap<String, Value>,
}

impl Document {
    pub fn forward(&self, name: &str) -> Option<&Value> {
        self.forward_columns.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct QueryResponse {
    /// JSON formatted, only filled in debug mode
    pub debug_info: String,
    pub latency_us: u64,
    /// One document list per query row
    pub results: Vec<Vec<Document>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_json() {
        let mut doc = Document {
            primary_key: 7,
            score: 0.5,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r#"{"primary_key":7,"score":0.5}"#
        );

        doc.forward_columns.insert("age".to_string(), Value::Int32(42));
        let json: serde_json::Value = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["forwards"]["age"], 42);
        assert_eq!(doc.forward("age"), Some(&Value::Int32(42)));
        assert_eq!(doc.forward("missing"), None);
    }
}
