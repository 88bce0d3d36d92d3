//! 每行一个 JSON 对象的顶点记录
//!
//! `{"id": "v1", "label": "person", "properties": {"name": "Alice"}, "edges": ["v2"]}`，
//! `id` 可以是字符串或整数，`properties` 与 `edges` 可省略。

use serde::Deserialize;
use std::collections::BTreeMap;

use super::SingleDecoder;
use crate::core::error::{ParseError, ParseResult};
use crate::core::{PropertyValue, Vertex};

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDecoder;

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonId {
    Text(String),
    Number(i64),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonRecord {
    id: Option<JsonId>,
    label: Option<String>,
    #[serde(default)]
    properties: BTreeMap<String, PropertyValue>,
    #[serde(default)]
    edges: Vec<String>,
}

impl SingleDecoder for JsonDecoder {
    fn name(&self) -> &str {
        "json"
    }

    fn decode(&self, record: &str) -> ParseResult<Vertex> {
        let parsed: JsonRecord = serde_json::from_str(record)?;

        let id = match parsed.id {
            Some(JsonId::Text(s)) => s,
            Some(JsonId::Number(n)) => n.to_string(),
            None => String::new(),
        };
        if id.trim().is_empty() {
            return Err(ParseError::MissingId);
        }
        let label = parsed.label.unwrap_or_default();
        if label.trim().is_empty() {
            return Err(ParseError::MissingLabel);
        }

        let mut vertex = Vertex::new(id, label);
        for (name, value) in parsed.properties {
            vertex.set_property(name, value);
        }
        for (position, target) in parsed.edges.into_iter().enumerate() {
            if target.is_empty() {
                return Err(ParseError::EmptyEdgeTarget(position));
            }
            vertex.add_edge(target);
        }
        Ok(vertex)
    }
}
