use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::value::PropertyValue;

/// 解码与编码之间传递的顶点
///
/// `id` 在创建后不可修改；空 `id` 表示顶点没有标识，任何编码器都必须拒绝它。
/// 属性按名称排序存放，保证同一顶点的编码结果稳定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    id: String,
    label: String,
    #[serde(default)]
    properties: BTreeMap<String, PropertyValue>,
    #[serde(default)]
    edges: Vec<String>,
}

impl Vertex {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            properties: BTreeMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_edge(mut self, target: impl Into<String>) -> Self {
        self.edges.push(target.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn has_identity(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn properties(&self) -> &BTreeMap<String, PropertyValue> {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// 设置属性，返回被覆盖的旧值
    pub fn set_property(&mut self, name: impl Into<String>, value: PropertyValue) -> Option<PropertyValue> {
        self.properties.insert(name.into(), value)
    }

    /// 出边目标顶点，保持输入顺序
    pub fn edges(&self) -> &[String] {
        &self.edges
    }

    pub fn add_edge(&mut self, target: impl Into<String>) {
        self.edges.push(target.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_builder() {
        let vertex = Vertex::new("v1", "person")
            .with_property("name", "Alice")
            .with_property("age", 30i64)
            .with_edge("v2");

        assert_eq!(vertex.id(), "v1");
        assert_eq!(vertex.label(), "person");
        assert_eq!(vertex.property("name"), Some(&PropertyValue::from("Alice")));
        assert_eq!(vertex.property("age"), Some(&PropertyValue::Int(30)));
        assert_eq!(vertex.edges(), &["v2".to_string()]);
        assert!(vertex.has_identity());
    }

    #[test]
    fn test_vertex_without_identity() {
        let vertex = Vertex::new("", "person");
        assert!(!vertex.has_identity());
    }

    #[test]
    fn test_property_order_irrelevant() {
        let a = Vertex::new("v1", "person")
            .with_property("a", 1i64)
            .with_property("b", 2i64);
        let b = Vertex::new("v1", "person")
            .with_property("b", 2i64)
            .with_property("a", 1i64);
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_defaults() {
        let vertex: Vertex =
            serde_json::from_str(r#"{"id":"v9","label":"city"}"#).expect("反序列化失败");
        assert_eq!(vertex, Vertex::new("v9", "city"));
    }
}
