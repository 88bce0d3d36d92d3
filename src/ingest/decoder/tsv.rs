//! 制表符分隔的顶点记录
//!
//! 格式：`id \t label [\t k=v,k=v [\t target,target]]`

use super::{split_list, SingleDecoder};
use crate::core::error::{ParseError, ParseResult};
use crate::core::{PropertyValue, Vertex};

const FIELD_SEPARATOR: char = '\t';

#[derive(Debug, Default, Clone, Copy)]
pub struct TsvDecoder;

impl TsvDecoder {
    fn parse_properties(vertex: &mut Vertex, text: &str) -> ParseResult<()> {
        for entry in split_list(text) {
            let (name, value) = entry
                .split_once('=')
                .ok_or_else(|| ParseError::MalformedProperty(entry.to_string()))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(ParseError::MalformedProperty(entry.to_string()));
            }
            if vertex.property(name).is_some() {
                return Err(ParseError::DuplicateProperty(name.to_string()));
            }
            vertex.set_property(name, PropertyValue::infer(value.trim()));
        }
        Ok(())
    }

    fn parse_edges(vertex: &mut Vertex, text: &str) -> ParseResult<()> {
        for (position, target) in split_list(text).into_iter().enumerate() {
            if target.is_empty() {
                return Err(ParseError::EmptyEdgeTarget(position));
            }
            vertex.add_edge(target);
        }
        Ok(())
    }
}

impl SingleDecoder for TsvDecoder {
    fn name(&self) -> &str {
        "tsv"
    }

    fn decode(&self, record: &str) -> ParseResult<Vertex> {
        let record = record.trim_end_matches(['\r', '\n']);
        let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
        if !(2..=4).contains(&fields.len()) {
            return Err(ParseError::FieldCount {
                expected: "2-4",
                actual: fields.len(),
            });
        }

        let id = fields[0].trim();
        if id.is_empty() {
            return Err(ParseError::MissingId);
        }
        let label = fields[1].trim();
        if label.is_empty() {
            return Err(ParseError::MissingLabel);
        }

        let mut vertex = Vertex::new(id, label);
        if let Some(properties) = fields.get(2) {
            Self::parse_properties(&mut vertex, properties)?;
        }
        if let Some(edges) = fields.get(3) {
            Self::parse_edges(&mut vertex, edges)?;
        }
        Ok(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_person_record() {
        let vertex = TsvDecoder.decode("v1\tperson\tname=Alice").expect("解码失败");
        assert_eq!(vertex, Vertex::new("v1", "person").with_property("name", "Alice"));
    }

    #[test]
    fn test_decode_typed_properties_and_edges() {
        let vertex = TsvDecoder
            .decode("v2\tperson\tage=30, score=9.5,active=true,zip=\"02134\"\tv1, v3\r\n")
            .expect("解码失败");

        assert_eq!(vertex.property("age"), Some(&PropertyValue::Int(30)));
        assert_eq!(vertex.property("score"), Some(&PropertyValue::Float(9.5)));
        assert_eq!(vertex.property("active"), Some(&PropertyValue::Bool(true)));
        assert_eq!(vertex.property("zip"), Some(&PropertyValue::from("02134")));
        assert_eq!(vertex.edges(), &["v1".to_string(), "v3".to_string()]);
    }

    #[test]
    fn test_decode_empty_property_and_edge_fields() {
        let vertex = TsvDecoder.decode("v3\tcity\t\t").expect("解码失败");
        assert_eq!(vertex, Vertex::new("v3", "city"));
    }

    #[test]
    fn test_decode_malformed_line() {
        assert_eq!(
            TsvDecoder.decode("not-a-valid-line"),
            Err(ParseError::FieldCount {
                expected: "2-4",
                actual: 1
            })
        );
        assert!(matches!(
            TsvDecoder.decode("a\tb\tc\td\te"),
            Err(ParseError::FieldCount { actual: 5, .. })
        ));
    }

    #[test]
    fn test_decode_missing_identity_and_label() {
        assert_eq!(TsvDecoder.decode(" \tperson"), Err(ParseError::MissingId));
        assert_eq!(TsvDecoder.decode("v1\t"), Err(ParseError::MissingLabel));
    }

    #[test]
    fn test_decode_bad_properties() {
        assert_eq!(
            TsvDecoder.decode("v1\tperson\tname"),
            Err(ParseError::MalformedProperty("name".to_string()))
        );
        assert_eq!(
            TsvDecoder.decode("v1\tperson\t=x"),
            Err(ParseError::MalformedProperty("=x".to_string()))
        );
        assert_eq!(
            TsvDecoder.decode("v1\tperson\tname=a,name=b"),
            Err(ParseError::DuplicateProperty("name".to_string()))
        );
    }

    #[test]
    fn test_decode_empty_edge_target() {
        assert_eq!(
            TsvDecoder.decode("v1\tperson\t\tv2,,v3"),
            Err(ParseError::EmptyEdgeTarget(1))
        );
    }
}
