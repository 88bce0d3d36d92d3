//! 按列族展开的二进制编码器
//!
//! 行键：`[salt: u32 BE][id]`，见 `KeyUtils::encode_vertex_key`
//!
//! | 列族 | 列限定符            | 值                 |
//! |------|---------------------|--------------------|
//! | `m`  | `label`             | 标签 UTF-8         |
//! | `p`  | 属性名              | `value_codec` 编码 |
//! | `e`  | 出边序号 (u32 BE)   | 目标顶点标识       |
//!
//! 出边以序号为列限定符，保留顺序和重复的目标。

use super::{check_target, StoreEncoder};
use crate::core::codec::{decode_value, encode_value, CodecError, CodecResult, KeyUtils};
use crate::core::error::{EncodingError, EncodingResult};
use crate::core::{Mutation, RowKey, Vertex};

pub const FAMILY_META: &[u8] = b"m";
pub const FAMILY_PROPERTIES: &[u8] = b"p";
pub const FAMILY_EDGES: &[u8] = b"e";
pub const QUALIFIER_LABEL: &[u8] = b"label";

#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryEncoder;

impl StoreEncoder for BinaryEncoder {
    fn name(&self) -> &str {
        "binary"
    }

    fn row_key_for(&self, id: &str) -> RowKey {
        RowKey::new(KeyUtils::encode_vertex_key(id))
    }

    fn encode(&self, mut mutation: Mutation, vertex: &Vertex) -> EncodingResult<Mutation> {
        check_target(self, &mutation, vertex)?;

        mutation.put(FAMILY_META, QUALIFIER_LABEL, vertex.label().as_bytes());
        for (name, value) in vertex.properties() {
            mutation.put(FAMILY_PROPERTIES, name.as_bytes(), encode_value(value));
        }
        for (position, target) in vertex.edges().iter().enumerate() {
            let position = u32::try_from(position).map_err(|_| {
                EncodingError::ValueTooLarge(format!("顶点 {} 的出边数量超出上限", vertex.id()))
            })?;
            mutation.put(FAMILY_EDGES, position.to_be_bytes(), target.as_bytes());
        }
        Ok(mutation)
    }

    fn read_vertex(&self, key: &RowKey, mutation: &Mutation) -> CodecResult<Vertex> {
        if mutation.row() != key {
            return Err(CodecError::RowKeyMismatch(format!(
                "mutation targets {}, expected {}",
                mutation.row(),
                key
            )));
        }
        let id = KeyUtils::decode_vertex_key(key.as_bytes())?;

        let label = mutation
            .get(FAMILY_META, QUALIFIER_LABEL)
            .ok_or_else(|| CodecError::MissingColumn("m:label".to_string()))?;
        let label = std::str::from_utf8(label).map_err(|_| CodecError::InvalidUtf8("label"))?;

        let mut vertex = Vertex::new(id, label);
        for (qualifier, value) in mutation.family(FAMILY_PROPERTIES) {
            let name = std::str::from_utf8(qualifier)
                .map_err(|_| CodecError::InvalidUtf8("property name"))?;
            vertex.set_property(name, decode_value(value)?);
        }
        // 列限定符为大端序号，按字节排序即按出边顺序排序
        for (qualifier, target) in mutation.family(FAMILY_EDGES) {
            if qualifier.len() != 4 {
                return Err(CodecError::InvalidData(format!(
                    "Invalid edge qualifier length: {}",
                    qualifier.len()
                )));
            }
            let target =
                std::str::from_utf8(target).map_err(|_| CodecError::InvalidUtf8("edge target"))?;
            vertex.add_edge(target);
        }
        Ok(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PropertyValue;

    fn encode(vertex: &Vertex) -> EncodingResult<Mutation> {
        let key = BinaryEncoder.row_key_for(vertex.id());
        BinaryEncoder.encode(Mutation::new(key), vertex)
    }

    #[test]
    fn test_row_key_is_deterministic() {
        assert_eq!(BinaryEncoder.row_key_for("v1"), BinaryEncoder.row_key_for("v1"));
        assert_eq!(
            BinaryEncoder.row_key_for("v1").as_bytes(),
            KeyUtils::encode_vertex_key("v1").as_slice()
        );
    }

    #[test]
    fn test_encode_columns() {
        let vertex = Vertex::new("v1", "person")
            .with_property("name", "Alice")
            .with_edge("v2")
            .with_edge("v2");
        let mutation = encode(&vertex).expect("编码失败");

        assert_eq!(mutation.row(), &BinaryEncoder.row_key_for("v1"));
        assert_eq!(mutation.get(b"m", b"label"), Some(&b"person"[..]));
        assert_eq!(
            mutation.get(b"p", b"name"),
            Some(encode_value(&PropertyValue::from("Alice")).as_slice())
        );
        // 重复的出边目标不会被合并
        assert_eq!(mutation.family(FAMILY_EDGES).count(), 2);
    }

    #[test]
    fn test_encode_rejects_missing_identity() {
        let vertex = Vertex::new("", "person");
        let result = BinaryEncoder.encode(Mutation::new(RowKey::new(vec![1])), &vertex);
        assert_eq!(result, Err(EncodingError::MissingIdentity));
    }

    #[test]
    fn test_encode_rejects_wrong_target() {
        let vertex = Vertex::new("v1", "person");
        let wrong = Mutation::new(BinaryEncoder.row_key_for("v2"));
        assert!(matches!(
            BinaryEncoder.encode(wrong, &vertex),
            Err(EncodingError::KeyMismatch { .. })
        ));
    }

    #[test]
    fn test_read_vertex_restores_every_field() {
        let mut edges_vertex = Vertex::new("v7", "person")
            .with_property("name", "Alice")
            .with_property("age", 30i64)
            .with_property("score", 0.5)
            .with_property("vip", true);
        for i in 0..300 {
            edges_vertex.add_edge(format!("t{}", i));
        }
        let mutation = encode(&edges_vertex).expect("编码失败");

        let restored = BinaryEncoder
            .read_vertex(mutation.row(), &mutation)
            .expect("读取失败");
        assert_eq!(restored, edges_vertex);
    }

    #[test]
    fn test_read_vertex_errors() {
        let key = BinaryEncoder.row_key_for("v1");
        let empty = Mutation::new(key.clone());
        assert_eq!(
            BinaryEncoder.read_vertex(&key, &empty),
            Err(CodecError::MissingColumn("m:label".to_string()))
        );

        let other = BinaryEncoder.row_key_for("v2");
        assert!(matches!(
            BinaryEncoder.read_vertex(&other, &empty),
            Err(CodecError::RowKeyMismatch(_))
        ));
    }
}
