//! 整体 JSON 编码器
//!
//! 行键为顶点标识的原始字节；单个单元格 `v:json` 保存整个顶点的 JSON 文档。

use super::{check_target, StoreEncoder};
use crate::core::codec::{CodecError, CodecResult, KeyUtils};
use crate::core::error::{EncodingError, EncodingResult};
use crate::core::{Mutation, PropertyValue, RowKey, Vertex};

pub const FAMILY_VERTEX: &[u8] = b"v";
pub const QUALIFIER_JSON: &[u8] = b"json";

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonEncoder;

impl StoreEncoder for JsonEncoder {
    fn name(&self) -> &str {
        "json"
    }

    fn row_key_for(&self, id: &str) -> RowKey {
        RowKey::new(KeyUtils::encode_plain_key(id))
    }

    fn encode(&self, mut mutation: Mutation, vertex: &Vertex) -> EncodingResult<Mutation> {
        check_target(self, &mutation, vertex)?;
        // serde_json 把非有限浮点数写成 null，读取时无法还原
        if let Some((name, value)) = vertex
            .properties()
            .iter()
            .find(|(_, value)| matches!(value, PropertyValue::Float(f) if !f.is_finite()))
        {
            return Err(EncodingError::Serialize(format!(
                "属性 {} 的值 {} 无法表示为 JSON",
                name, value
            )));
        }
        let document = serde_json::to_vec(vertex)?;
        mutation.put(FAMILY_VERTEX, QUALIFIER_JSON, document);
        Ok(mutation)
    }

    fn read_vertex(&self, key: &RowKey, mutation: &Mutation) -> CodecResult<Vertex> {
        let id = KeyUtils::decode_plain_key(key.as_bytes())?;
        let document = mutation
            .get(FAMILY_VERTEX, QUALIFIER_JSON)
            .ok_or_else(|| CodecError::MissingColumn("v:json".to_string()))?;
        let vertex: Vertex = serde_json::from_slice(document)?;
        if vertex.id() != id {
            return Err(CodecError::RowKeyMismatch(format!(
                "document id '{}' does not match row key '{}'",
                vertex.id(),
                id
            )));
        }
        Ok(vertex)
    }
}
