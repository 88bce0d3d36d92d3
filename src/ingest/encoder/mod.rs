//! 存储编码器
//!
//! 编码器把顶点变为针对其行键的写入操作。约定：对任意顶点 `v`，
//! `encode(Mutation::new(row_key_for(v.id())), v)` 返回的写入操作行键等于 `row_key_for(v.id())`。
//! 每个编码器同时提供对应的读取方法，把行键和写入操作还原为顶点。

use crate::core::codec::CodecResult;
use crate::core::error::{EncodingError, EncodingResult};
use crate::core::{Mutation, RowKey, Vertex};

pub mod binary;
pub mod json;

pub use binary::BinaryEncoder;
pub use json::JsonEncoder;

pub trait StoreEncoder: Send {
    fn name(&self) -> &str;

    /// 由顶点标识确定性地生成行键
    fn row_key_for(&self, id: &str) -> RowKey;

    /// 向已指向 `row_key_for(vertex.id())` 的写入操作填充顶点的标签、属性和出边
    fn encode(&self, mutation: Mutation, vertex: &Vertex) -> EncodingResult<Mutation>;

    /// 从行键和写入操作还原顶点
    fn read_vertex(&self, key: &RowKey, mutation: &Mutation) -> CodecResult<Vertex>;
}

/// 编码前的通用校验：顶点必须有标识，写入操作必须指向该顶点的行键
pub(crate) fn check_target(
    encoder: &dyn StoreEncoder,
    mutation: &Mutation,
    vertex: &Vertex,
) -> EncodingResult<()> {
    if !vertex.has_identity() {
        return Err(EncodingError::MissingIdentity);
    }
    let expected = encoder.row_key_for(vertex.id());
    if mutation.row() != &expected {
        return Err(EncodingError::KeyMismatch {
            expected: expected.to_string(),
            actual: mutation.row().to_string(),
        });
    }
    Ok(())
}
