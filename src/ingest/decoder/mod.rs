//! 记录解码器
//!
//! 解码器分为两类：
//! - `SingleDecoder`：一条记录恰好解码为一个顶点
//! - `BatchDecoder`：一条记录解码为零个或多个顶点
//!
//! `RecordDecoder` 在策略解析时确定种类，导入阶段按种类分派，不会调用另一条路径。

use crate::core::error::ParseResult;
use crate::core::Vertex;

pub mod adjacency;
pub mod json;
pub mod list;
pub mod tsv;

pub use adjacency::AdjacencyDecoder;
pub use json::JsonDecoder;
pub use list::ListDecoder;
pub use tsv::TsvDecoder;

/// 一条记录解码为一个顶点
pub trait SingleDecoder: Send {
    fn name(&self) -> &str;

    fn decode(&self, record: &str) -> ParseResult<Vertex>;
}

/// 一条记录解码为顶点序列
pub trait BatchDecoder: Send {
    fn name(&self) -> &str;

    fn decode_batch(&self, record: &str) -> ParseResult<Vec<Vertex>>;
}

/// 已解析的解码器
pub enum RecordDecoder {
    Single(Box<dyn SingleDecoder>),
    Batch(Box<dyn BatchDecoder>),
}

impl RecordDecoder {
    pub fn single<D: SingleDecoder + 'static>(decoder: D) -> Self {
        RecordDecoder::Single(Box::new(decoder))
    }

    pub fn batch<D: BatchDecoder + 'static>(decoder: D) -> Self {
        RecordDecoder::Batch(Box::new(decoder))
    }

    pub fn name(&self) -> &str {
        match self {
            RecordDecoder::Single(d) => d.name(),
            RecordDecoder::Batch(d) => d.name(),
        }
    }

    pub fn supports_batch(&self) -> bool {
        matches!(self, RecordDecoder::Batch(_))
    }

    /// 按解码器种类解码，顶点顺序与解码顺序一致
    pub fn decode(&self, record: &str) -> ParseResult<Vec<Vertex>> {
        match self {
            RecordDecoder::Single(d) => d.decode(record).map(|v| vec![v]),
            RecordDecoder::Batch(d) => d.decode_batch(record),
        }
    }
}

impl std::fmt::Debug for RecordDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.supports_batch() { "Batch" } else { "Single" };
        write!(f, "RecordDecoder::{}({})", kind, self.name())
    }
}

/// 拆分逗号分隔的列表，跳过首尾空白；空列表返回空
pub(crate) fn split_list(text: &str) -> Vec<&str> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(',').map(str::trim).collect()
}
