//! 导入阶段
//!
//! 执行引擎对每条输入记录调用一次：解码 → 计算行键 → 构造空写入操作 → 编码 → 输出。
//! 一条记录的输出是原子的：解码失败或任一顶点编码失败时，该记录不输出任何内容。

use super::decoder::RecordDecoder;
use super::encoder::StoreEncoder;
use super::registry::{ResolvedStrategies, StrategyRegistry};
use super::sink::MutationSink;
use crate::config::IngestConfig;
use crate::core::error::{
    ConfigResult, EncodingError, EncodingResult, RecordError, StageError, StorageResult,
};
use crate::core::{Mutation, RowKey, Vertex};

/// 每个工作进程持有一个实例，解码器与编码器在构造后不再替换
pub struct IngestionStage {
    decoder: RecordDecoder,
    encoder: Box<dyn StoreEncoder>,
}

impl IngestionStage {
    pub fn new(decoder: RecordDecoder, encoder: Box<dyn StoreEncoder>) -> Self {
        Self { decoder, encoder }
    }

    pub fn from_config(registry: &StrategyRegistry, config: &IngestConfig) -> ConfigResult<Self> {
        let ResolvedStrategies { decoder, encoder } = registry.resolve(config)?;
        Ok(Self::new(decoder, encoder))
    }

    pub fn decoder(&self) -> &RecordDecoder {
        &self.decoder
    }

    pub fn encoder(&self) -> &dyn StoreEncoder {
        self.encoder.as_ref()
    }

    /// 转换一条记录，返回按解码顺序排列的全部输出
    pub fn transform(&self, index: u64, record: &str) -> Result<Vec<(RowKey, Mutation)>, RecordError> {
        let vertices = self.decode(index, record)?;
        self.encode(index, &vertices)
    }

    /// 按解码器种类解码一条记录
    pub fn decode(&self, index: u64, record: &str) -> Result<Vec<Vertex>, RecordError> {
        self.decoder
            .decode(record)
            .map_err(|source| RecordError::Parse { index, source })
    }

    /// 编码一条记录的全部顶点，任一顶点失败时整条记录没有输出
    pub fn encode(&self, index: u64, vertices: &[Vertex]) -> Result<Vec<(RowKey, Mutation)>, RecordError> {
        vertices
            .iter()
            .map(|vertex| self.encode_vertex(vertex))
            .collect::<EncodingResult<Vec<_>>>()
            .map_err(|source| RecordError::Encoding { index, source })
    }

    /// 转换一条记录并写入输出通道，返回输出数量
    pub fn process<S>(&self, index: u64, record: &str, sink: &mut S) -> Result<usize, StageError>
    where
        S: MutationSink + ?Sized,
    {
        let pairs = self.transform(index, record)?;
        Ok(emit_all(pairs, sink)?)
    }

    fn encode_vertex(&self, vertex: &Vertex) -> EncodingResult<(RowKey, Mutation)> {
        if !vertex.has_identity() {
            return Err(EncodingError::MissingIdentity);
        }
        let key = self.encoder.row_key_for(vertex.id());
        let mutation = self.encoder.encode(Mutation::new(key.clone()), vertex)?;
        if mutation.row() != &key {
            return Err(EncodingError::KeyMismatch {
                expected: key.to_string(),
                actual: mutation.row().to_string(),
            });
        }
        Ok((key, mutation))
    }
}

/// 按顺序写入输出通道，返回写入数量
pub(crate) fn emit_all<S>(pairs: Vec<(RowKey, Mutation)>, sink: &mut S) -> StorageResult<usize>
where
    S: MutationSink + ?Sized,
{
    let emitted = pairs.len();
    for (key, mutation) in pairs {
        sink.emit(key, mutation)?;
    }
    Ok(emitted)
}

impl std::fmt::Debug for IngestionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IngestionStage")
            .field("decoder", &self.decoder)
            .field("encoder", &self.encoder.name())
            .finish()
    }
}
