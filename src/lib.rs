//! graph-bulkload - 图数据批量导入的转换阶段
//!
//! 将原始文本记录解码为顶点，再把顶点编码为按行键排序的键值写入操作，
//! 交给有序键值存储的批量导入路径。
//!
//! - `core`: 顶点模型、行键与写入操作编码、错误类型
//! - `ingest`: 可插拔的解码器/编码器、策略注册表、逐条记录的导入阶段
//! - `job`: 单进程执行引擎（切分输入、并行处理、全局排序、批量提交）

pub mod config;
pub mod core;
pub mod ingest;
#[cfg(feature = "redb")]
pub mod job;
pub mod utils;

pub use crate::core::{BulkLoadError, BulkLoadResult, Mutation, PropertyValue, RowKey, Vertex};
pub use crate::ingest::{IngestionStage, StrategyRegistry};
