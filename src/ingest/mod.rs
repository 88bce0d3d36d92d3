//! 导入模块
//!
//! 由两个可插拔策略组成逐条记录的转换：
//!
//! ```text
//! Record ──▶ RecordDecoder ──▶ Vertex* ──▶ StoreEncoder ──▶ (RowKey, Mutation)* ──▶ MutationSink
//! ```
//!
//! 策略通过 `StrategyRegistry` 按配置名称解析，每个工作进程各自持有一份。

pub mod decoder;
pub mod encoder;
pub mod registry;
pub mod sink;
pub mod stage;
pub mod worker;

pub use decoder::{BatchDecoder, RecordDecoder, SingleDecoder};
pub use encoder::StoreEncoder;
pub use registry::{DecoderFactory, EncoderFactory, ResolvedStrategies, StrategyRegistry};
pub use sink::MutationSink;
pub use stage::IngestionStage;
pub use worker::{run_split, SplitStats};
