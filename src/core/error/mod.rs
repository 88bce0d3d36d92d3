//! 批量导入错误处理
//!
//! ## 错误分类
//!
//! 1. **启动期致命错误**：`ConfigurationError`，策略解析失败时工作进程在处理任何记录前终止
//! 2. **逐条记录错误**：`ParseError` / `EncodingError`，包装为带序号的 `RecordError`，
//!    该记录不产生任何输出，后续记录继续处理
//! 3. **输出错误**：`StorageError`，输出通道或存储提交失败，终止当前工作进程
//!
//! `BulkLoadResult<T>` 提供统一的返回类型

use thiserror::Error;

pub mod config;
pub mod record;
pub mod storage;

pub use config::{ConfigResult, ConfigurationError, StrategyKind};
pub use record::{
    EncodingError, EncodingResult, ParseError, ParseResult, RecordError, StageError,
};
pub use storage::{StorageError, StorageResult};

/// 统一的批量导入错误类型
#[derive(Error, Debug, Clone)]
pub enum BulkLoadError {
    #[error("配置错误: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("{0}")]
    Record(#[from] RecordError),

    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),

    #[error("IO错误: {0}")]
    Io(String),

    #[error("工作线程错误: {0}")]
    Worker(String),
}

/// 统一的结果类型
pub type BulkLoadResult<T> = Result<T, BulkLoadError>;

impl BulkLoadError {
    /// 启动期错误，发生时尚未产生任何输出
    pub fn is_fatal_at_startup(&self) -> bool {
        matches!(self, BulkLoadError::Configuration(_))
    }
}

impl From<StageError> for BulkLoadError {
    fn from(e: StageError) -> Self {
        match e {
            StageError::Record(r) => BulkLoadError::Record(r),
            StageError::Storage(s) => BulkLoadError::Storage(s),
        }
    }
}

impl From<std::io::Error> for BulkLoadError {
    fn from(e: std::io::Error) -> Self {
        BulkLoadError::Io(e.to_string())
    }
}
