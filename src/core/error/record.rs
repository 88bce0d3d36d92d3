//! 逐条记录的错误类型
//!
//! 解析错误与编码错误只影响当前记录，执行引擎跳过该记录后继续处理

use thiserror::Error;

use super::storage::StorageError;

/// 解析结果类型
pub type ParseResult<T> = Result<T, ParseError>;

/// 编码结果类型
pub type EncodingResult<T> = Result<T, EncodingError>;

/// 记录解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("字段数量错误: 期望 {expected}, 实际 {actual}")]
    FieldCount { expected: &'static str, actual: usize },

    #[error("缺少顶点标识")]
    MissingId,

    #[error("缺少顶点标签")]
    MissingLabel,

    #[error("属性格式错误: '{0}'")]
    MalformedProperty(String),

    #[error("重复属性: {0}")]
    DuplicateProperty(String),

    #[error("边的目标顶点为空 (位置 {0})")]
    EmptyEdgeTarget(usize),

    #[error("空的顶点条目 (位置 {0})")]
    EmptyEntry(usize),

    #[error("JSON 解析错误: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError::Json(e.to_string())
    }
}

/// 顶点编码错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("顶点缺少标识，无法编码")]
    MissingIdentity,

    #[error("写入操作的行键与顶点行键不一致: 期望 {expected}, 实际 {actual}")]
    KeyMismatch { expected: String, actual: String },

    #[error("值过大: {0}")]
    ValueTooLarge(String),

    #[error("序列化错误: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for EncodingError {
    fn from(e: serde_json::Error) -> Self {
        EncodingError::Serialize(e.to_string())
    }
}

/// 带记录序号的单条记录错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("记录 {index} 解析失败: {source}")]
    Parse {
        index: u64,
        #[source]
        source: ParseError,
    },

    #[error("记录 {index} 编码失败: {source}")]
    Encoding {
        index: u64,
        #[source]
        source: EncodingError,
    },
}

impl RecordError {
    pub fn index(&self) -> u64 {
        match self {
            RecordError::Parse { index, .. } | RecordError::Encoding { index, .. } => *index,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, RecordError::Parse { .. })
    }
}

/// 导入阶段错误
///
/// 记录错误可恢复；输出通道（存储）错误会终止当前工作进程
#[derive(Error, Debug, Clone)]
pub enum StageError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("输出失败: {0}")]
    Storage(#[from] StorageError),
}

impl StageError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StageError::Record(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_index() {
        let err = RecordError::Parse {
            index: 7,
            source: ParseError::MissingId,
        };
        assert_eq!(err.index(), 7);
        assert!(err.is_parse());
        assert_eq!(err.to_string(), "记录 7 解析失败: 缺少顶点标识");
    }

    #[test]
    fn test_stage_error_recoverable() {
        let record: StageError = RecordError::Encoding {
            index: 1,
            source: EncodingError::MissingIdentity,
        }
        .into();
        assert!(record.is_recoverable());

        let storage: StageError = StorageError::DbError("disk full".to_string()).into();
        assert!(!storage.is_recoverable());
    }
}
