//! Codec 错误类型定义

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unknown value tag: 0x{0:02x}")]
    UnknownValueTag(u8),

    #[error("Invalid UTF-8 in {0}")]
    InvalidUtf8(&'static str),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Row key mismatch: {0}")]
    RowKeyMismatch(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        CodecError::InvalidData(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
pub type CodecResult<T> = std::result::Result<T, CodecError>;
