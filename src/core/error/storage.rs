//! 存储层错误类型
//!
//! 涵盖输出通道与批量提交相关的错误

use thiserror::Error;

/// 存储层结果类型
pub type StorageResult<T> = Result<T, StorageError>;

/// 存储层错误类型
#[derive(Error, Debug, Clone)]
pub enum StorageError {
    #[error("数据库错误: {0}")]
    DbError(String),
    #[error("反序列化错误: {0}")]
    DeserializeError(String),
    #[error("事务错误: {0}")]
    TransactionError(String),
    #[error("IO错误: {0}")]
    IOError(String),
    #[error("输出通道已关闭")]
    ChannelClosed,
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::IOError(e.to_string())
    }
}

impl From<crate::core::codec::CodecError> for StorageError {
    fn from(e: crate::core::codec::CodecError) -> Self {
        StorageError::DeserializeError(e.to_string())
    }
}

macro_rules! impl_from_redb {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            #[cfg(feature = "redb")]
            impl From<$ty> for StorageError {
                fn from(e: $ty) -> Self {
                    StorageError::$variant(e.to_string())
                }
            }
        )*
    };
}

impl_from_redb! {
    redb::Error => DbError,
    redb::DatabaseError => DbError,
    redb::TableError => DbError,
    redb::StorageError => DbError,
    redb::TransactionError => TransactionError,
    redb::CommitError => TransactionError,
}
