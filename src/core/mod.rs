pub mod codec;
pub mod error;
pub mod murmur;
pub mod value;
pub mod vertex;

// 错误和结果类型
pub use error::{
    BulkLoadError, BulkLoadResult, ConfigurationError, EncodingError, ParseError, RecordError,
    StageError, StorageError,
};

// 核心数据类型
pub use codec::{CodecError, Mutation, RowKey};
pub use value::PropertyValue;
pub use vertex::Vertex;
