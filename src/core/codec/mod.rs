//! Codec 模块 - 行键与写入操作的二进制编解码
//!
//! ## 架构
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │            codec::mod.rs            │
//! │       模块入口和公共类型导出         │
//! └─────────────────────────────────────┘
//!              │
//!    ┌─────────┼──────────┬────────────┐
//!    ▼         ▼          ▼            ▼
//! ┌──────┐ ┌────────┐ ┌─────────┐ ┌──────────┐
//! │error │ │key_    │ │value_   │ │mutation  │
//! │      │ │utils   │ │codec    │ │          │
//! └──────┘ └────────┘ └─────────┘ └──────────┘
//! ```
//!
//! ## 使用示例
//!
//! ```ignore
//! use graph_bulkload::core::codec::{KeyUtils, Mutation, RowKey};
//!
//! let key = RowKey::new(KeyUtils::encode_vertex_key("v1"));
//! let mut mutation = Mutation::new(key);
//! mutation.put(b"m".to_vec(), b"label".to_vec(), b"person".to_vec());
//! let bytes = mutation.to_bytes();
//! ```

pub mod error;
pub mod key_utils;
pub mod mutation;
pub mod value_codec;

pub use error::{CodecError, CodecResult, Result};
pub use key_utils::KeyUtils;
pub use mutation::{Mutation, RowKey};
pub use value_codec::{decode_value, encode_value};
