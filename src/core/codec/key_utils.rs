//! KeyUtils - 行键编码工具
//!
//! 加盐行键布局：`[salt: u32 BE][vid bytes]`，salt 为 vid 的 MurmurHash2。
//! 大端序保证按字节排序即按 salt 排序，连续的 vid 会分散到不同区间。

use super::error::{CodecError, Result};
use crate::core::murmur::row_key_salt;

pub struct KeyUtils;

impl KeyUtils {
    pub const SALT_LEN: usize = 4;

    pub fn encode_vertex_key(vid: &str) -> Vec<u8> {
        let mut key = Vec::with_capacity(Self::SALT_LEN + vid.len());
        key.extend_from_slice(&row_key_salt(vid).to_be_bytes());
        key.extend_from_slice(vid.as_bytes());
        key
    }

    pub fn decode_vertex_key(key: &[u8]) -> Result<String> {
        if key.len() <= Self::SALT_LEN {
            return Err(CodecError::InvalidData("Key too short".to_string()));
        }
        let vid = std::str::from_utf8(&key[Self::SALT_LEN..])
            .map_err(|_| CodecError::InvalidUtf8("row key"))?;

        let salt = Self::salt_of(key).ok_or_else(|| {
            CodecError::InvalidData("Failed to decode key salt".to_string())
        })?;
        if salt != row_key_salt(vid) {
            return Err(CodecError::RowKeyMismatch(format!(
                "salt 0x{:08x} does not match vid '{}'",
                salt, vid
            )));
        }

        Ok(vid.to_string())
    }

    pub fn salt_of(key: &[u8]) -> Option<u32> {
        let bytes: [u8; 4] = key.get(0..Self::SALT_LEN)?.try_into().ok()?;
        Some(u32::from_be_bytes(bytes))
    }

    /// 未加盐的行键，直接使用 vid 字节
    pub fn encode_plain_key(vid: &str) -> Vec<u8> {
        vid.as_bytes().to_vec()
    }

    pub fn decode_plain_key(key: &[u8]) -> Result<String> {
        if key.is_empty() {
            return Err(CodecError::InvalidData("Empty key".to_string()));
        }
        std::str::from_utf8(key)
            .map(str::to_string)
            .map_err(|_| CodecError::InvalidUtf8("row key"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_vertex_key() {
        let key = KeyUtils::encode_vertex_key("player100");

        assert_eq!(key.len(), 4 + 9);
        assert_eq!(&key[4..], b"player100");
        assert_eq!(KeyUtils::salt_of(&key), Some(row_key_salt("player100")));

        let vid = KeyUtils::decode_vertex_key(&key).expect("解码行键失败");
        assert_eq!(vid, "player100");
    }

    #[test]
    fn test_vertex_key_is_deterministic() {
        assert_eq!(
            KeyUtils::encode_vertex_key("v1"),
            KeyUtils::encode_vertex_key("v1")
        );
        assert_ne!(
            KeyUtils::encode_vertex_key("v1"),
            KeyUtils::encode_vertex_key("v2")
        );
    }

    #[test]
    fn test_decode_rejects_tampered_salt() {
        let mut key = KeyUtils::encode_vertex_key("v1");
        key[0] ^= 0xFF;
        assert!(matches!(
            KeyUtils::decode_vertex_key(&key),
            Err(CodecError::RowKeyMismatch(_))
        ));
    }

    #[test]
    fn test_decode_rejects_short_key() {
        assert!(KeyUtils::decode_vertex_key(&[0, 1, 2, 3]).is_err());
        assert!(KeyUtils::decode_plain_key(&[]).is_err());
    }

    #[test]
    fn test_plain_key() {
        let key = KeyUtils::encode_plain_key("v1");
        assert_eq!(key, b"v1");
        assert_eq!(KeyUtils::decode_plain_key(&key).expect("解码失败"), "v1");
    }
}
