//! 属性值二进制编码
//!
//! 格式：1 字节类型标记 + 负载
//! - `0x01` bool：1 字节
//! - `0x02` int：i64 大端 8 字节
//! - `0x03` float：f64 位模式大端 8 字节
//! - `0x04` string：UTF-8 字节，长度由单元格决定

use super::error::{CodecError, Result};
use crate::core::PropertyValue;

const TAG_BOOL: u8 = 0x01;
const TAG_INT: u8 = 0x02;
const TAG_FLOAT: u8 = 0x03;
const TAG_STRING: u8 = 0x04;

pub fn encode_value(value: &PropertyValue) -> Vec<u8> {
    match value {
        PropertyValue::Bool(b) => vec![TAG_BOOL, u8::from(*b)],
        PropertyValue::Int(i) => {
            let mut buf = Vec::with_capacity(9);
            buf.push(TAG_INT);
            buf.extend_from_slice(&i.to_be_bytes());
            buf
        }
        PropertyValue::Float(f) => {
            let mut buf = Vec::with_capacity(9);
            buf.push(TAG_FLOAT);
            buf.extend_from_slice(&f.to_bits().to_be_bytes());
            buf
        }
        PropertyValue::String(s) => {
            let mut buf = Vec::with_capacity(1 + s.len());
            buf.push(TAG_STRING);
            buf.extend_from_slice(s.as_bytes());
            buf
        }
    }
}

pub fn decode_value(data: &[u8]) -> Result<PropertyValue> {
    let (&tag, payload) = data
        .split_first()
        .ok_or_else(|| CodecError::InvalidData("Empty value".to_string()))?;

    match tag {
        TAG_BOOL => match payload {
            [0] => Ok(PropertyValue::Bool(false)),
            [1] => Ok(PropertyValue::Bool(true)),
            _ => Err(CodecError::InvalidData("Invalid bool payload".to_string())),
        },
        TAG_INT => Ok(PropertyValue::Int(i64::from_be_bytes(fixed8(payload)?))),
        TAG_FLOAT => Ok(PropertyValue::Float(f64::from_bits(u64::from_be_bytes(
            fixed8(payload)?,
        )))),
        TAG_STRING => std::str::from_utf8(payload)
            .map(|s| PropertyValue::String(s.to_string()))
            .map_err(|_| CodecError::InvalidUtf8("string value")),
        other => Err(CodecError::UnknownValueTag(other)),
    }
}

fn fixed8(payload: &[u8]) -> Result<[u8; 8]> {
    payload.try_into().map_err(|_| {
        CodecError::InvalidData(format!("Expected 8 byte payload, got {}", payload.len()))
    })
}
