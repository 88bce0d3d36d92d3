//! 分号分隔的多顶点记录
//!
//! 格式：`id[:label];id[:label];...`，未指定标签时使用 `vertex`。
//! 空白记录解码为零个顶点；非空记录中的空条目视为错误。

use super::BatchDecoder;
use crate::core::error::{ParseError, ParseResult};
use crate::core::Vertex;

const ENTRY_SEPARATOR: char = ';';
const LABEL_SEPARATOR: char = ':';
pub const DEFAULT_LABEL: &str = "vertex";

#[derive(Debug, Default, Clone, Copy)]
pub struct ListDecoder;

impl BatchDecoder for ListDecoder {
    fn name(&self) -> &str {
        "list"
    }

    fn decode_batch(&self, record: &str) -> ParseResult<Vec<Vertex>> {
        if record.trim().is_empty() {
            return Ok(Vec::new());
        }

        record
            .split(ENTRY_SEPARATOR)
            .enumerate()
            .map(|(position, entry)| {
                let entry = entry.trim();
                if entry.is_empty() {
                    return Err(ParseError::EmptyEntry(position));
                }
                let (id, label) = match entry.split_once(LABEL_SEPARATOR) {
                    Some((id, label)) => (id.trim(), label.trim()),
                    None => (entry, DEFAULT_LABEL),
                };
                if id.is_empty() {
                    return Err(ParseError::MissingId);
                }
                if label.is_empty() {
                    return Err(ParseError::MissingLabel);
                }
                Ok(Vertex::new(id, label))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_batch_in_order() {
        let vertices = ListDecoder.decode_batch("v1;v2;v3").expect("解码失败");
        let ids: Vec<&str> = vertices.iter().map(Vertex::id).collect();
        assert_eq!(ids, vec!["v1", "v2", "v3"]);
        assert!(vertices.iter().all(|v| v.label() == DEFAULT_LABEL));
    }

    #[test]
    fn test_decode_batch_with_labels() {
        let vertices = ListDecoder.decode_batch("v1:person; v2 : city").expect("解码失败");
        assert_eq!(vertices, vec![Vertex::new("v1", "person"), Vertex::new("v2", "city")]);
    }

    #[test]
    fn test_decode_blank_record() {
        assert!(ListDecoder.decode_batch("   ").expect("解码失败").is_empty());
    }

    #[test]
    fn test_decode_batch_errors() {
        assert_eq!(ListDecoder.decode_batch("v1;;v3"), Err(ParseError::EmptyEntry(1)));
        assert_eq!(ListDecoder.decode_batch("v1;"), Err(ParseError::EmptyEntry(1)));
        assert_eq!(ListDecoder.decode_batch(":person"), Err(ParseError::MissingId));
        assert_eq!(ListDecoder.decode_batch("v1:"), Err(ParseError::MissingLabel));
    }
}
