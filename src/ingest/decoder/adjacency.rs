//! 邻接表记录
//!
//! 格式：`id target target ...`，以空白分隔，第一个字段为顶点标识，其余为出边目标。

use super::list::DEFAULT_LABEL;
use super::SingleDecoder;
use crate::core::error::{ParseError, ParseResult};
use crate::core::Vertex;

#[derive(Debug, Default, Clone, Copy)]
pub struct AdjacencyDecoder;

impl SingleDecoder for AdjacencyDecoder {
    fn name(&self) -> &str {
        "adjacency"
    }

    fn decode(&self, record: &str) -> ParseResult<Vertex> {
        let mut tokens = record.split_whitespace();
        let id = tokens.next().ok_or(ParseError::MissingId)?;
        Ok(tokens.fold(Vertex::new(id, DEFAULT_LABEL), |vertex, target| {
            vertex.with_edge(target)
        }))
    }
}
