//! 行键与写入操作
//!
//! `Mutation` 按 (列族, 列限定符) 保存单元格，同一列重复写入保留最后一次的值。
//! 提交到存储时使用长度前缀的二进制格式：
//!
//! ```text
//! [version: u8][row_len: u32 BE][row][cell_count: u32 BE]
//! { [family_len: u32 BE][family][qualifier_len: u32 BE][qualifier][value_len: u32 BE][value] }*
//! ```

use std::collections::BTreeMap;
use std::fmt;

use super::error::{CodecError, Result};

const WIRE_VERSION: u8 = 0x01;

/// 行键，由顶点标识确定性地生成
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey(Vec<u8>);

impl RowKey {
    pub fn new(bytes: Vec<u8>) -> Self {
        RowKey(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl From<Vec<u8>> for RowKey {
    fn from(bytes: Vec<u8>) -> Self {
        RowKey(bytes)
    }
}

impl AsRef<[u8]> for RowKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// 针对某个行键的写入操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    row: RowKey,
    columns: BTreeMap<(Vec<u8>, Vec<u8>), Vec<u8>>,
}

impl Mutation {
    /// 创建指向 `row` 的空写入操作
    pub fn new(row: RowKey) -> Self {
        Self {
            row,
            columns: BTreeMap::new(),
        }
    }

    pub fn row(&self) -> &RowKey {
        &self.row
    }

    pub fn put(
        &mut self,
        family: impl Into<Vec<u8>>,
        qualifier: impl Into<Vec<u8>>,
        value: impl Into<Vec<u8>>,
    ) -> &mut Self {
        self.columns
            .insert((family.into(), qualifier.into()), value.into());
        self
    }

    pub fn get(&self, family: &[u8], qualifier: &[u8]) -> Option<&[u8]> {
        self.columns
            .get(&(family.to_vec(), qualifier.to_vec()))
            .map(Vec::as_slice)
    }

    /// 某个列族下的 (列限定符, 值)，按列限定符排序
    pub fn family<'a>(&'a self, family: &'a [u8]) -> impl Iterator<Item = (&'a [u8], &'a [u8])> + 'a {
        self.columns
            .iter()
            .filter(move |((f, _), _)| f.as_slice() == family)
            .map(|((_, q), v)| (q.as_slice(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let payload: usize = self
            .columns
            .iter()
            .map(|((f, q), v)| 12 + f.len() + q.len() + v.len())
            .sum();
        let mut buf = Vec::with_capacity(1 + 8 + self.row.len() + payload);

        buf.push(WIRE_VERSION);
        put_bytes(&mut buf, self.row.as_bytes());
        buf.extend_from_slice(&(self.columns.len() as u32).to_be_bytes());
        for ((family, qualifier), value) in &self.columns {
            put_bytes(&mut buf, family);
            put_bytes(&mut buf, qualifier);
            put_bytes(&mut buf, value);
        }
        buf
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(data);

        let version = reader.u8()?;
        if version != WIRE_VERSION {
            return Err(CodecError::InvalidData(format!(
                "Unsupported mutation version: {}",
                version
            )));
        }

        let row = RowKey::new(reader.bytes()?.to_vec());
        let count = reader.u32()?;
        let mut mutation = Mutation::new(row);
        for _ in 0..count {
            let family = reader.bytes()?.to_vec();
            let qualifier = reader.bytes()?.to_vec();
            let value = reader.bytes()?.to_vec();
            mutation.put(family, qualifier, value);
        }

        if !reader.is_empty() {
            return Err(CodecError::InvalidData("Trailing bytes after mutation".to_string()));
        }
        Ok(mutation)
    }
}

fn put_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
    buf.extend_from_slice(bytes);
}

struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|end| *end <= self.data.len())
            .ok_or_else(|| CodecError::InvalidData("Mutation data truncated".to_string()))?;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn u32(&mut self) -> Result<u32> {
        let bytes: [u8; 4] = self
            .take(4)?
            .try_into()
            .map_err(|_| CodecError::InvalidData("Failed to read length".to_string()))?;
        Ok(u32::from_be_bytes(bytes))
    }

    fn bytes(&mut self) -> Result<&'a [u8]> {
        let len = self.u32()? as usize;
        self.take(len)
    }

    fn is_empty(&self) -> bool {
        self.pos == self.data.len()
    }
}
