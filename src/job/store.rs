//! Redb 批量提交目标
//!
//! 单表 `mutations`：行键 → `Mutation::to_bytes()`。表按行键字节序排列，
//! 已存在的行在提交时被整体替换，重复运行同一输入得到相同的结果。

use std::cmp::Ordering as CmpOrdering;
use std::path::Path;

use redb::{Database, ReadableTable, TableDefinition, TypeName};

use crate::core::error::{StorageError, StorageResult};
use crate::core::{Mutation, RowKey};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ByteKey(pub Vec<u8>);

impl redb::Key for ByteKey {
    fn compare(data1: &[u8], data2: &[u8]) -> CmpOrdering {
        data1.cmp(data2)
    }
}

impl redb::Value for ByteKey {
    type SelfType<'a> = ByteKey where Self: 'a;
    type AsBytes<'a> = Vec<u8> where Self: 'a;

    fn fixed_width() -> Option<usize> {
        None
    }

    fn from_bytes<'a>(data: &'a [u8]) -> ByteKey where Self: 'a {
        ByteKey(data.to_vec())
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Vec<u8> where Self: 'b {
        value.0.clone()
    }

    fn type_name() -> TypeName {
        TypeName::new("graph_bulkload::ByteKey")
    }
}

pub const MUTATIONS_TABLE: TableDefinition<ByteKey, ByteKey> = TableDefinition::new("mutations");

pub struct BulkStore {
    db: Database,
}

impl BulkStore {
    /// 打开或创建存储文件，并确保表存在
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let db = Database::create(path)?;

        let txn = db.begin_write()?;
        txn.open_table(MUTATIONS_TABLE)?;
        txn.commit()?;

        log::debug!("打开批量导入存储: {}", path.display());
        Ok(Self { db })
    }

    /// 按行键顺序提交，每 `batch_size` 行一个写事务，返回提交的行数
    ///
    /// 写入操作描述完整的顶点，已存在的行被整体替换
    pub fn commit(&self, rows: &[(RowKey, Mutation)], batch_size: usize) -> StorageResult<usize> {
        if batch_size == 0 {
            return Err(StorageError::TransactionError("batch_size 必须大于 0".to_string()));
        }
        let mut committed = 0;
        for batch in rows.chunks(batch_size) {
            let txn = self.db.begin_write()?;
            {
                let mut table = txn.open_table(MUTATIONS_TABLE)?;
                for (key, mutation) in batch {
                    table.insert(
                        &ByteKey(key.as_bytes().to_vec()),
                        &ByteKey(mutation.to_bytes()),
                    )?;
                }
            }
            txn.commit()?;
            committed += batch.len();
            log::debug!("已提交 {} / {} 行", committed, rows.len());
        }
        Ok(committed)
    }

    pub fn get(&self, key: &RowKey) -> StorageResult<Option<Mutation>> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(MUTATIONS_TABLE)?;
        let value = table.get(&ByteKey(key.as_bytes().to_vec()))?;
        value
            .map(|guard| Mutation::from_bytes(&guard.value().0).map_err(StorageError::from))
            .transpose()
    }

    /// 按行键顺序读取至多 `limit` 行
    pub fn scan(&self, limit: Option<usize>) -> StorageResult<Vec<(RowKey, Mutation)>> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(MUTATIONS_TABLE)?;
        let mut rows = Vec::new();
        for entry in table.iter()? {
            if limit.is_some_and(|limit| rows.len() >= limit) {
                break;
            }
            let (key, value) = entry?;
            let mutation = Mutation::from_bytes(&value.value().0)?;
            rows.push((RowKey::new(key.value().0), mutation));
        }
        Ok(rows)
    }

    pub fn row_count(&self) -> StorageResult<usize> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(MUTATIONS_TABLE)?;
        let mut count = 0;
        for entry in table.iter()? {
            entry?;
            count += 1;
        }
        Ok(count)
    }
}
