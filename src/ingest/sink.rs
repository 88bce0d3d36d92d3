//! 输出通道
//!
//! 导入阶段把 `(RowKey, Mutation)` 交给执行引擎的输出通道，阶段本身不保留它们。

use std::sync::mpsc::{Sender, SyncSender};

use crate::core::error::{StorageError, StorageResult};
use crate::core::{Mutation, RowKey};

pub trait MutationSink {
    fn emit(&mut self, key: RowKey, mutation: Mutation) -> StorageResult<()>;
}

impl MutationSink for Vec<(RowKey, Mutation)> {
    fn emit(&mut self, key: RowKey, mutation: Mutation) -> StorageResult<()> {
        self.push((key, mutation));
        Ok(())
    }
}

impl MutationSink for Sender<(RowKey, Mutation)> {
    fn emit(&mut self, key: RowKey, mutation: Mutation) -> StorageResult<()> {
        self.send((key, mutation))
            .map_err(|_| StorageError::ChannelClosed)
    }
}

impl MutationSink for SyncSender<(RowKey, Mutation)> {
    fn emit(&mut self, key: RowKey, mutation: Mutation) -> StorageResult<()> {
        self.send((key, mutation))
            .map_err(|_| StorageError::ChannelClosed)
    }
}
