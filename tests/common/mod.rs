//! 集成测试共享工具模块
//!
//! 提供测试基础设施和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use std::path::{Path, PathBuf};

use graph_bulkload::config::{Config, IngestConfig};
use tempfile::TempDir;

/// 测试工作目录
///
/// 输入文件和存储文件都放在临时目录中，测试结束后自动清理
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// 写入输入文件，每个元素一行
    pub fn write_input(&self, name: &str, lines: &[&str]) -> anyhow::Result<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, lines.join("\n"))?;
        Ok(path)
    }

    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("store").join("bulk.redb")
    }

    /// 使用临时存储路径的配置
    pub fn config(&self, decoder: &str, encoder: &str) -> Config {
        let mut config = Config::default();
        config.ingest = IngestConfig::new(decoder, encoder);
        config.job.workers = 2;
        config.job.commit_batch_size = 3;
        config.job.store_path = self.store_path().to_string_lossy().into_owned();
        config.log.dir = self.dir.path().join("logs").to_string_lossy().into_owned();
        config
    }
}
