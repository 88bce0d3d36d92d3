use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{ConfigResult, ConfigurationError};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub job: JobConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// 解码器与编码器的选择
///
/// 两项都没有默认值：配置文件中缺失时策略解析直接失败
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct IngestConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoder: Option<String>,
}

impl IngestConfig {
    pub const DECODER_KEY: &'static str = "ingest.decoder";
    pub const ENCODER_KEY: &'static str = "ingest.encoder";

    pub fn new(decoder: &str, encoder: &str) -> Self {
        Self {
            decoder: Some(decoder.to_string()),
            encoder: Some(encoder.to_string()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct JobConfig {
    pub workers: usize,
    /// 输入分片数量，0 表示每个工作线程一个分片
    pub splits: usize,
    pub store_path: String,
    pub commit_batch_size: usize,
    pub skip_blank_lines: bool,
    pub max_reported_failures: usize,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get().max(1),
            splits: 0,
            store_path: "data/bulkload.redb".to_string(),
            commit_batch_size: 10_000,
            skip_blank_lines: true,
            max_reported_failures: 100,
        }
    }
}

impl JobConfig {
    pub fn effective_splits(&self) -> usize {
        if self.splits == 0 {
            self.workers.max(1)
        } else {
            self.splits
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "bulkload".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ingest: IngestConfig::new("tsv", "binary"),
            job: JobConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.job.store_path = Config::resolve_store_path(&config.job.store_path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.job.workers == 0 {
            return Err(ConfigurationError::Invalid("job.workers 必须大于 0".to_string()));
        }
        if self.job.commit_batch_size == 0 {
            return Err(ConfigurationError::Invalid(
                "job.commit_batch_size 必须大于 0".to_string(),
            ));
        }
        if self.job.store_path.trim().is_empty() {
            return Err(ConfigurationError::Invalid("job.store_path 不能为空".to_string()));
        }
        Ok(())
    }

    fn resolve_store_path(store_path: &str) -> ConfigResult<String> {
        let Some(relative_path) = store_path.strip_prefix('~') else {
            return Ok(store_path.to_string());
        };

        #[allow(deprecated)]
        let home_dir = env::home_dir()
            .ok_or_else(|| ConfigurationError::Invalid("无法获取用户主目录".to_string()))?;
        let relative_path = relative_path.trim_start_matches(['/', '\\']);
        let absolute_path: PathBuf = home_dir.join(relative_path);
        Ok(absolute_path.to_string_lossy().into_owned())
    }
}
