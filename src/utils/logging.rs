// 日志工具模块
//
// 导入作业的日志写入轮转文件；被跳过的记录以 warn 级别记录，同时输出到 stderr

use crate::config::LogConfig;
use crate::core::error::{ConfigResult, ConfigurationError};
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 全局日志句柄，用于退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 日志守卫，drop 时调用 `shutdown`
#[must_use = "日志守卫被丢弃时会立即关闭日志"]
pub struct LogGuard(());

impl Drop for LogGuard {
    fn drop(&mut self) {
        shutdown();
    }
}

/// 初始化日志系统
///
/// # Examples
/// ```no_run
/// use graph_bulkload::config::Config;
/// use graph_bulkload::utils::logging;
///
/// let config = Config::default();
/// let _guard = logging::init(&config.log).expect("日志初始化失败");
/// log::info!("开始导入");
/// ```
pub fn init(config: &LogConfig) -> ConfigResult<LogGuard> {
    let invalid = |e: flexi_logger::FlexiLoggerError| {
        ConfigurationError::Invalid(format!("日志配置无效: {}", e))
    };

    let handle = Logger::try_with_str(&config.level)
        .map_err(invalid)?
        .log_to_file(FileSpec::default().basename(&config.file).directory(&config.dir))
        .rotate(
            Criterion::Size(config.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.max_files),
        )
        .duplicate_to_stderr(Duplicate::Warn)
        .write_mode(WriteMode::Async)
        .append()
        .start()
        .map_err(invalid)?;

    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }

    log::info!("日志写入 {}/{}，级别 {}", config.dir, config.file, config.level);
    Ok(LogGuard(()))
}

/// 刷新并关闭日志，等待异步写线程结束
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
        }
    }
}

pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_flushes_on_drop() {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let config = LogConfig {
            dir: dir.path().to_string_lossy().into_owned(),
            level: "debug".to_string(),
            ..LogConfig::default()
        };

        {
            let _guard = init(&config).expect("日志初始化失败");
            assert!(is_initialized());
            log::warn!("跳过记录: 测试");
        }
        assert!(!is_initialized());
    }
}
