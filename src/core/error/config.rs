//! 配置与策略解析错误
//!
//! 启动阶段的致命错误：出现后工作进程不处理任何记录

use thiserror::Error;

/// 配置错误结果类型
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// 配置错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("缺少配置项: {0}")]
    MissingKey(&'static str),

    #[error("未知的{kind}策略 '{name}'，可用: [{}]", .available.join(", "))]
    UnknownStrategy {
        kind: StrategyKind,
        name: String,
        available: Vec<String>,
    },

    #[error("{kind}策略 '{name}' 构造失败: {reason}")]
    Construction {
        kind: StrategyKind,
        name: String,
        reason: String,
    },

    #[error("{kind}策略 '{name}' 重复注册")]
    DuplicateStrategy { kind: StrategyKind, name: String },

    #[error("无效配置: {0}")]
    Invalid(String),

    #[error("配置文件读写失败: {0}")]
    Io(String),

    #[error("配置文件格式错误: {0}")]
    Format(String),
}

/// 策略种类，用于错误信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Decoder,
    Encoder,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Decoder => write!(f, "解码器"),
            StrategyKind::Encoder => write!(f, "编码器"),
        }
    }
}

impl From<std::io::Error> for ConfigurationError {
    fn from(e: std::io::Error) -> Self {
        ConfigurationError::Io(e.to_string())
    }
}

impl From<toml::de::Error> for ConfigurationError {
    fn from(e: toml::de::Error) -> Self {
        ConfigurationError::Format(e.to_string())
    }
}

impl From<toml::ser::Error> for ConfigurationError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigurationError::Format(e.to_string())
    }
}
