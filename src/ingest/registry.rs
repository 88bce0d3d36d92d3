//! 策略注册表
//!
//! 配置中的名称映射到无参构造函数。工作进程启动时解析一次解码器和编码器，
//! 任一缺失、未知或构造失败都返回 `ConfigurationError`，不会带着未解析的策略继续运行。

use std::collections::BTreeMap;

use super::decoder::{AdjacencyDecoder, JsonDecoder, ListDecoder, RecordDecoder, TsvDecoder};
use super::encoder::{BinaryEncoder, JsonEncoder, StoreEncoder};
use crate::config::IngestConfig;
use crate::core::error::{ConfigResult, ConfigurationError, StrategyKind};

/// 解码器构造函数
pub type DecoderFactory = fn() -> ConfigResult<RecordDecoder>;

/// 编码器构造函数
pub type EncoderFactory = fn() -> ConfigResult<Box<dyn StoreEncoder>>;

/// 已解析的一对策略，在工作进程生命周期内持有
pub struct ResolvedStrategies {
    pub decoder: RecordDecoder,
    pub encoder: Box<dyn StoreEncoder>,
}

#[derive(Clone)]
pub struct StrategyRegistry {
    decoders: BTreeMap<String, DecoderFactory>,
    encoders: BTreeMap<String, EncoderFactory>,
}

impl StrategyRegistry {
    /// 不含任何策略的注册表
    pub fn empty() -> Self {
        Self {
            decoders: BTreeMap::new(),
            encoders: BTreeMap::new(),
        }
    }

    /// 注册全部内置策略
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        let decoders: [(&str, DecoderFactory); 4] = [
            ("tsv", || Ok(RecordDecoder::single(TsvDecoder))),
            ("json", || Ok(RecordDecoder::single(JsonDecoder))),
            ("list", || Ok(RecordDecoder::batch(ListDecoder))),
            ("adjacency", || Ok(RecordDecoder::single(AdjacencyDecoder))),
        ];
        let encoders: [(&str, EncoderFactory); 2] = [
            ("binary", binary_encoder),
            ("json", json_encoder),
        ];
        for (name, factory) in decoders {
            registry.decoders.insert(name.to_string(), factory);
        }
        for (name, factory) in encoders {
            registry.encoders.insert(name.to_string(), factory);
        }
        registry
    }

    pub fn register_decoder(&mut self, name: &str, factory: DecoderFactory) -> ConfigResult<()> {
        if self.decoders.contains_key(name) {
            return Err(ConfigurationError::DuplicateStrategy {
                kind: StrategyKind::Decoder,
                name: name.to_string(),
            });
        }
        self.decoders.insert(name.to_string(), factory);
        Ok(())
    }

    pub fn register_encoder(&mut self, name: &str, factory: EncoderFactory) -> ConfigResult<()> {
        if self.encoders.contains_key(name) {
            return Err(ConfigurationError::DuplicateStrategy {
                kind: StrategyKind::Encoder,
                name: name.to_string(),
            });
        }
        self.encoders.insert(name.to_string(), factory);
        Ok(())
    }

    pub fn decoder_names(&self) -> Vec<String> {
        self.decoders.keys().cloned().collect()
    }

    pub fn encoder_names(&self) -> Vec<String> {
        self.encoders.keys().cloned().collect()
    }

    pub fn resolve_decoder(&self, name: &str) -> ConfigResult<RecordDecoder> {
        let factory = self.decoders.get(name).ok_or_else(|| ConfigurationError::UnknownStrategy {
            kind: StrategyKind::Decoder,
            name: name.to_string(),
            available: self.decoder_names(),
        })?;
        factory().map_err(|e| construction_error(StrategyKind::Decoder, name, e))
    }

    pub fn resolve_encoder(&self, name: &str) -> ConfigResult<Box<dyn StoreEncoder>> {
        let factory = self.encoders.get(name).ok_or_else(|| ConfigurationError::UnknownStrategy {
            kind: StrategyKind::Encoder,
            name: name.to_string(),
            available: self.encoder_names(),
        })?;
        factory().map_err(|e| construction_error(StrategyKind::Encoder, name, e))
    }

    /// 按配置解析解码器与编码器
    pub fn resolve(&self, config: &IngestConfig) -> ConfigResult<ResolvedStrategies> {
        let decoder_name = config
            .decoder
            .as_deref()
            .ok_or(ConfigurationError::MissingKey(IngestConfig::DECODER_KEY))?;
        let encoder_name = config
            .encoder
            .as_deref()
            .ok_or(ConfigurationError::MissingKey(IngestConfig::ENCODER_KEY))?;

        let decoder = self.resolve_decoder(decoder_name.trim())?;
        let encoder = self.resolve_encoder(encoder_name.trim())?;
        log::debug!(
            "策略解析完成: decoder={} ({}), encoder={}",
            decoder.name(),
            if decoder.supports_batch() { "batch" } else { "single" },
            encoder.name()
        );
        Ok(ResolvedStrategies { decoder, encoder })
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn binary_encoder() -> ConfigResult<Box<dyn StoreEncoder>> {
    Ok(Box::new(BinaryEncoder))
}

fn json_encoder() -> ConfigResult<Box<dyn StoreEncoder>> {
    Ok(Box::new(JsonEncoder))
}

fn construction_error(kind: StrategyKind, name: &str, source: ConfigurationError) -> ConfigurationError {
    match source {
        ConfigurationError::Construction { .. } => source,
        other => ConfigurationError::Construction {
            kind,
            name: name.to_string(),
            reason: other.to_string(),
        },
    }
}
