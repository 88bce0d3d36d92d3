//! 单进程批量导入作业
//!
//! 1. 启动时解析一次策略，配置错误在读取输入、打开存储之前返回
//! 2. 读取并切分输入
//! 3. 在 `job.workers` 个线程上并行处理分片，每个分片各自解析解码器和编码器
//! 4. 按行键稳定排序，相同行键只保留最后一条记录的写入操作
//! 5. 分批提交到 `BulkStore`

use rayon::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::{Duration, Instant};

use super::split::{read_records, split_records, InputSplit};
use super::store::BulkStore;
use crate::config::Config;
use crate::core::error::{BulkLoadError, BulkLoadResult, StorageError};
use crate::core::{Mutation, RowKey, Vertex};
use crate::ingest::{run_split, IngestionStage, SplitStats, StrategyRegistry};

/// 作业结果
#[derive(Debug, Clone, Default)]
pub struct JobReport {
    pub splits: usize,
    pub stats: SplitStats,
    /// 合并相同行键后的行数
    pub rows: usize,
    pub committed_rows: usize,
    pub elapsed: Duration,
}

pub struct BulkLoadJob {
    config: Config,
    registry: StrategyRegistry,
}

impl BulkLoadJob {
    pub fn new(config: Config, registry: StrategyRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run(&self, input: &Path) -> BulkLoadResult<JobReport> {
        let started = Instant::now();
        let stage = self.resolve_stage()?;
        log::info!(
            "使用解码器 {}，编码器 {}",
            stage.decoder().name(),
            stage.encoder().name()
        );

        let file = File::open(input)?;
        let records = read_records(BufReader::new(file), self.config.job.skip_blank_lines)?;
        log::info!("读取输入 {}: {} 条记录", input.display(), records.len());

        let (rows, stats, splits) = self.transform_records(records)?;
        let row_count = rows.len();

        let store = BulkStore::open(&self.config.job.store_path)?;
        let committed_rows = store.commit(&rows, self.config.job.commit_batch_size)?;

        let report = JobReport {
            splits,
            stats,
            rows: row_count,
            committed_rows,
            elapsed: started.elapsed(),
        };
        log::info!(
            "导入完成: records={}, vertices={}, emitted={}, rows={}, parse_errors={}, encoding_errors={}, elapsed={:?}",
            report.stats.records,
            report.stats.vertices,
            report.stats.emitted,
            report.rows,
            report.stats.parse_errors,
            report.stats.encoding_errors,
            report.elapsed
        );
        Ok(report)
    }

    /// 转换全部记录，返回按行键排序、去重后的行，以及统计和分片数
    pub fn transform(
        &self,
        records: Vec<(u64, String)>,
    ) -> BulkLoadResult<(Vec<(RowKey, Mutation)>, SplitStats, usize)> {
        self.resolve_stage()?;
        self.transform_records(records)
    }

    fn transform_records(
        &self,
        records: Vec<(u64, String)>,
    ) -> BulkLoadResult<(Vec<(RowKey, Mutation)>, SplitStats, usize)> {
        let splits = split_records(records, self.config.job.effective_splits());
        let split_count = splits.len();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.job.workers)
            .thread_name(|i| format!("bulkload-worker-{}", i))
            .build()
            .map_err(|e| BulkLoadError::Worker(e.to_string()))?;

        let results: Vec<(Vec<(RowKey, Mutation)>, SplitStats)> = pool.install(|| {
            splits
                .into_par_iter()
                .map(|split| self.run_worker(split))
                .collect::<BulkLoadResult<Vec<_>>>()
        })?;

        let max_failures = self.config.job.max_reported_failures;
        let mut stats = SplitStats::default();
        let mut pairs = Vec::new();
        for (split_pairs, split_stats) in results {
            pairs.extend(split_pairs);
            stats.merge(split_stats, max_failures);
        }

        // 稳定排序：相同行键保持记录顺序，后出现的记录覆盖先出现的
        pairs.par_sort_by(|a, b| a.0.cmp(&b.0));
        let rows = coalesce(pairs);
        Ok((rows, stats, split_count))
    }

    /// 通过配置的编码器把存储中的行还原为顶点
    pub fn dump(&self, limit: Option<usize>) -> BulkLoadResult<Vec<Vertex>> {
        let stage = IngestionStage::from_config(&self.registry, &self.config.ingest)?;
        let store = BulkStore::open(&self.config.job.store_path)?;
        store
            .scan(limit)?
            .iter()
            .map(|(key, mutation)| {
                stage
                    .encoder()
                    .read_vertex(key, mutation)
                    .map_err(|e| BulkLoadError::Storage(StorageError::from(e)))
            })
            .collect()
    }

    /// 校验配置并解析一次策略，失败时不读取输入、不打开存储
    fn resolve_stage(&self) -> BulkLoadResult<IngestionStage> {
        self.config.validate()?;
        let stage = IngestionStage::from_config(&self.registry, &self.config.ingest).map_err(|e| {
            log::error!("策略解析失败: {}", e);
            e
        })?;
        Ok(stage)
    }

    fn run_worker(&self, split: InputSplit) -> BulkLoadResult<(Vec<(RowKey, Mutation)>, SplitStats)> {
        let stage = IngestionStage::from_config(&self.registry, &self.config.ingest)?;
        let mut output: Vec<(RowKey, Mutation)> = Vec::with_capacity(split.len());
        log::debug!("分片 {} 开始: {} 条记录", split.id, split.len());
        let stats = run_split(
            &stage,
            split.records,
            &mut output,
            self.config.job.max_reported_failures,
        )?;
        Ok((output, stats))
    }
}

/// 已排序序列中相邻的相同行键只保留最后一个写入操作
///
/// 每个写入操作描述一个完整的顶点，按单元格合并会拼出两条记录都没有描述的顶点
fn coalesce(sorted: Vec<(RowKey, Mutation)>) -> Vec<(RowKey, Mutation)> {
    let mut rows: Vec<(RowKey, Mutation)> = Vec::with_capacity(sorted.len());
    for (key, mutation) in sorted {
        if let Some((last_key, last)) = rows.last_mut() {
            if *last_key == key {
                *last = mutation;
                continue;
            }
        }
        rows.push((key, mutation));
    }
    rows
}
