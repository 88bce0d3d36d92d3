//! 单个输入分片的处理循环
//!
//! 逐条调用导入阶段：记录级错误计数、记录日志后继续下一条；输出通道错误终止本分片。

use super::sink::MutationSink;
use super::stage::{emit_all, IngestionStage};
use crate::core::error::{RecordError, StorageResult};

/// 分片处理统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SplitStats {
    pub records: u64,
    /// 解码得到的顶点数，包括所在记录编码失败的顶点
    pub vertices: u64,
    pub emitted: u64,
    pub parse_errors: u64,
    pub encoding_errors: u64,
    /// 前若干条失败的描述
    pub failures: Vec<String>,
}

impl SplitStats {
    pub fn failed_records(&self) -> u64 {
        self.parse_errors + self.encoding_errors
    }

    pub fn merge(&mut self, other: SplitStats, max_failures: usize) {
        self.records += other.records;
        self.vertices += other.vertices;
        self.emitted += other.emitted;
        self.parse_errors += other.parse_errors;
        self.encoding_errors += other.encoding_errors;
        let room = max_failures.saturating_sub(self.failures.len());
        self.failures.extend(other.failures.into_iter().take(room));
    }

    fn record_failure(&mut self, error: &RecordError, max_failures: usize) {
        if error.is_parse() {
            self.parse_errors += 1;
        } else {
            self.encoding_errors += 1;
        }
        if self.failures.len() < max_failures {
            self.failures.push(error.to_string());
        }
    }
}

/// 处理一个分片的全部记录
pub fn run_split<I, R, S>(
    stage: &IngestionStage,
    records: I,
    sink: &mut S,
    max_failures: usize,
) -> StorageResult<SplitStats>
where
    I: IntoIterator<Item = (u64, R)>,
    R: AsRef<str>,
    S: MutationSink + ?Sized,
{
    let mut stats = SplitStats::default();
    for (index, record) in records {
        stats.records += 1;
        let pairs = stage.decode(index, record.as_ref()).and_then(|vertices| {
            stats.vertices += vertices.len() as u64;
            stage.encode(index, &vertices)
        });
        match pairs {
            Ok(pairs) => {
                let emitted = emit_all(pairs, sink).map_err(|error| {
                    log::error!("记录 {} 输出失败，终止分片: {}", index, error);
                    error
                })?;
                stats.emitted += emitted as u64;
            }
            Err(error) => {
                log::warn!("跳过记录: {}", error);
                stats.record_failure(&error, max_failures);
            }
        }
    }
    log::debug!(
        "分片处理完成: records={}, vertices={}, emitted={}, failed={}",
        stats.records,
        stats.vertices,
        stats.emitted,
        stats.failed_records()
    );
    Ok(stats)
}
