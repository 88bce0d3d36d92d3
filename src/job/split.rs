//! 输入切分
//!
//! 把输入记录切成连续、互不相交的分片，每条记录保留全局序号（从 0 开始的行号）。

use std::io::BufRead;

/// 一个输入分片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSplit {
    pub id: usize,
    pub records: Vec<(u64, String)>,
}

impl InputSplit {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 读取全部行，保留行号
pub fn read_records<R: BufRead>(reader: R, skip_blank_lines: bool) -> std::io::Result<Vec<(u64, String)>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if skip_blank_lines && line.trim().is_empty() {
            continue;
        }
        records.push((index as u64, line));
    }
    Ok(records)
}

/// 切分为至多 `splits` 个大小相近的分片，不产生空分片
pub fn split_records(records: Vec<(u64, String)>, splits: usize) -> Vec<InputSplit> {
    if records.is_empty() {
        return Vec::new();
    }
    let splits = splits.clamp(1, records.len());
    let base = records.len() / splits;
    let extra = records.len() % splits;

    let mut remaining = records.into_iter();
    (0..splits)
        .map(|id| {
            let size = base + usize::from(id < extra);
            InputSplit {
                id,
                records: remaining.by_ref().take(size).collect(),
            }
        })
        .collect()
}
