//! 单进程执行引擎
//!
//! 切分输入、并行运行导入阶段、按行键全局排序，并批量提交到有序键值存储（redb）。

pub mod runner;
pub mod split;
pub mod store;

pub use runner::{BulkLoadJob, JobReport};
pub use split::{read_records, split_records, InputSplit};
pub use store::BulkStore;
