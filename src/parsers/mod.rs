//! # 解析器模块
//!
//! 量子化学日志的逐行扫描与字段提取，以及 CM5 电荷和 xyz 几何文件。
//!
//! ## 数据流
//! ```text
//! log_file → section → runtype → extract → record
//!                ↑          ↑         ↑
//!                └──── markers (每个程序一张表)
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: log_file, section, markers, runtype, extract, record, charges, xyz

pub mod charges;
pub mod extract;
pub mod log_file;
pub mod markers;
pub mod record;
pub mod runtype;
pub mod section;
pub mod xyz;

#[cfg(test)]
pub(crate) mod fixtures;

pub use record::parse_log;
