//! # 批量处理模块
//!
//! 收集日志文件并并行解析。
//!
//! ## 功能
//! - 文件/目录输入与多模式匹配
//! - 并行处理，结果保持输入顺序
//! - 单个文件失败不影响其余文件
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
