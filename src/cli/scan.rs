//! # 日志扫描公共参数
//!
//! `results`, `gaps` 共用的输入、匹配模式和并行参数。
//!
//! ## 依赖关系
//! - 被 `cli/results.rs`, `cli/gaps.rs` 使用

use super::ProgramArg;
use clap::Args;
use std::path::PathBuf;

/// 日志扫描参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Input: a log file or a directory searched for logs
    #[arg(default_value = ".")]
    pub input: PathBuf,

    /// Glob pattern(s) for log files, comma separated
    #[arg(long, default_value = "*.out,*.log")]
    pub pattern: String,

    /// Program that produced the logs
    #[arg(long, value_enum, default_value = "auto")]
    pub program: ProgramArg,

    /// Number of parallel jobs (0 = all cores)
    #[arg(short, long, default_value_t = 0, env = "QCLOGS_JOBS")]
    pub jobs: usize,

    /// Only search the top level of the input directory
    #[arg(long, default_value_t = false)]
    pub no_recursive: bool,
}
