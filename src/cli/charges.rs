//! # charges 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/charges.rs`

use clap::Args;
use std::path::PathBuf;

/// charges 子命令参数
#[derive(Args, Debug)]
pub struct ChargesArgs {
    /// Input: a charge output file or a directory searched for them
    #[arg(default_value = ".")]
    pub input: PathBuf,

    /// Glob pattern(s) for charge output files, comma separated
    #[arg(long, default_value = "*cm5.out")]
    pub pattern: String,

    /// Filename for the charges CSV
    #[arg(short, long, default_value = "charges.csv")]
    pub output: PathBuf,

    /// Number of parallel jobs (0 = all cores)
    #[arg(short, long, default_value_t = 0, env = "QCLOGS_JOBS")]
    pub jobs: usize,
}
