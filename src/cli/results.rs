//! # results 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/results.rs`

use super::scan::ScanArgs;
use clap::Args;
use std::path::PathBuf;

/// results 子命令参数
#[derive(Args, Debug)]
pub struct ResultsArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Filename for the results CSV
    #[arg(short, long, default_value = "results.csv")]
    pub output: PathBuf,

    /// Number of rows to print in the summary table
    #[arg(long, default_value_t = 20)]
    pub top_n: usize,

    /// Write the final optimised geometry as equil.xyz (rerun.xyz if not converged)
    #[arg(long, default_value_t = false)]
    pub write_xyz: bool,
}
