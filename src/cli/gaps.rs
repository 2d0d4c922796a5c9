//! # gaps 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/gaps.rs`

use super::scan::ScanArgs;
use clap::Args;
use std::path::PathBuf;

/// gaps 子命令参数
#[derive(Args, Debug)]
pub struct GapsArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Filename for the gaps CSV
    #[arg(short, long, default_value = "gaps.csv")]
    pub output: PathBuf,
}
