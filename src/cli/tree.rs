//! # tree 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/tree.rs`

use clap::Args;
use std::path::PathBuf;

/// tree 子命令参数
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Directory containing the xyz files
    #[arg(default_value = "files")]
    pub input: PathBuf,

    /// Root of the generated directory tree
    #[arg(short, long, default_value = "calcs")]
    pub output: PathBuf,

    /// Also write each molecular fragment into frags/<name>_<i>/
    #[arg(long, default_value_t = false)]
    pub frags: bool,

    /// Job subdirectories to create beside each geometry (e.g. "opt,spec")
    #[arg(long, value_delimiter = ',')]
    pub jobs_dirs: Vec<String>,

    /// Overwrite existing xyz files in the tree
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
