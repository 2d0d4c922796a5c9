//! # interaction 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/interaction.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 生成 results CSV 的程序，决定 SRS-MP2 的来源
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum Software {
    /// Use the MP2/SRS column, falling back to HF + 1.64 × MP2_opp
    #[default]
    Gamess,
    /// Always use HF + 1.64 × MP2_opp
    Psi4,
}

impl std::fmt::Display for Software {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Software::Gamess => write!(f, "gamess"),
            Software::Psi4 => write!(f, "psi4"),
        }
    }
}

/// interaction 子命令参数
#[derive(Args, Debug)]
pub struct InteractionArgs {
    /// Results CSV written by `qclogs results`
    pub csv: PathBuf,

    /// Include purely ionic calculations (paths containing 'ionic')
    #[arg(long, default_value_t = false)]
    pub ionic: bool,

    /// Program the energies came from
    #[arg(long, value_enum, default_value = "gamess")]
    pub software: Software,

    /// Optional CSV file for the interaction energies
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
