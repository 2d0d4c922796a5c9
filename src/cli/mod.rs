//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `results`: 汇总日志中的能量、方法、基组等
//! - `gaps`: HOMO-LUMO / SOMO-LUMO 能隙
//! - `charges`: Hirshfeld / CM5 电荷表
//! - `interaction`: 由 results CSV 计算相互作用能
//! - `tree`: 由 xyz 文件名生成作业目录树
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: scan, results, gaps, charges, interaction, tree

pub mod charges;
pub mod gaps;
pub mod interaction;
pub mod results;
pub mod scan;
pub mod tree;

use crate::models::Program;
use clap::{Parser, Subcommand, ValueEnum};

/// qclogs - 量子化学日志解析工具
#[derive(Parser)]
#[command(name = "qclogs")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Parse ORCA, GAMESS and Psi4 logs into tabular summaries", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Summarise energies, method and basis of every log into a CSV
    Results(results::ResultsArgs),

    /// Extract HOMO-LUMO / SOMO-LUMO gaps
    Gaps(gaps::GapsArgs),

    /// Collect Hirshfeld and CM5 charges with fragment labels
    Charges(charges::ChargesArgs),

    /// Calculate interaction energies from a results CSV
    Interaction(interaction::InteractionArgs),

    /// Build a job directory tree from a directory of xyz files
    Tree(tree::TreeArgs),
}

/// 日志程序选择
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ProgramArg {
    /// Detect from the log banner
    #[default]
    Auto,
    /// ORCA
    Orca,
    /// GAMESS(US)
    Gamess,
    /// Psi4
    Psi4,
}

impl ProgramArg {
    /// `Auto` 时返回 `None`，由解析器识别
    pub fn program(self) -> Option<Program> {
        match self {
            ProgramArg::Auto => None,
            ProgramArg::Orca => Some(Program::Orca),
            ProgramArg::Gamess => Some(Program::Gamess),
            ProgramArg::Psi4 => Some(Program::Psi4),
        }
    }
}

impl std::fmt::Display for ProgramArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgramArg::Auto => write!(f, "auto"),
            ProgramArg::Orca => write!(f, "orca"),
            ProgramArg::Gamess => write!(f, "gamess"),
            ProgramArg::Psi4 => write!(f, "psi4"),
        }
    }
}
