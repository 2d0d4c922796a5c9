//! # qclogs - 量子化学日志解析工具
//!
//! 从 ORCA、GAMESS、Psi4 的输出日志中提取能量、前线轨道、电荷与几何结构，
//! 汇总成 CSV 和终端表格。
//!
//! ## 子命令
//! - `results` - 能量、方法、基组汇总
//! - `gaps` - HOMO-LUMO / SOMO-LUMO 能隙
//! - `charges` - Hirshfeld / CM5 电荷
//! - `interaction` - 团簇相互作用能
//! - `tree` - 由 xyz 文件生成作业目录树
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (文件收集与并行处理)
//!   │     ├── parsers/   (日志扫描与字段提取)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出与进度条)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
