//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `parsers/`, `models/`, `utils/`
//! - 子模块: results, gaps, charges, interaction, tree

pub mod charges;
pub mod gaps;
pub mod interaction;
pub mod results;
pub mod tree;

use crate::batch::{BatchResult, BatchRunner, FileCollector, ProcessResult};
use crate::cli::scan::ScanArgs;
use crate::cli::Commands;
use crate::error::{QclogsError, Result};
use crate::models::ResultRecord;
use crate::parsers;
use crate::utils::output;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Results(args) => results::execute(args),
        Commands::Gaps(args) => gaps::execute(args),
        Commands::Charges(args) => charges::execute(args),
        Commands::Interaction(args) => interaction::execute(args),
        Commands::Tree(args) => tree::execute(args),
    }
}

/// 收集并并行解析日志，返回按路径排序的记录
fn parse_logs(scan: &ScanArgs) -> Result<Vec<ResultRecord>> {
    let collector = FileCollector::new(scan.input.clone())
        .with_pattern(&scan.pattern)
        .recursive(!scan.no_recursive);
    let files = collector.collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No matching files found with pattern '{}'",
            scan.pattern
        ));
        return Ok(Vec::new());
    }

    let root = collector.root();
    let program = scan.program.program();
    output::print_info(&format!(
        "Found {} log files (program: {})",
        files.len(),
        scan.program
    ));

    let runner = BatchRunner::new(scan.jobs);
    output::print_info(&format!("Using {} threads", runner.jobs()));
    let result = runner.run(files, |file| match parsers::parse_log(file, program, &root) {
        Ok(record) => ProcessResult::Success(record),
        // 匹配到的非日志文件（如作业系统输出）
        Err(QclogsError::UnknownProgram { path }) => {
            ProcessResult::Skipped(format!("Unrecognised program: {}", path))
        }
        Err(e) => ProcessResult::Failed(file.display().to_string(), e.to_string()),
    })?;

    report_batch(&result);
    Ok(result.records)
}

/// 打印批处理统计与失败详情
fn report_batch<T>(result: &BatchResult<T>) {
    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} files, {} parsed, {} skipped, {} failed",
        result.total(),
        result.records.len(),
        result.skipped.len(),
        result.failures.len()
    ));

    for msg in &result.skipped {
        output::print_skip(msg);
    }

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }
}

/// 可选数值格式化，缺失时为空单元格
fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// 写 CSV 时的 I/O 错误
fn write_error(path: &std::path::Path, e: std::io::Error) -> QclogsError {
    QclogsError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    }
}
