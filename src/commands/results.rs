//! # results 子命令实现
//!
//! 解析所有日志，写出能量汇总 CSV 并打印摘要表格。
//!
//! ## 功能
//! - 自动识别程序或按参数指定
//! - 并行解析，单个文件失败只记录不终止
//! - 可选写出优化后的几何结构（equil.xyz / rerun.xyz）
//!
//! ## 依赖关系
//! - 使用 `cli/results.rs` 定义的参数
//! - 使用 `parsers/record.rs`, `parsers/xyz.rs`
//! - 使用 `utils/output.rs`

use super::{fmt_opt, parse_logs, write_error};
use crate::cli::results::ResultsArgs;
use crate::error::Result;
use crate::models::ResultRecord;
use crate::parsers::xyz;
use crate::utils::output;

use std::path::{Component, Path, PathBuf};
use tabled::{Table, Tabled};

/// results CSV 列
pub const RESULTS_HEADER: [&str; 14] = [
    "File",
    "Path",
    "Program",
    "RunType",
    "Completed",
    "Method",
    "Basis",
    "Multiplicity",
    "Energy",
    "HF/DFT",
    "Correlation",
    "MP2/SRS",
    "MP2_opp",
    "MP2_same",
];

/// 作业类型目录名，几何结构写到其上一级
const JOB_DIRS: [&str; 4] = ["opt", "spec", "hess", "freq"];

/// 摘要表格行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Type")]
    run_type: String,
    #[tabled(rename = "Done")]
    completed: String,
    #[tabled(rename = "Energy (Eh)")]
    energy: String,
}

/// 执行 results 命令
pub fn execute(args: ResultsArgs) -> Result<()> {
    output::print_header("Collecting Calculation Results");

    let records = parse_logs(&args.scan)?;
    if records.is_empty() {
        output::print_warning("No results to write.");
        return Ok(());
    }

    let incomplete = records.iter().filter(|r| !r.completed).count();
    if incomplete > 0 {
        output::print_warning(&format!(
            "{} calculations did not terminate normally",
            incomplete
        ));
    }

    for r in &records {
        if let Some(freq) = r.frequencies.as_ref().filter(|f| f.imaginary_modes > 0) {
            output::print_warning(&format!(
                "{}: {} imaginary frequencies (lowest {:.2} cm^-1)",
                r.path.display(),
                freq.imaginary_modes,
                freq.frequencies.iter().cloned().fold(f64::INFINITY, f64::min)
            ));
        }
    }

    let rows: Vec<SummaryRow> = records
        .iter()
        .take(args.top_n)
        .map(|r| SummaryRow {
            file: r.file.clone(),
            path: r.directory.clone(),
            run_type: r.run_type.to_string(),
            completed: if r.completed { "yes" } else { "no" }.to_string(),
            energy: r
                .energies
                .final_energy()
                .map(|e| format!("{:.8}", e))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    println!("{}", Table::new(&rows));
    if records.len() > args.top_n {
        output::print_info(&format!("... {} more in CSV", records.len() - args.top_n));
    }

    save_results_csv(&records, &args.output)?;
    output::print_success(&format!("Results saved to '{}'", args.output.display()));

    if args.write_xyz {
        let written = write_geometries(&records);
        output::print_info(&format!("{} geometries written", written));
    }

    Ok(())
}

/// 记录转为 CSV 行
fn csv_row(r: &ResultRecord) -> Vec<String> {
    vec![
        r.file.clone(),
        r.directory.clone(),
        r.program.to_string(),
        r.run_type.to_string(),
        r.completed.to_string(),
        r.method.clone().unwrap_or_default(),
        r.basis.clone().unwrap_or_default(),
        r.multiplicity.map(|m| m.to_string()).unwrap_or_default(),
        fmt_opt(r.energies.final_energy()),
        fmt_opt(r.energies.hf_dft),
        fmt_opt(r.energies.correlation),
        fmt_opt(r.energies.srs_mp2),
        fmt_opt(r.energies.mp2_opposite_spin),
        fmt_opt(r.energies.mp2_same_spin),
    ]
}

/// 保存结果到 CSV
pub fn save_results_csv(records: &[ResultRecord], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    wtr.write_record(RESULTS_HEADER)?;
    for r in records {
        wtr.write_record(csv_row(r))?;
    }
    wtr.flush().map_err(|e| write_error(output_path, e))?;
    Ok(())
}

/// 分子目录：日志路径中第一个作业类型目录之前的部分
pub fn molecule_dir(log_path: &Path) -> PathBuf {
    let parent = log_path.parent().unwrap_or(Path::new(""));
    let mut dir = PathBuf::new();
    for component in parent.components() {
        if let Component::Normal(name) = component {
            if JOB_DIRS.iter().any(|j| name == *j) {
                return dir;
            }
        }
        dir.push(component);
    }
    dir
}

/// 写出优化几何结构，返回成功写出的文件数；单个失败只警告
fn write_geometries(records: &[ResultRecord]) -> usize {
    let mut written = 0;
    for r in records {
        let Some(opt) = &r.optimisation else {
            continue;
        };
        if opt.geometry.is_empty() {
            output::print_warning(&format!("{}: no geometry printed", r.path.display()));
            continue;
        }

        let name = if opt.converged { "equil.xyz" } else { "rerun.xyz" };
        let target = molecule_dir(&r.path).join(name);
        if let Err(e) = xyz::write_xyz_file(&target, &opt.geometry, &r.file) {
            output::print_warning(&format!("{}: {}", r.path.display(), e));
            continue;
        }
        written += 1;

        if opt.converged {
            output::print_written(&r.path.display().to_string(), &target.display().to_string());
        } else {
            output::print_warning(&format!(
                "{} not converged, last geometry stored in {}",
                r.path.display(),
                target.display()
            ));
        }
    }
    written
}
