//! # gaps 子命令实现
//!
//! 提取每个日志的前线轨道能量与能隙。
//!
//! ## 功能
//! - 单重态输出 HOMO-LUMO，二重态输出 SOMO-LUMO
//! - 其他多重度给出警告并跳过
//!
//! ## 依赖关系
//! - 使用 `cli/gaps.rs` 定义的参数
//! - 使用 `parsers/record.rs`
//! - 使用 `utils/output.rs`

use super::{parse_logs, write_error};
use crate::cli::gaps::GapsArgs;
use crate::error::Result;
use crate::models::{OrbitalOutcome, ResultRecord};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// gaps CSV 列
pub const GAPS_HEADER: [&str; 7] = [
    "File",
    "Path",
    "Multiplicity",
    "Transition",
    "HOMO/SOMO (eV)",
    "LUMO (eV)",
    "Gap (eV)",
];

/// 能隙行，同时用于表格和 CSV
#[derive(Debug, Clone, Tabled)]
struct GapRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Multiplicity")]
    multiplicity: u32,
    #[tabled(rename = "Transition")]
    transition: String,
    #[tabled(rename = "HOMO/SOMO (eV)")]
    homo: String,
    #[tabled(rename = "LUMO (eV)")]
    lumo: String,
    #[tabled(rename = "Gap (eV)")]
    gap: String,
}

impl GapRow {
    fn to_record(&self) -> [String; 7] {
        [
            self.file.clone(),
            self.path.clone(),
            self.multiplicity.to_string(),
            self.transition.clone(),
            self.homo.clone(),
            self.lumo.clone(),
            self.gap.clone(),
        ]
    }
}

/// 执行 gaps 命令
pub fn execute(args: GapsArgs) -> Result<()> {
    output::print_header("Frontier Orbital Gaps");

    let records = parse_logs(&args.scan)?;
    let rows = gap_rows(&records);

    if rows.is_empty() {
        output::print_warning("No orbital energy tables found.");
        return Ok(());
    }

    println!("{}", Table::new(&rows));
    save_gaps_csv(&rows, &args.output)?;
    output::print_success(&format!("Gaps saved to '{}'", args.output.display()));
    Ok(())
}

/// 筛选出含轨道信息的记录，其他多重度给出警告
fn gap_rows(records: &[ResultRecord]) -> Vec<GapRow> {
    let mut missing = 0;
    let mut rows = Vec::new();

    for r in records {
        match &r.orbitals {
            OrbitalOutcome::Found(info) => rows.push(GapRow {
                file: r.file.clone(),
                path: r.directory.clone(),
                multiplicity: info.multiplicity,
                transition: info.transition.to_string(),
                homo: format!("{:.4}", info.homo),
                lumo: format!("{:.4}", info.lumo),
                gap: format!("{:.4}", info.gap),
            }),
            OrbitalOutcome::UnsupportedMultiplicity(m) => output::print_warning(&format!(
                "{}: multiplicity {} is not supported, only singlets and doublets",
                r.path.display(),
                m
            )),
            OrbitalOutcome::NotFound => missing += 1,
        }
    }

    if missing > 0 {
        output::print_info(&format!("{} logs without an orbital energy table", missing));
    }
    rows
}

fn save_gaps_csv(rows: &[GapRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    wtr.write_record(GAPS_HEADER)?;
    for row in rows {
        wtr.write_record(row.to_record())?;
    }
    wtr.flush().map_err(|e| write_error(output_path, e))?;
    Ok(())
}
