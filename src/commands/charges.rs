//! # charges 子命令实现
//!
//! 汇总所有电荷输出文件中的 Hirshfeld / CM5 电荷，附带坐标与片段名。
//!
//! ## 依赖关系
//! - 使用 `cli/charges.rs` 定义的参数
//! - 使用 `parsers/charges.rs`
//! - 使用 `batch/` 模块进行批量处理

use super::{report_batch, write_error};
use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::charges::ChargesArgs;
use crate::error::Result;
use crate::parsers::charges::{self, ChargeTable};
use crate::utils::output;

use std::collections::BTreeSet;
use std::path::Path;
use tabled::{Table, Tabled};

/// charges CSV 列
pub const CHARGES_HEADER: [&str; 12] = [
    "Path", "Index", "Element", "Hirshfeld", "Dx", "Dy", "Dz", "CM5", "Rx", "Ry", "Rz", "Molecule",
];

/// 每个文件一行的摘要
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Atoms")]
    atoms: usize,
    #[tabled(rename = "Fragments")]
    fragments: usize,
    #[tabled(rename = "ΣCM5")]
    total_cm5: String,
}

/// 执行 charges 命令
pub fn execute(args: ChargesArgs) -> Result<()> {
    output::print_header("Hirshfeld / CM5 Charges");

    let collector = FileCollector::new(args.input.clone()).with_pattern(&args.pattern);
    let files = collector.collect()?;
    if files.is_empty() {
        output::print_warning(&format!(
            "No matching files found with pattern '{}'",
            args.pattern
        ));
        return Ok(());
    }
    output::print_info(&format!("Found {} charge outputs", files.len()));

    let root = collector.root();
    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(files, |file| match charges::parse_charges(file, &root) {
        Ok(table) => ProcessResult::Success(table),
        Err(e) => ProcessResult::Failed(file.display().to_string(), e.to_string()),
    })?;
    report_batch(&result);

    for table in result.records.iter().filter(|t| t.is_mismatched()) {
        output::print_warning(&format!(
            "{}: {} charge rows but {} input atoms, extra entries dropped",
            table.directory, table.charge_rows, table.atoms
        ));
    }

    if result.records.is_empty() {
        return Ok(());
    }

    let summary: Vec<SummaryRow> = result.records.iter().map(summarise).collect();
    println!("{}", Table::new(&summary));

    save_charges_csv(&result.records, &args.output)?;
    output::print_success(&format!("Charges saved to '{}'", args.output.display()));
    Ok(())
}

fn summarise(table: &ChargeTable) -> SummaryRow {
    let fragments: BTreeSet<&str> = table.records.iter().map(|r| r.molecule.as_str()).collect();
    SummaryRow {
        path: table.directory.clone(),
        atoms: table.records.len(),
        fragments: fragments.len(),
        total_cm5: format!("{:.6}", table.records.iter().map(|r| r.charge.cm5).sum::<f64>()),
    }
}

fn save_charges_csv(tables: &[ChargeTable], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    wtr.write_record(CHARGES_HEADER)?;

    for table in tables {
        for r in &table.records {
            let c = &r.charge;
            wtr.write_record([
                table.directory.clone(),
                c.index.to_string(),
                c.element.clone(),
                c.hirshfeld.to_string(),
                c.dipole[0].to_string(),
                c.dipole[1].to_string(),
                c.dipole[2].to_string(),
                c.cm5.to_string(),
                r.position[0].to_string(),
                r.position[1].to_string(),
                r.position[2].to_string(),
                r.molecule.clone(),
            ])?;
        }
    }

    wtr.flush().map_err(|e| write_error(output_path, e))?;
    Ok(())
}
