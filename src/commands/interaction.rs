//! # interaction 子命令实现
//!
//! 由 results CSV 计算团簇相互作用能。
//!
//! ## 计算规则
//! - 构型名为 `Path` 的第一段目录
//! - 路径含 `frag` 为片段，含 `ionic`（仅 `--ionic`）为纯离子体系，其余为复合物
//! - SRS = MP2/SRS 列，缺失时为 HF + 1.64 × MP2_opp；Psi4 总是使用后者
//! - Corr = SRS − HF
//! - 同一构型同一类型的能量求和，缺失值跳过
//! - E_int = (E_complex − E_ionic − E_frags) × 2625.5 kJ/mol
//!
//! ## 依赖关系
//! - 使用 `cli/interaction.rs` 定义的参数
//! - 读取 `commands/results.rs` 写出的 CSV

use super::write_error;
use crate::cli::interaction::{InteractionArgs, Software};
use crate::error::{QclogsError, Result};
use crate::utils::output;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tabled::{Table, Tabled};

/// Hartree → kJ/mol
pub const HARTREE_TO_KJ: f64 = 2625.5;

/// SRS-MP2 反平行自旋缩放系数
pub const SRS_OPPOSITE_SPIN_SCALE: f64 = 1.64;

/// results CSV 中需要的列，其余列忽略
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnergyRow {
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "HF/DFT")]
    pub hf: Option<f64>,
    #[serde(rename = "MP2/SRS")]
    pub srs: Option<f64>,
    #[serde(rename = "MP2_opp")]
    pub mp2_opposite: Option<f64>,
}

/// 计算类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    Complex,
    Ionic,
    Frag,
}

impl Component {
    fn of(path: &str, ionic: bool) -> Self {
        if path.contains("frag") {
            Component::Frag
        } else if ionic && path.contains("ionic") {
            Component::Ionic
        } else {
            Component::Complex
        }
    }
}

/// 一个构型的相互作用能
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionRow {
    pub config: String,
    pub corr_complex: f64,
    /// 仅 `--ionic` 时存在
    pub corr_ionic: Option<f64>,
    pub corr_frags: f64,
    pub hf_complex: f64,
    pub hf_ionic: Option<f64>,
    pub hf_frags: f64,
    pub hf_int_kj: f64,
    pub corr_int_kj: f64,
    pub total_int_kj: f64,
}

#[derive(Default)]
struct Sums {
    hf: [f64; 3],
    corr: [f64; 3],
}

/// 按构型汇总并计算相互作用能，构型按名称排序
pub fn interaction_energies(rows: &[EnergyRow], ionic: bool, software: Software) -> Vec<InteractionRow> {
    let mut groups: BTreeMap<String, Sums> = BTreeMap::new();

    for row in rows {
        let config = row.path.split('/').next().unwrap_or_default().to_string();
        let slot = Component::of(&row.path, ionic) as usize;
        let sums = groups.entry(config).or_default();

        let scaled = match (row.hf, row.mp2_opposite) {
            (Some(hf), Some(opp)) => Some(hf + SRS_OPPOSITE_SPIN_SCALE * opp),
            _ => None,
        };
        let srs = match software {
            Software::Gamess => row.srs.or(scaled),
            Software::Psi4 => scaled,
        };

        if let Some(hf) = row.hf {
            sums.hf[slot] += hf;
        }
        if let (Some(srs), Some(hf)) = (srs, row.hf) {
            sums.corr[slot] += srs - hf;
        }
    }

    groups
        .into_iter()
        .map(|(config, s)| {
            let [hf_complex, hf_ionic, hf_frags] = s.hf;
            let [corr_complex, corr_ionic, corr_frags] = s.corr;
            let hf_int_kj = (hf_complex - hf_ionic - hf_frags) * HARTREE_TO_KJ;
            let corr_int_kj = (corr_complex - corr_ionic - corr_frags) * HARTREE_TO_KJ;
            InteractionRow {
                config,
                corr_complex,
                corr_ionic: ionic.then_some(corr_ionic),
                corr_frags,
                hf_complex,
                hf_ionic: ionic.then_some(hf_ionic),
                hf_frags,
                hf_int_kj,
                corr_int_kj,
                total_int_kj: hf_int_kj + corr_int_kj,
            }
        })
        .collect()
}

/// NaN 视为缺失
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

/// 必需的列
const REQUIRED_COLUMNS: [&str; 4] = ["Path", "HF/DFT", "MP2/SRS", "MP2_opp"];

/// 读取 results CSV，空单元格为 `None`
pub fn read_energy_rows(path: &Path) -> Result<Vec<EnergyRow>> {
    let mut rdr = csv::Reader::from_path(path)?;

    let headers = rdr.headers()?;
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|name| !headers.iter().any(|h| h == **name))
    {
        return Err(QclogsError::ParseError {
            format: "csv".to_string(),
            path: path.display().to_string(),
            reason: format!("Missing column '{}'", missing),
        });
    }

    let mut rows = Vec::new();
    for row in rdr.deserialize() {
        let row: EnergyRow = row?;
        rows.push(EnergyRow {
            hf: finite(row.hf),
            srs: finite(row.srs),
            mp2_opposite: finite(row.mp2_opposite),
            ..row
        });
    }
    Ok(rows)
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Config")]
    config: String,
    #[tabled(rename = "HF (kJ/mol)")]
    hf: String,
    #[tabled(rename = "Corr (kJ/mol)")]
    corr: String,
    #[tabled(rename = "Total (kJ/mol)")]
    total: String,
}

/// 执行 interaction 命令
pub fn execute(args: InteractionArgs) -> Result<()> {
    output::print_header("Interaction Energies");

    let rows = read_energy_rows(&args.csv)?;
    output::print_info(&format!(
        "Read {} calculations from '{}' ({})",
        rows.len(),
        args.csv.display(),
        args.software
    ));

    let energies = interaction_energies(&rows, args.ionic, args.software);
    if energies.is_empty() {
        output::print_warning("No configurations found.");
        return Ok(());
    }

    let table: Vec<TableRow> = energies
        .iter()
        .map(|e| TableRow {
            config: e.config.clone(),
            hf: format!("{:.2}", e.hf_int_kj),
            corr: format!("{:.2}", e.corr_int_kj),
            total: format!("{:.2}", e.total_int_kj),
        })
        .collect();
    println!("{}", Table::new(&table));

    if let Some(output_path) = &args.output {
        save_interaction_csv(&energies, args.ionic, output_path)?;
        output::print_success(&format!(
            "Interaction energies saved to '{}'",
            output_path.display()
        ));
    }
    Ok(())
}

fn save_interaction_csv(rows: &[InteractionRow], ionic: bool, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    let mut header = vec!["Config", "corr_complex"];
    if ionic {
        header.push("corr_ionic");
    }
    header.extend(["corr_frags", "hf_complex"]);
    if ionic {
        header.push("hf_ionic");
    }
    header.extend(["hf_frags", "hf_int_kj", "corr_int_kj", "total_int_kj"]);
    wtr.write_record(&header)?;

    for r in rows {
        let mut record = vec![r.config.clone(), r.corr_complex.to_string()];
        record.extend(r.corr_ionic.map(|v| v.to_string()));
        record.extend([r.corr_frags.to_string(), r.hf_complex.to_string()]);
        record.extend(r.hf_ionic.map(|v| v.to_string()));
        record.extend([
            r.hf_frags.to_string(),
            r.hf_int_kj.to_string(),
            r.corr_int_kj.to_string(),
            r.total_int_kj.to_string(),
        ]);
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(|e| write_error(output_path, e))?;
    Ok(())
}
