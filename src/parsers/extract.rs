//! # 字段提取器
//!
//! 每个提取器都是 (日志, 标记表, 运行类型) 的纯函数，返回可选的类型化值：
//! 找不到就是 `None`，不是错误。
//!
//! 含优化的运行会打印多次能量，此时取最后一次匹配（最终结构）；
//! 其余运行取第一次匹配。
//!
//! ## 依赖关系
//! - 被 `parsers/record.rs` 使用
//! - 使用 `parsers/section.rs`, `parsers/markers.rs`, `parsers/log_file.rs`

use super::log_file::LogFile;
use super::markers::{FieldRule, MarkerTable};
use super::section::SectionScanner;
use crate::models::{
    Atom, Energies, FrequencyData, OptimisationData, OrbitalInfo, OrbitalOutcome, RunType,
    Transition,
};

/// 正常结束标志所在的文件末尾比例
pub const COMPLETION_TAIL: f64 = 0.05;

/// 按优先级依次尝试规则；`last` 为真时取该规则的最后一次匹配。
/// `parse` 返回 `None` 的行会被跳过。
fn scan<T>(
    lines: &[String],
    rules: &[FieldRule],
    last: bool,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    for rule in rules {
        let mut found = None;
        for line in lines {
            if let Some(value) = rule.apply(line).and_then(&parse) {
                found = Some(value);
                if !last {
                    break;
                }
            }
        }
        if found.is_some() {
            return found;
        }
    }
    None
}

fn parse_f64(s: &str) -> Option<f64> {
    s.parse().ok()
}

/// 作业是否正常结束
pub fn completed(log: &LogFile, markers: &MarkerTable) -> bool {
    log.tail(COMPLETION_TAIL)
        .iter()
        .any(|line| line.contains(markers.termination))
}

/// 去掉括号限定词，如 `RHF(CONV)` → `RHF`
fn method_token(raw: &str) -> Option<String> {
    let token = raw.split('(').next().unwrap_or(raw).trim();
    if token.is_empty() || token.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(token.to_string())
    }
}

/// 计算方法：优先 DFT 泛函，其次从头算哈密顿量
pub fn method(log: &LogFile, markers: &MarkerTable) -> Option<String> {
    scan(log.lines(), &markers.dft_method, false, method_token)
        .or_else(|| scan(log.lines(), &markers.ab_initio_method, false, method_token))
}

/// 基组
pub fn basis(log: &LogFile, markers: &MarkerTable) -> Option<String> {
    scan(log.lines(), &markers.basis, false, |s| Some(s.to_string()))
}

/// 自旋多重度
pub fn multiplicity(log: &LogFile, markers: &MarkerTable) -> Option<u32> {
    scan(log.lines(), &markers.multiplicity, false, |s| s.parse().ok())
}

/// 提取能量，只填充对该运行类型有意义的字段
pub fn energies(log: &LogFile, markers: &MarkerTable, run_type: RunType) -> Energies {
    let last = run_type.is_optimisation();
    let lines = log.lines();
    let tail = log.tail(markers.final_energy_tail);

    // 最终能量总在末尾附近，取其中最后一次
    let final_energy = scan(tail, &markers.final_single_point, true, parse_f64);
    let (final_single_point, optimised) = if run_type.is_optimisation() {
        (None, final_energy)
    } else {
        (final_energy, None)
    };

    Energies {
        scf_total: scan(lines, &markers.scf_total, last, parse_f64),
        final_single_point,
        optimised,
        hf_dft: scan(lines, &markers.hf_dft, last, parse_f64),
        correlation: scan(lines, &markers.correlation, last, parse_f64),
        mp2_opposite_spin: scan(lines, &markers.mp2_opposite_spin, last, parse_f64),
        mp2_same_spin: scan(lines, &markers.mp2_same_spin, last, parse_f64),
        srs_mp2: scan(lines, &markers.srs_mp2, last, parse_f64),
    }
}

/// HOMO(SOMO) 与 LUMO 能量 (eV)
///
/// 只看第一个完整的轨道能量表。占据数非零的行更新 HOMO 候选，
/// 第一个占据数为零的行即 LUMO，随即停止：轨道按能量递增排列。
pub fn homo_lumo(log: &LogFile, markers: &MarkerTable) -> Option<(f64, f64)> {
    let rule = markers.orbitals.as_ref()?;
    let section = SectionScanner::new(&rule.start, &rule.stops).first(log.lines())?;

    let mut homo = None;
    for line in section {
        if !rule.row.is_match(line) {
            continue;
        }
        let cols: Vec<&str> = line.split_whitespace().collect();
        let (Some(occ), Some(energy)) = (
            cols.get(1).and_then(|s| parse_f64(s)),
            cols.last().and_then(|s| parse_f64(s)),
        ) else {
            continue;
        };

        if occ != 0.0 {
            homo = Some(energy);
        } else {
            return homo.map(|h| (h, energy));
        }
    }
    None
}

/// 前线轨道信息，按多重度决定 HOMO-LUMO 或 SOMO-LUMO
pub fn orbitals(log: &LogFile, markers: &MarkerTable, multiplicity: Option<u32>) -> OrbitalOutcome {
    let (transition, multiplicity) = match multiplicity {
        Some(1) => (Transition::HomoLumo, 1),
        Some(2) => (Transition::SomoLumo, 2),
        Some(m) => return OrbitalOutcome::UnsupportedMultiplicity(m),
        None => return OrbitalOutcome::NotFound,
    };

    match homo_lumo(log, markers) {
        Some((homo, lumo)) => OrbitalOutcome::Found(OrbitalInfo {
            homo,
            lumo,
            gap: lumo - homo,
            transition,
            multiplicity,
        }),
        None => OrbitalOutcome::NotFound,
    }
}

/// 元素符号规范化：`CL` → `Cl`
fn normalise_element(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}

/// 最后打印的完整坐标块
pub fn last_geometry(log: &LogFile, markers: &MarkerTable) -> Option<Vec<Atom>> {
    let rule = markers.geometry.as_ref()?;
    let section = SectionScanner::new(&rule.start, &rule.stops).last(log.lines())?;

    let atoms: Vec<Atom> = section
        .iter()
        .filter_map(|line| {
            let caps = rule.row.captures(line)?;
            let coord = |i: usize| caps.get(i).and_then(|m| parse_f64(m.as_str()));
            Some(Atom::new(
                normalise_element(caps.get(1)?.as_str()),
                [coord(2)?, coord(3)?, coord(4)?],
            ))
        })
        .collect();

    if atoms.is_empty() {
        None
    } else {
        Some(atoms)
    }
}

/// 几何优化数据，仅含优化的运行
pub fn optimisation(
    log: &LogFile,
    markers: &MarkerTable,
    run_type: RunType,
) -> Option<OptimisationData> {
    if !run_type.is_optimisation() {
        return None;
    }
    let converged = markers
        .converged
        .as_ref()
        .map(|m| log.lines().iter().any(|line| m.matches(line)))
        .unwrap_or(false);

    Some(OptimisationData {
        converged,
        geometry: last_geometry(log, markers).unwrap_or_default(),
    })
}

/// 振动频率，仅含频率计算的运行
///
/// 零频（平动、转动）不计入。
pub fn frequencies(
    log: &LogFile,
    markers: &MarkerTable,
    run_type: RunType,
) -> Option<FrequencyData> {
    if !run_type.is_frequency() {
        return None;
    }
    let rule = markers.frequencies.as_ref()?;
    let section = SectionScanner::new(&rule.start, &rule.stops).last(log.lines())?;

    let frequencies: Vec<f64> = section
        .iter()
        .filter_map(|line| {
            rule.row
                .captures(line)
                .and_then(|c| c.get(1))
                .and_then(|m| parse_f64(m.as_str()))
        })
        .filter(|f| *f != 0.0)
        .collect();
    let imaginary_modes = frequencies.iter().filter(|f| **f < 0.0).count();

    Some(FrequencyData {
        frequencies,
        imaginary_modes,
    })
}
