//! # Hirshfeld / CM5 电荷解析器
//!
//! 从输出文件中提取 Hirshfeld 与 CM5 电荷表，并从同名输入文件中读取坐标，
//! 按连通性划分分子片段，逐原子组合成电荷记录。
//!
//! ## 电荷表格式
//! ```text
//!               Q-H        S-H        Dx         Dy         Dz        Q-CM5
//!      1  O   -0.329565   0.000000  -0.000000   0.000000  -0.158063  -0.661213
//!      2  H    0.164782   0.000000  -0.000000   0.098306   0.060281   0.330607
//!    Tot   0.000000   0.000000  -0.000000   0.000000  -0.037501   0.000000
//! ```
//! 同一文件中出现多张表时以最后一张为准。
//!
//! ## 依赖关系
//! - 被 `commands/charges.rs` 使用
//! - 使用 `parsers/section.rs`, `parsers/log_file.rs`, `models/molecule.rs`

use super::log_file::LogFile;
use super::record::relative_directory;
use super::section::{Marker, SectionScanner};
use crate::error::{QclogsError, Result};
use crate::models::{Atom, AtomCharge, ChargeRecord, Molecule};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// 电荷表表头
pub const CM5_HEADER: &str = "Q-H        S-H        Dx         Dy         Dz        Q-CM5";

static CHARGE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*[0-9]{1,3}\s*[A-Za-z]{1,2}(\s*\D?[0-9]{1,3}\.[0-9]{1,10}){6}").unwrap()
});

static DECK_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Z][a-z]?)\s+(-?\d+\.?\d*)\s+(-?\d+\.?\d*)\s+(-?\d+\.?\d*)\s*$").unwrap()
});

/// 一个输出文件的电荷表及其坐标
#[derive(Debug, Clone)]
pub struct ChargeTable {
    /// 相对扫描根目录的所在目录
    pub directory: String,
    pub records: Vec<ChargeRecord>,
    /// 电荷表行数
    pub charge_rows: usize,
    /// 输入文件原子数
    pub atoms: usize,
}

impl ChargeTable {
    /// 电荷行数与输入原子数不一致
    pub fn is_mismatched(&self) -> bool {
        self.charge_rows != self.atoms
    }
}

fn parse_charge_row(line: &str) -> Option<AtomCharge> {
    if !CHARGE_ROW.is_match(line) {
        return None;
    }
    let cols: Vec<&str> = line.split_whitespace().collect();
    if cols.len() < 8 {
        return None;
    }
    let num = |i: usize| cols[i].parse::<f64>().ok();

    // 第 4 列为自旋密度，不输出
    Some(AtomCharge {
        index: cols[0].parse().ok()?,
        element: cols[1].to_string(),
        hirshfeld: num(2)?,
        dipole: [num(4)?, num(5)?, num(6)?],
        cm5: num(7)?,
    })
}

/// 最后一张完整电荷表
pub fn charge_table(log: &LogFile) -> Option<Vec<AtomCharge>> {
    let start = Marker::Contains(CM5_HEADER);
    let stops = [Marker::Contains("Tot")];
    let section = SectionScanner::new(&start, &stops).last(log.lines())?;
    Some(section.into_iter().filter_map(parse_charge_row).collect())
}

/// 同名输入文件：扩展名换成 `.inp`
pub fn companion_input(output: &Path) -> PathBuf {
    output.with_extension("inp")
}

/// 从输入文件读取 `元素 X Y Z` 坐标行
pub fn read_input_coordinates(path: &Path) -> Result<Vec<Atom>> {
    let deck = LogFile::read(path)?;
    Ok(deck
        .lines()
        .iter()
        .filter_map(|line| {
            let caps = DECK_ROW.captures(line)?;
            let coord = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<f64>().ok());
            Some(Atom::new(&caps[1], [coord(2)?, coord(3)?, coord(4)?]))
        })
        .collect())
}

/// 解析一个电荷输出文件
pub fn parse_charges(path: &Path, root: &Path) -> Result<ChargeTable> {
    let log = LogFile::read(path)?;
    let charges = charge_table(&log).ok_or_else(|| QclogsError::ParseError {
        format: "cm5".to_string(),
        path: path.display().to_string(),
        reason: "No complete Hirshfeld/CM5 charge table".to_string(),
    })?;

    let atoms = read_input_coordinates(&companion_input(path))?;
    let molecule = Molecule::new(atoms);
    let fragments = molecule.separate();

    let records = charges
        .iter()
        .zip(molecule.atoms.iter().enumerate())
        .map(|(charge, (i, atom))| ChargeRecord {
            charge: charge.clone(),
            position: atom.position,
            molecule: fragments
                .fragment_of(i)
                .map(|f| f.label())
                .unwrap_or_default(),
        })
        .collect();

    Ok(ChargeTable {
        directory: relative_directory(path, root),
        records,
        charge_rows: charges.len(),
        atoms: molecule.atoms.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CM5_OUTPUT: &str = "\
 Hirshfeld charges, spin densities, dipoles, and CM5 charges using IRadAn=      4:
              Q-H        S-H        Dx         Dy         Dz        Q-CM5
     1  O   -0.329565   0.000000  -0.000000   0.000000  -0.158063  -0.661213
     2  H    0.164782   0.000000  -0.000000   0.098306   0.060281   0.330607
     3  H    0.164782   0.000000   0.000000  -0.098306   0.060281   0.330607
   Tot   0.000000   0.000000  -0.000000   0.000000  -0.037501   0.000000
";

    const WATER_INPUT: &str = "\
%chk=water.chk
#p b3lyp/6-31g(d) pop=hirshfeld

water

0 1
O      0.000000    0.000000    0.117300
H      0.000000    0.757200   -0.469200
H      0.000000   -0.757200   -0.469200

";

    #[test]
    fn test_charge_row() {
        let row = parse_charge_row(
            "     2  H    0.164782   0.000000  -0.000000   0.098306   0.060281   0.330607",
        )
        .unwrap();
        assert_eq!(row.index, 2);
        assert_eq!(row.element, "H");
        assert_eq!(row.hirshfeld, 0.164782);
        assert_eq!(row.dipole, [-0.0, 0.098306, 0.060281]);
        assert_eq!(row.cm5, 0.330607);
        assert!(parse_charge_row("   Tot   0.000000   0.000000").is_none());
    }

    #[test]
    fn test_last_table_wins() {
        let content = format!("{}\n{}", CM5_OUTPUT.replace("-0.661213", "-0.999999"), CM5_OUTPUT);
        let log = LogFile::from_content("water_cm5.out", &content);
        let table = charge_table(&log).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table[0].cm5, -0.661213);
    }

    #[test]
    fn test_companion_input() {
        assert_eq!(
            companion_input(Path::new("calcs/outer/water_cm5.out")),
            PathBuf::from("calcs/outer/water_cm5.inp")
        );
        assert_eq!(
            companion_input(Path::new("calcs/timeout_cm5.out")),
            PathBuf::from("calcs/timeout_cm5.inp")
        );
    }

    #[test]
    fn test_parse_charges_with_fragments() {
        let dir = tempfile::tempdir().unwrap();
        let job = dir.path().join("water");
        fs::create_dir_all(&job).unwrap();
        fs::write(job.join("water_cm5.out"), CM5_OUTPUT).unwrap();
        fs::write(job.join("water_cm5.inp"), WATER_INPUT).unwrap();

        let table = parse_charges(&job.join("water_cm5.out"), dir.path()).unwrap();
        assert_eq!(table.directory, "water");
        assert!(!table.is_mismatched());
        assert_eq!(table.records.len(), 3);
        assert_eq!(table.records[0].molecule, "H2O_0");
        assert_eq!(table.records[1].position, [0.0, 0.7572, -0.4692]);
    }

    #[test]
    fn test_missing_table_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty_cm5.out");
        fs::write(&out, "nothing here\n").unwrap();
        let err = parse_charges(&out, dir.path()).unwrap_err();
        assert!(matches!(err, QclogsError::ParseError { .. }));
    }
}
