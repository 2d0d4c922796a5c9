//! # 结果记录构建
//!
//! 将运行类型分类与各字段提取器组合成每个日志一条 `ResultRecord`。
//!
//! ## 字段取舍
//! - 单点 / 频率：最终单点能
//! - 含优化：优化能量与几何优化数据，不填单点能
//! - 含频率：振动频率
//!
//! 分类失败时返回错误而不是残缺记录；可选字段缺失时为 `None`。
//!
//! ## 依赖关系
//! - 被 `commands/results.rs`, `commands/gaps.rs` 使用
//! - 使用 `parsers/extract.rs`, `parsers/runtype.rs`, `parsers/markers.rs`

use super::extract;
use super::log_file::LogFile;
use super::markers::{self, MarkerTable};
use super::runtype;
use crate::error::{QclogsError, Result};
use crate::models::{Program, ResultRecord};
use std::path::Path;

/// 日志所在目录相对扫描根目录的路径
pub fn relative_directory(path: &Path, root: &Path) -> String {
    let parent = path.parent().unwrap_or(Path::new(""));
    let relative = parent.strip_prefix(root).unwrap_or(parent);
    let s = relative.display().to_string();
    if s.is_empty() {
        ".".to_string()
    } else {
        s
    }
}

/// 从已读入的日志构建记录
pub fn build_record(log: &LogFile, markers: &MarkerTable, root: &Path) -> Result<ResultRecord> {
    let run_type = runtype::classify(log, markers)?;
    let multiplicity = extract::multiplicity(log, markers);

    Ok(ResultRecord {
        path: log.path().to_path_buf(),
        file: log.file_name(),
        directory: relative_directory(log.path(), root),
        program: markers.program,
        run_type,
        completed: extract::completed(log, markers),
        method: extract::method(log, markers),
        basis: extract::basis(log, markers),
        multiplicity,
        energies: extract::energies(log, markers, run_type),
        orbitals: extract::orbitals(log, markers, multiplicity),
        optimisation: extract::optimisation(log, markers, run_type),
        frequencies: extract::frequencies(log, markers, run_type),
    })
}

/// 读取并解析日志文件；未指定程序时根据标志行识别
pub fn parse_log(path: &Path, program: Option<Program>, root: &Path) -> Result<ResultRecord> {
    let log = LogFile::read(path)?;
    let program = match program {
        Some(p) => p,
        None => markers::sniff_program(log.lines()).ok_or_else(|| QclogsError::UnknownProgram {
            path: path.display().to_string(),
        })?,
    };
    build_record(&log, markers::table(program), root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrbitalOutcome, RunType, Transition};
    use crate::parsers::fixtures;
    use crate::parsers::markers::{GAMESS, ORCA, PSI4};
    use std::fs;

    #[test]
    fn test_single_point_record() {
        let log = LogFile::from_content("/calcs/water/spec/water.out", fixtures::ORCA_SINGLE_POINT);
        let record = build_record(&log, &ORCA, Path::new("/calcs")).unwrap();

        assert_eq!(record.file, "water.out");
        assert_eq!(record.directory, "water/spec");
        assert_eq!(record.run_type, RunType::SinglePoint);
        assert!(record.completed);
        assert_eq!(record.method.as_deref(), Some("B88"));
        assert_eq!(record.basis.as_deref(), Some("def2-SVP"));
        assert_eq!(record.energies.final_single_point, Some(-76.326021354891));
        assert!(record.energies.optimised.is_none());
        assert!(record.optimisation.is_none());
        assert!(record.frequencies.is_none());

        let info = record.orbitals.info().unwrap();
        assert_eq!(info.transition, Transition::HomoLumo);
        assert_eq!(info.homo, -6.8858);
        assert_eq!(info.lumo, 0.8289);
    }

    #[test]
    fn test_optimisation_frequency_record() {
        let content = fixtures::ORCA_OPTIMISATION.replace("! HF STO-3G Opt", "! HF STO-3G Opt Freq");
        let log = LogFile::from_content("opt.out", &content);
        let record = build_record(&log, &ORCA, Path::new(".")).unwrap();

        assert_eq!(record.run_type, RunType::OptimisationFrequency);
        assert!(record.energies.final_single_point.is_none());
        assert_eq!(record.energies.optimised, Some(-74.965901192));
        assert!(record.optimisation.as_ref().unwrap().converged);
        // 没有频率表
        assert!(record.frequencies.is_none());
        assert_eq!(record.orbitals, OrbitalOutcome::NotFound);
    }

    #[test]
    fn test_unclassifiable_log_is_error() {
        let log = LogFile::from_content("broken.out", "* O   R   C   A *\nnothing else\n");
        let err = build_record(&log, &ORCA, Path::new(".")).unwrap_err();
        assert!(matches!(err, QclogsError::ClassificationError { .. }));
    }

    #[test]
    fn test_psi4_record() {
        let log = LogFile::from_content("mp2.out", fixtures::PSI4_MP2);
        let record = build_record(&log, &PSI4, Path::new(".")).unwrap();
        assert_eq!(record.program, Program::Psi4);
        assert!(record.completed);
        assert_eq!(record.method.as_deref(), Some("mp2"));
        assert_eq!(record.basis.as_deref(), Some("CC-PVDZ"));
        assert_eq!(record.multiplicity, Some(1));
    }

    #[test]
    fn test_gamess_mp2_record() {
        let log = LogFile::from_content("mp2.log", fixtures::GAMESS_MP2);
        let record = build_record(&log, &GAMESS, Path::new(".")).unwrap();

        assert_eq!(record.program, Program::Gamess);
        assert_eq!(record.run_type, RunType::SinglePoint);
        assert!(record.completed);
        assert_eq!(record.method.as_deref(), Some("RHF"));
        assert_eq!(record.basis.as_deref(), Some("CCD"));
        assert_eq!(record.multiplicity, Some(1));

        let e = &record.energies;
        assert_eq!(e.scf_total, Some(-76.0107465159));
        assert_eq!(e.hf_dft, Some(-76.0107465159));
        assert_eq!(e.final_single_point, Some(-76.2091308423));
        assert_eq!(e.correlation, Some(-0.1983843264));
        assert_eq!(e.mp2_same_spin, Some(-0.0510534864));
        assert_eq!(e.mp2_opposite_spin, Some(-0.1473308400));
        assert_eq!(e.srs_mp2, Some(-76.2523691135));
        assert!(e.optimised.is_none());
        assert!(record.optimisation.is_none());
        assert_eq!(record.orbitals, OrbitalOutcome::NotFound);
    }

    #[test]
    fn test_gamess_optimisation_record() {
        let log = LogFile::from_content("opt.log", fixtures::GAMESS_OPTIMISATION);
        let record = build_record(&log, &GAMESS, Path::new(".")).unwrap();

        assert_eq!(record.run_type, RunType::Optimisation);
        assert!(record.completed);
        assert_eq!(record.basis.as_deref(), Some("N31"));
        assert!(record.energies.final_single_point.is_none());
        assert_eq!(record.energies.optimised, Some(-75.9860123456));
        assert_eq!(record.energies.scf_total, Some(-75.9860123456));

        let opt = record.optimisation.unwrap();
        assert!(opt.converged);
        assert_eq!(opt.geometry.len(), 3);
        assert_eq!(opt.geometry[0].position, [0.0, 0.0, 0.1173]);
    }

    #[test]
    fn test_gamess_truncated_log_not_completed() {
        let cut = fixtures::GAMESS_MP2.replace("EXECUTION OF GAMESS TERMINATED NORMALLY", "");
        let log = LogFile::from_content("mp2.log", &cut);
        let record = build_record(&log, &GAMESS, Path::new(".")).unwrap();
        assert!(!record.completed);
    }

    #[test]
    fn test_psi4_dft_optimisation_frequency_record() {
        let log = LogFile::from_content("opt.out", fixtures::PSI4_DFT_OPT_FREQ);
        let record = build_record(&log, &PSI4, Path::new(".")).unwrap();

        assert_eq!(record.run_type, RunType::OptimisationFrequency);
        assert!(record.completed);
        assert_eq!(record.method.as_deref(), Some("B3LYP"));
        assert_eq!(record.basis.as_deref(), Some("CC-PVDZ"));
        assert!(record.energies.final_single_point.is_none());
        assert_eq!(record.energies.optimised, Some(-76.4203245112));
        assert_eq!(record.energies.scf_total, Some(-76.4203245112));

        let opt = record.optimisation.as_ref().unwrap();
        assert!(opt.converged);
        assert_eq!(opt.geometry.len(), 3);
        assert_eq!(opt.geometry[0].element, "O");
        assert_eq!(opt.geometry[0].position[2], -0.0651234);
        // Psi4 没有频率表规则
        assert!(record.frequencies.is_none());
    }

    #[test]
    fn test_parse_log_sniffs_program() {
        let dir = tempfile::tempdir().unwrap();
        let job_dir = dir.path().join("c1mim").join("spec");
        fs::create_dir_all(&job_dir).unwrap();
        let log_path = job_dir.join("spec.out");
        fs::write(&log_path, fixtures::ORCA_SINGLE_POINT).unwrap();

        let record = parse_log(&log_path, None, dir.path()).unwrap();
        assert_eq!(record.program, Program::Orca);
        assert_eq!(record.directory, Path::new("c1mim").join("spec").display().to_string());
    }

    #[test]
    fn test_parse_log_unknown_program() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("g16.log");
        fs::write(&log_path, " Entering Gaussian System\n").unwrap();

        let err = parse_log(&log_path, None, dir.path()).unwrap_err();
        assert!(matches!(err, QclogsError::UnknownProgram { .. }));
    }
}
