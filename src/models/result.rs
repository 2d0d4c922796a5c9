//! # 计算结果数据模型
//!
//! 存储 ORCA/GAMESS/Psi4 日志中提取出的结果。
//!
//! 每个字段只在对应运行类型下有意义时才会填充，其余一律为 `None`，
//! 不会用 0 之类的占位值。
//!
//! ## 依赖关系
//! - 被 `parsers/record.rs`, `parsers/extract.rs` 使用
//! - 被 `commands/results.rs`, `commands/gaps.rs` 使用

use super::molecule::Atom;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 量子化学程序类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Program {
    Orca,
    Gamess,
    Psi4,
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Program::Orca => write!(f, "ORCA"),
            Program::Gamess => write!(f, "GAMESS"),
            Program::Psi4 => write!(f, "Psi4"),
        }
    }
}

/// 运行类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunType {
    SinglePoint,
    Optimisation,
    OptimisationFrequency,
    Frequency,
}

impl RunType {
    /// 由关键字出现情况决定运行类型
    pub fn from_flags(opt: bool, freq: bool) -> Self {
        match (opt, freq) {
            (true, false) => RunType::Optimisation,
            (true, true) => RunType::OptimisationFrequency,
            (false, true) => RunType::Frequency,
            (false, false) => RunType::SinglePoint,
        }
    }

    pub fn is_optimisation(self) -> bool {
        matches!(self, RunType::Optimisation | RunType::OptimisationFrequency)
    }

    pub fn is_frequency(self) -> bool {
        matches!(self, RunType::Frequency | RunType::OptimisationFrequency)
    }
}

impl std::fmt::Display for RunType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunType::SinglePoint => write!(f, "spec"),
            RunType::Optimisation => write!(f, "opt"),
            RunType::OptimisationFrequency => write!(f, "opt-freq"),
            RunType::Frequency => write!(f, "freq"),
        }
    }
}

/// 能量（Hartree），按种类区分
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Energies {
    /// SCF 总能量
    pub scf_total: Option<f64>,

    /// 单点能（仅 SinglePoint / Frequency）
    pub final_single_point: Option<f64>,

    /// 优化后的最终能量（仅含优化的运行）
    pub optimised: Option<f64>,

    /// HF/DFT 部分
    pub hf_dft: Option<f64>,

    /// 相关能部分
    pub correlation: Option<f64>,

    /// MP2 反平行自旋相关能
    pub mp2_opposite_spin: Option<f64>,

    /// MP2 平行自旋相关能
    pub mp2_same_spin: Option<f64>,

    /// SRS-MP2 总能量
    pub srs_mp2: Option<f64>,
}

impl Energies {
    /// 运行的最终能量：单点能或优化能量
    pub fn final_energy(&self) -> Option<f64> {
        self.final_single_point.or(self.optimised)
    }
}

/// 前线轨道跃迁类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    HomoLumo,
    SomoLumo,
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::HomoLumo => write!(f, "HOMO-LUMO"),
            Transition::SomoLumo => write!(f, "SOMO-LUMO"),
        }
    }
}

/// 前线轨道能量 (eV)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalInfo {
    /// HOMO 或 SOMO
    pub homo: f64,
    pub lumo: f64,
    pub gap: f64,
    pub transition: Transition,
    pub multiplicity: u32,
}

/// 轨道提取结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitalOutcome {
    Found(OrbitalInfo),
    /// 没有完整的轨道能量表，或该程序不支持
    NotFound,
    /// 只处理单重态和二重态
    UnsupportedMultiplicity(u32),
}

impl OrbitalOutcome {
    pub fn info(&self) -> Option<&OrbitalInfo> {
        match self {
            OrbitalOutcome::Found(info) => Some(info),
            _ => None,
        }
    }
}

/// 几何优化数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimisationData {
    pub converged: bool,

    /// 最后一次打印的几何结构 (Å)
    pub geometry: Vec<Atom>,
}

/// 振动频率数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyData {
    /// 频率 (cm⁻¹)，虚频为负值
    pub frequencies: Vec<f64>,
    pub imaginary_modes: usize,
}

/// 单个作业的解析结果
#[derive(Debug, Clone)]
pub struct ResultRecord {
    /// 日志文件路径
    pub path: PathBuf,

    /// 文件名
    pub file: String,

    /// 相对于扫描根目录的所在目录
    pub directory: String,

    pub program: Program,
    pub run_type: RunType,

    /// 计算是否正常结束
    pub completed: bool,

    pub method: Option<String>,
    pub basis: Option<String>,
    pub multiplicity: Option<u32>,
    pub energies: Energies,
    pub orbitals: OrbitalOutcome,

    /// 仅含优化的运行
    pub optimisation: Option<OptimisationData>,

    /// 仅含频率的运行
    pub frequencies: Option<FrequencyData>,
}
