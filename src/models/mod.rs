//! # 数据模型模块
//!
//! 定义日志解析结果、分子结构和原子电荷的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 子模块: result, molecule, charges

pub mod charges;
pub mod molecule;
pub mod result;

pub use charges::{AtomCharge, ChargeRecord};
pub use molecule::{Atom, Molecule};
pub use result::{
    Energies, FrequencyData, OptimisationData, OrbitalInfo, OrbitalOutcome, Program,
    ResultRecord, RunType, Transition,
};
