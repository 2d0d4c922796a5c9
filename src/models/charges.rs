//! # 原子电荷数据模型
//!
//! Hirshfeld / CM5 电荷表中的一行，附带重建坐标和所属片段。
//!
//! ## 依赖关系
//! - 被 `parsers/charges.rs` 使用
//! - 被 `commands/charges.rs` 使用

use serde::{Deserialize, Serialize};

/// 电荷表中一个原子的数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomCharge {
    /// 原子序号（日志中的编号）
    pub index: usize,
    pub element: String,
    pub hirshfeld: f64,

    /// 原子偶极分量
    pub dipole: [f64; 3],
    pub cm5: f64,
}

/// 带坐标与片段信息的电荷记录
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeRecord {
    pub charge: AtomCharge,

    /// 输入文件中的坐标 (Å)
    pub position: [f64; 3],

    /// `<片段名>_<片段编号>`
    pub molecule: String,
}
