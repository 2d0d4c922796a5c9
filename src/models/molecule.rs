//! # 分子结构数据模型
//!
//! 笛卡尔坐标表示的原子与分子，以及按共价键连通性划分的分子片段。
//!
//! ## 片段划分
//! 两原子间距小于共价半径之和加 0.4 Å 即视为成键；连通分量即为片段，
//! 片段编号按其最小原子序号排序，名称为 Hill 顺序的化学式。
//!
//! ## 依赖关系
//! - 被 `parsers/xyz.rs`, `parsers/charges.rs`, `parsers/extract.rs` 使用
//! - 被 `commands/tree.rs` 使用

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::LazyLock;

/// 成键判据的额外容差 (Å)
pub const BOND_TOLERANCE: f64 = 0.4;

/// 未收录元素使用的共价半径 (Å)
const DEFAULT_RADIUS: f64 = 1.50;

/// 共价半径 (Å), Cordero et al. 2008
pub static COVALENT_RADII: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        ("H", 0.31),
        ("He", 0.28),
        ("Li", 1.28),
        ("Be", 0.96),
        ("B", 0.84),
        ("C", 0.76),
        ("N", 0.71),
        ("O", 0.66),
        ("F", 0.57),
        ("Ne", 0.58),
        ("Na", 1.66),
        ("Mg", 1.41),
        ("Al", 1.21),
        ("Si", 1.11),
        ("P", 1.07),
        ("S", 1.05),
        ("Cl", 1.02),
        ("Ar", 1.06),
        ("K", 2.03),
        ("Ca", 1.76),
        ("Fe", 1.32),
        ("Cu", 1.32),
        ("Zn", 1.22),
        ("Ga", 1.22),
        ("Ge", 1.20),
        ("As", 1.19),
        ("Se", 1.20),
        ("Br", 1.20),
        ("Kr", 1.16),
        ("Rb", 2.20),
        ("Sr", 1.95),
        ("I", 1.39),
        ("Xe", 1.40),
        ("Cs", 2.44),
    ])
});

/// 原子信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// 元素符号
    pub element: String,

    /// 笛卡尔坐标 [x, y, z] (Å)
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Atom {
            element: element.into(),
            position,
        }
    }

    pub fn distance(&self, other: &Atom) -> f64 {
        self.position
            .iter()
            .zip(other.position.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    pub fn covalent_radius(&self) -> f64 {
        COVALENT_RADII
            .get(self.element.as_str())
            .copied()
            .unwrap_or(DEFAULT_RADIUS)
    }

    /// 两原子是否成键
    pub fn is_bonded(&self, other: &Atom) -> bool {
        self.distance(other) < self.covalent_radius() + other.covalent_radius() + BOND_TOLERANCE
    }
}

/// 分子片段
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub id: usize,
    pub name: String,
    /// 原子序号（从 0 开始）
    pub atoms: Vec<usize>,
}

impl Fragment {
    /// `<名称>_<编号>`，用于输出表格和目录名
    pub fn label(&self) -> String {
        format!("{}_{}", self.name, self.id)
    }
}

/// 原子到片段的映射，构建后只读
#[derive(Debug, Clone)]
pub struct FragmentAssignment {
    per_atom: Vec<usize>,
    fragments: Vec<Fragment>,
}

impl FragmentAssignment {
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// 原子所属片段
    pub fn fragment_of(&self, atom_index: usize) -> Option<&Fragment> {
        self.per_atom
            .get(atom_index)
            .and_then(|&id| self.fragments.get(id))
    }
}

/// 分子（或分子簇）
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Molecule { atoms }
    }

    /// Hill 顺序化学式
    pub fn formula(&self) -> String {
        hill_formula(self.atoms.iter().map(|a| a.element.as_str()))
    }

    /// 按连通性划分片段
    pub fn separate(&self) -> FragmentAssignment {
        let n = self.atoms.len();
        let mut per_atom = vec![usize::MAX; n];
        let mut fragments = Vec::new();

        for seed in 0..n {
            if per_atom[seed] != usize::MAX {
                continue;
            }
            let id = fragments.len();
            per_atom[seed] = id;

            let mut members = vec![seed];
            let mut queue = VecDeque::from([seed]);
            while let Some(i) = queue.pop_front() {
                for j in 0..n {
                    if per_atom[j] == usize::MAX && self.atoms[i].is_bonded(&self.atoms[j]) {
                        per_atom[j] = id;
                        members.push(j);
                        queue.push_back(j);
                    }
                }
            }
            members.sort_unstable();

            let name = hill_formula(members.iter().map(|&i| self.atoms[i].element.as_str()));
            fragments.push(Fragment {
                id,
                name,
                atoms: members,
            });
        }

        FragmentAssignment {
            per_atom,
            fragments,
        }
    }

    /// 取出一个片段的原子
    pub fn fragment_atoms(&self, fragment: &Fragment) -> Vec<Atom> {
        fragment
            .atoms
            .iter()
            .filter_map(|&i| self.atoms.get(i).cloned())
            .collect()
    }
}

/// Hill 顺序：有 C 时 C、H 在前，其余按字母顺序
fn hill_formula<'a>(elements: impl Iterator<Item = &'a str>) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for el in elements {
        *counts.entry(el).or_insert(0) += 1;
    }

    let mut ordered: Vec<(&str, usize)> = Vec::with_capacity(counts.len());
    if let Some(c) = counts.remove("C") {
        ordered.push(("C", c));
        if let Some(h) = counts.remove("H") {
            ordered.push(("H", h));
        }
    }
    ordered.extend(counts);

    ordered
        .into_iter()
        .map(|(el, count)| {
            if count == 1 {
                el.to_string()
            } else {
                format!("{}{}", el, count)
            }
        })
        .collect::<Vec<_>>()
        .join("")
}
