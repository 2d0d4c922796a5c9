//! # XYZ 格式读写
//!
//! ## XYZ 格式说明
//! ```text
//! 3                      # 原子数
//! water                  # 注释行
//! O  0.000  0.000  0.117 # 元素 x y z (Å)
//! H  0.000  0.757 -0.469
//! H  0.000 -0.757 -0.469
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/tree.rs`, `commands/results.rs` 使用
//! - 使用 `models/molecule.rs`

use crate::error::{QclogsError, Result};
use crate::models::{Atom, Molecule};
use std::fs;
use std::path::Path;

/// 读取 xyz 文件
pub fn parse_xyz_file(path: &Path) -> Result<Molecule> {
    let content = fs::read_to_string(path).map_err(|e| QclogsError::FileAccessError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_xyz_content(&content, &path.display().to_string())
}

/// 从字符串解析 xyz
pub fn parse_xyz_content(content: &str, name: &str) -> Result<Molecule> {
    let err = |reason: String| QclogsError::ParseError {
        format: "xyz".to_string(),
        path: name.to_string(),
        reason,
    };

    let mut lines = content.lines();
    let count: usize = lines
        .next()
        .and_then(|l| l.trim().parse().ok())
        .ok_or_else(|| err("Missing atom count".to_string()))?;
    // 注释行
    lines.next();

    let mut atoms = Vec::with_capacity(count);
    for (i, line) in lines.filter(|l| !l.trim().is_empty()).take(count).enumerate() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let coords: Vec<f64> = parts
            .iter()
            .skip(1)
            .take(3)
            .filter_map(|s| s.parse().ok())
            .collect();
        if parts.is_empty() || coords.len() < 3 {
            return Err(err(format!("Invalid atom line {}", i + 3)));
        }
        atoms.push(Atom::new(parts[0], [coords[0], coords[1], coords[2]]));
    }

    if atoms.len() != count {
        return Err(err(format!(
            "Expected {} atoms, found {}",
            count,
            atoms.len()
        )));
    }
    Ok(Molecule::new(atoms))
}

/// 生成 xyz 文本
pub fn to_xyz_string(atoms: &[Atom], comment: &str) -> String {
    let mut out = format!("{}\n{}\n", atoms.len(), comment);
    for atom in atoms {
        out.push_str(&format!(
            "{:<2} {:>14.8} {:>14.8} {:>14.8}\n",
            atom.element, atom.position[0], atom.position[1], atom.position[2]
        ));
    }
    out
}

/// 写出 xyz 文件
pub fn write_xyz_file(path: &Path, atoms: &[Atom], comment: &str) -> Result<()> {
    fs::write(path, to_xyz_string(atoms, comment)).map_err(|e| QclogsError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}
