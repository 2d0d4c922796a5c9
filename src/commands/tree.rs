//! # tree 子命令实现
//!
//! 根据 xyz 文件名生成作业目录树：文件名按 `_` 拆分为逐级子目录，
//! xyz 复制到最深一级。
//!
//! ```text
//! files/c1mim_nh3.xyz  →  calcs/c1mim/nh3/c1mim_nh3.xyz
//!                         calcs/c1mim/nh3/frags/C5H9N2_0/C5H9N2_0.xyz   (--frags)
//!                         calcs/c1mim/nh3/opt/                          (--jobs-dirs opt)
//! ```
//!
//! 所有路径显式拼接，不改变进程工作目录。
//!
//! ## 依赖关系
//! - 使用 `cli/tree.rs` 定义的参数
//! - 使用 `parsers/xyz.rs`, `models/molecule.rs`
//! - 使用 `batch/collector.rs` 收集 xyz 文件

use crate::batch::FileCollector;
use crate::cli::tree::TreeArgs;
use crate::error::{QclogsError, Result};
use crate::parsers::xyz;
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};

/// 目录树生成选项
#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    pub frags: bool,
    pub jobs_dirs: Vec<String>,
    pub overwrite: bool,
}

/// 生成统计
#[derive(Debug, Default, PartialEq)]
pub struct TreeSummary {
    pub geometries: usize,
    pub fragments: usize,
    pub skipped: usize,
}

/// 执行 tree 命令
pub fn execute(args: TreeArgs) -> Result<()> {
    output::print_header("Building Job Directory Tree");

    if !args.input.is_dir() {
        return Err(QclogsError::DirectoryNotFound {
            path: args.input.display().to_string(),
        });
    }

    let options = TreeOptions {
        frags: args.frags,
        jobs_dirs: args.jobs_dirs.clone(),
        overwrite: args.overwrite,
    };
    let summary = build_tree(&args.input, &args.output, &options)?;

    output::print_separator();
    output::print_done(&format!(
        "{} geometries, {} fragments written under '{}' ({} skipped)",
        summary.geometries,
        summary.fragments,
        args.output.display(),
        summary.skipped
    ));
    Ok(())
}

/// xyz 文件名对应的目录
pub fn tree_dir(output: &Path, xyz_file: &Path) -> PathBuf {
    let stem = xyz_file
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    stem.split('_')
        .filter(|part| !part.is_empty())
        .fold(output.to_path_buf(), |dir, part| dir.join(part))
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| QclogsError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

fn create_job_dirs(dir: &Path, jobs_dirs: &[String]) -> Result<()> {
    for job in jobs_dirs.iter().filter(|j| !j.trim().is_empty()) {
        create_dir(&dir.join(job.trim()))?;
    }
    Ok(())
}

/// 为输入目录中的每个 xyz 生成目录并复制
pub fn build_tree(input: &Path, output: &Path, options: &TreeOptions) -> Result<TreeSummary> {
    let files = FileCollector::new(input.to_path_buf())
        .with_pattern("*.xyz")
        .recursive(false)
        .collect()?;

    if files.is_empty() {
        output::print_warning(&format!("No xyz files found in '{}'", input.display()));
    }

    let mut summary = TreeSummary::default();
    for file in &files {
        let dir = tree_dir(output, file);
        let Some(name) = file.file_name() else {
            continue;
        };
        let target = dir.join(name);

        if target.exists() && !options.overwrite {
            output::print_skip(&format!("{} exists", target.display()));
            summary.skipped += 1;
            continue;
        }

        create_dir(&dir)?;
        fs::copy(file, &target).map_err(|e| QclogsError::FileWriteError {
            path: target.display().to_string(),
            source: e,
        })?;
        create_job_dirs(&dir, &options.jobs_dirs)?;
        output::print_written(&file.display().to_string(), &target.display().to_string());
        summary.geometries += 1;

        if options.frags {
            summary.fragments += write_fragments(file, &dir, &options.jobs_dirs)?;
        }
    }

    Ok(summary)
}

/// 将每个分子片段写入 `frags/<名称>_<编号>/`
fn write_fragments(xyz_file: &Path, dir: &Path, jobs_dirs: &[String]) -> Result<usize> {
    let molecule = xyz::parse_xyz_file(xyz_file)?;
    let assignment = molecule.separate();

    for fragment in assignment.fragments() {
        let label = fragment.label();
        let frag_dir = dir.join("frags").join(&label);
        create_dir(&frag_dir)?;
        xyz::write_xyz_file(
            &frag_dir.join(format!("{}.xyz", label)),
            &molecule.fragment_atoms(fragment),
            &label,
        )?;
        create_job_dirs(&frag_dir, jobs_dirs)?;
    }

    output::print_info(&format!(
        "{}: {} split into {} fragments",
        xyz_file.display(),
        molecule.formula(),
        assignment.fragments().len()
    ));
    Ok(assignment.fragments().len())
}
