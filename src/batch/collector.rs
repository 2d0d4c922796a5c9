//! # 文件收集器
//!
//! 根据输入路径和模式收集待解析的日志文件。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - 逗号分隔的多个 glob 模式，匹配文件名
//! - 递归目录搜索，结果按路径排序
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配模式

use crate::error::{QclogsError, Result};

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
    /// 原始模式字符串
    pattern: String,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            pattern: "*".to_string(),
            recursive: true,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 扫描根目录：目录输入为其本身，单文件输入为其父目录
    pub fn root(&self) -> PathBuf {
        if self.input.is_file() {
            self.input
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default()
        } else {
            self.input.clone()
        }
    }

    fn patterns(&self) -> Result<Vec<Pattern>> {
        let patterns: Vec<Pattern> = self
            .pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                Pattern::new(s).map_err(|e| {
                    QclogsError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<_>>()?;

        if patterns.is_empty() {
            return Ok(vec![Pattern::new("*").map_err(|e| {
                QclogsError::InvalidArgument(e.to_string())
            })?]);
        }
        Ok(patterns)
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if self.input.is_file() {
            return Ok(vec![self.input.clone()]);
        }

        if !self.input.is_dir() {
            return Err(QclogsError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        let patterns = self.patterns()?;
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .is_some_and(|name| patterns.iter().any(|p| p.matches(name)))
            })
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_with_patterns() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("c1mim").join("opt");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("a.out"), "").unwrap();
        fs::write(nested.join("b.log"), "").unwrap();
        fs::write(nested.join("b.inp"), "").unwrap();

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("*.out, *.log")
            .collect()
            .unwrap();
        assert_eq!(files, vec![dir.path().join("a.out"), nested.join("b.log")]);

        let shallow = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("*.out,*.log")
            .recursive(false)
            .collect()
            .unwrap();
        assert_eq!(shallow.len(), 1);
    }

    #[test]
    fn test_single_file_and_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("x.out");
        fs::write(&file, "").unwrap();

        let collector = FileCollector::new(file.clone());
        assert_eq!(collector.collect().unwrap(), vec![file]);
        assert_eq!(collector.root(), dir.path());

        let missing = FileCollector::new(dir.path().join("nope"));
        assert!(matches!(
            missing.collect(),
            Err(QclogsError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("[*.out")
            .collect()
            .unwrap_err();
        assert!(matches!(err, QclogsError::InvalidArgument(_)));
    }
}
