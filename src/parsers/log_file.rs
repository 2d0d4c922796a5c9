//! # 日志文件行源
//!
//! 将日志文件整体读入为有序的行序列，并提供"文件末尾若干比例"的扫描，
//! 用于只会出现在文件末尾的标记（正常结束标志、最终能量等）。
//!
//! 末尾比例按字节大小计算而非行数：返回与最后 `fraction` 字节区间
//! 有重叠的所有行。
//!
//! ## 依赖关系
//! - 被 `parsers/` 下所有提取器使用

use crate::error::{QclogsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 只读的日志行序列
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
    lines: Vec<String>,
    /// 每行（含换行符）结束处的字节偏移
    line_ends: Vec<usize>,
    byte_len: usize,
}

impl LogFile {
    /// 读取日志文件
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| QclogsError::FileAccessError {
            path: path.display().to_string(),
            source: e,
        })?;
        let content = String::from_utf8(bytes).map_err(|_| QclogsError::DecodeError {
            path: path.display().to_string(),
        })?;
        Ok(Self::from_content(path, &content))
    }

    /// 从内存中的文本构造
    pub fn from_content(path: impl AsRef<Path>, content: &str) -> Self {
        let mut lines = Vec::new();
        let mut line_ends = Vec::new();
        let mut offset = 0;

        for raw in content.split_inclusive('\n') {
            offset += raw.len();
            let line = raw.strip_suffix('\n').unwrap_or(raw);
            let line = line.strip_suffix('\r').unwrap_or(line);
            lines.push(line.to_string());
            line_ends.push(offset);
        }

        LogFile {
            path: path.as_ref().to_path_buf(),
            lines,
            line_ends,
            byte_len: content.len(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 文件名
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// 全部行
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 与文件最后 `fraction` 字节重叠的行
    pub fn tail(&self, fraction: f64) -> &[String] {
        let fraction = fraction.clamp(0.0, 1.0);
        let tail_bytes = (self.byte_len as f64 * fraction).ceil() as usize;
        if tail_bytes == 0 {
            return &[];
        }
        let cutoff = self.byte_len - tail_bytes.min(self.byte_len);
        let start = self.line_ends.partition_point(|&end| end <= cutoff);
        &self.lines[start..]
    }
}
