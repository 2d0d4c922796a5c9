//! # 统一错误处理模块
//!
//! 定义 qclogs 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个日志文件的读取/解码/分类错误只影响该文件，批处理层会记录后继续；
//! 区段或字段缺失不是错误，而是以 `None` 表示。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// qclogs 统一错误类型
#[derive(Error, Debug)]
pub enum QclogsError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileAccessError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8 text: {path}")]
    DecodeError { path: String },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("No command echo found, cannot determine run type: {path}")]
    ClassificationError { path: String },

    #[error("Cannot identify the program that wrote: {path}")]
    UnknownProgram { path: String },

    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, QclogsError>;
