//! # 运行类型分类
//!
//! 从作业的命令回显行（ORCA 的 `! ...`、GAMESS 的 `$CONTRL`、Psi4 的驱动函数调用）
//! 判断运行类型。回显行转为小写后，分别检查优化关键字和频率关键字。
//!
//! 找不到回显行时返回 `ClassificationError`，不猜测默认值：
//! 后续字段的取舍依赖运行类型。
//!
//! ## 依赖关系
//! - 被 `parsers/record.rs` 使用
//! - 使用 `parsers/markers.rs`, `parsers/log_file.rs`

use super::log_file::LogFile;
use super::markers::{EchoScope, MarkerTable};
use crate::error::{QclogsError, Result};
use crate::models::RunType;

/// 命令回显（已转为小写），多行时以空格拼接
pub fn command_echo(log: &LogFile, markers: &MarkerTable) -> Option<String> {
    let lines = log.lines();
    let start = lines
        .iter()
        .position(|line| markers.command_echo.matches(line))?;

    let echo = match &markers.echo_scope {
        EchoScope::First => lines[start].clone(),
        EchoScope::All => lines[start..]
            .iter()
            .filter(|line| markers.command_echo.matches(line))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" "),
        EchoScope::UntilEnd { continuation, end } => {
            let mut cards = vec![lines[start].as_str()];
            if !lines[start].to_lowercase().contains(*end) {
                for line in lines[start + 1..]
                    .iter()
                    .take_while(|line| continuation.matches(line))
                {
                    cards.push(line);
                    if line.to_lowercase().contains(*end) {
                        break;
                    }
                }
            }
            cards.join(" ")
        }
    };
    Some(echo.to_lowercase())
}

/// 由回显行内容分类
pub fn classify_echo(echo: &str, markers: &MarkerTable) -> RunType {
    let echo = echo.to_lowercase();
    let opt = markers.opt_keywords.iter().any(|k| echo.contains(k));
    let freq = markers.freq_keywords.iter().any(|k| echo.contains(k));
    RunType::from_flags(opt, freq)
}

/// 判断日志的运行类型
pub fn classify(log: &LogFile, markers: &MarkerTable) -> Result<RunType> {
    let echo = command_echo(log, markers).ok_or_else(|| QclogsError::ClassificationError {
        path: log.path().display().to_string(),
    })?;
    Ok(classify_echo(&echo, markers))
}
