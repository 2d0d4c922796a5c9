//! # 区段扫描器
//!
//! 通用的有状态扫描引擎：给定行序列、起始标记和若干终止标记，
//! 惰性地产出每个完整区段内的行。
//!
//! ## 策略
//! - `LastWins`: 终止前再次遇到起始标记时丢弃已累积的行，重新开始
//!   （用于几何结构，后打印的结构使先前未收敛的结构失效）
//! - `FirstOnly`: 第一个完整区段结束后停止扫描
//!
//! 文件结束时仍未终止的区段不会被产出：未终止意味着作业被截断或仍在运行，
//! 调用方应视为"未找到"。
//!
//! ## 依赖关系
//! - 被 `parsers/extract.rs`, `parsers/charges.rs` 使用
//! - 使用 `regex` crate

use regex::Regex;

/// 行匹配谓词
#[derive(Debug, Clone)]
pub enum Marker {
    /// 区分大小写的子串
    Contains(&'static str),
    /// 正则表达式
    Pattern(Regex),
    /// 空行（只含空白）
    Blank,
}

impl Marker {
    /// 由字面正则构造，表达式写错属于编程错误
    pub fn pattern(re: &str) -> Self {
        Marker::Pattern(Regex::new(re).unwrap())
    }

    pub fn matches(&self, line: &str) -> bool {
        match self {
            Marker::Contains(s) => line.contains(s),
            Marker::Pattern(re) => re.is_match(line),
            Marker::Blank => line.trim().is_empty(),
        }
    }
}

/// 区段重复出现时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionPolicy {
    LastWins,
    FirstOnly,
}

/// 区段扫描器配置
#[derive(Debug, Clone, Copy)]
pub struct SectionScanner<'m> {
    start: &'m Marker,
    stops: &'m [Marker],
    policy: SectionPolicy,
    include_markers: bool,
}

impl<'m> SectionScanner<'m> {
    pub fn new(start: &'m Marker, stops: &'m [Marker]) -> Self {
        SectionScanner {
            start,
            stops,
            policy: SectionPolicy::LastWins,
            include_markers: false,
        }
    }

    pub fn policy(mut self, policy: SectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 区段是否包含起止标记行本身
    pub fn include_markers(mut self, include: bool) -> Self {
        self.include_markers = include;
        self
    }

    /// 惰性扫描，产出每个完整区段
    pub fn scan<'a>(self, lines: &'a [String]) -> Sections<'a, 'm> {
        Sections {
            lines: lines.iter(),
            scanner: self,
            done: false,
        }
    }

    /// 最后一个完整区段
    pub fn last<'a>(self, lines: &'a [String]) -> Option<Vec<&'a str>> {
        self.scan(lines).last()
    }

    /// 第一个完整区段
    pub fn first<'a>(self, lines: &'a [String]) -> Option<Vec<&'a str>> {
        self.policy(SectionPolicy::FirstOnly).scan(lines).next()
    }

    fn is_stop(&self, line: &str) -> bool {
        self.stops.iter().any(|m| m.matches(line))
    }
}

/// 区段迭代器
pub struct Sections<'a, 'm> {
    lines: std::slice::Iter<'a, String>,
    scanner: SectionScanner<'m>,
    done: bool,
}

impl<'a, 'm> Iterator for Sections<'a, 'm> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut current: Option<Vec<&'a str>> = None;

        for line in self.lines.by_ref() {
            let line = line.as_str();

            // 起始标记优先：重新出现即丢弃未终止的区段
            if self.scanner.start.matches(line) {
                let mut group = Vec::new();
                if self.scanner.include_markers {
                    group.push(line);
                }
                current = Some(group);
                continue;
            }

            let Some(group) = current.as_mut() else {
                continue;
            };

            if self.scanner.is_stop(line) {
                if self.scanner.include_markers {
                    group.push(line);
                }
                if self.scanner.policy == SectionPolicy::FirstOnly {
                    self.done = true;
                }
                return current;
            }

            group.push(line);
        }

        self.done = true;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(String::from).collect()
    }

    #[test]
    fn test_last_wins_discards_unterminated_group() {
        let input = lines("START\na\nb\nc\nSTART\n1\n2\n3\n4\n5\nSTOP\ntrailing");
        let start = Marker::Contains("START");
        let stops = [Marker::Contains("STOP")];

        let groups: Vec<_> = SectionScanner::new(&start, &stops).scan(&input).collect();
        assert_eq!(groups, vec![vec!["1", "2", "3", "4", "5"]]);
    }

    #[test]
    fn test_multiple_complete_groups() {
        let input = lines("BEGIN\nx\nEND\nnoise\nBEGIN\ny\nz\nEND");
        let start = Marker::Contains("BEGIN");
        let stops = [Marker::Contains("END")];
        let scanner = SectionScanner::new(&start, &stops);

        assert_eq!(scanner.scan(&input).count(), 2);
        assert_eq!(scanner.last(&input), Some(vec!["y", "z"]));
        assert_eq!(scanner.first(&input), Some(vec!["x"]));
    }

    #[test]
    fn test_first_only_stops_scanning() {
        let input = lines("BEGIN\nx\nEND\nBEGIN\ny\nEND");
        let start = Marker::Contains("BEGIN");
        let stops = [Marker::Contains("END")];

        let groups: Vec<_> = SectionScanner::new(&start, &stops)
            .policy(SectionPolicy::FirstOnly)
            .scan(&input)
            .collect();
        assert_eq!(groups, vec![vec!["x"]]);
    }

    #[test]
    fn test_unterminated_section_not_found() {
        let input = lines("BEGIN\nx\ny");
        let start = Marker::Contains("BEGIN");
        let stops = [Marker::Contains("END")];

        assert!(SectionScanner::new(&start, &stops).last(&input).is_none());
    }

    #[test]
    fn test_include_markers_and_multiple_stops() {
        let input = lines("## table\nrow\n\nafter");
        let start = Marker::pattern(r"^##\s");
        let stops = [Marker::Contains("never"), Marker::Blank];

        let group = SectionScanner::new(&start, &stops)
            .include_markers(true)
            .first(&input)
            .unwrap();
        assert_eq!(group, vec!["## table", "row", ""]);
    }
}
