//! # 各程序的标记表
//!
//! 每个量子化学程序一张声明式表：运行类型关键字、结束标志、
//! 字段规则（标记 + 取值方式）以及区段（起止标记 + 行模式）。
//! 提取器只依赖这张表，三个程序共用同一套提取流程。
//!
//! 标记字符串必须逐字节匹配且区分大小写，命令回显行除外（匹配关键字前转为小写）。
//!
//! ## 依赖关系
//! - 被 `parsers/extract.rs`, `parsers/runtype.rs`, `parsers/mod.rs` 使用
//! - 使用 `parsers/section.rs` 的 `Marker`

use super::section::Marker;
use crate::models::Program;
use regex::Regex;
use std::sync::LazyLock;

/// 从匹配行中取值的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// 按空白分割后的第 n 列
    Index(usize),
    /// 最后一列
    Last,
    /// 标记之后的第一列（跳过 `:` `=` 之类的分隔符）
    AfterMarker,
    /// 标记正则的第一个捕获组
    Capture,
}

/// 单值字段规则
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub marker: Marker,
    pub token: Token,
}

impl FieldRule {
    pub fn new(marker: Marker, token: Token) -> Self {
        FieldRule { marker, token }
    }

    /// 若该行匹配，取出对应的文本
    pub fn apply<'l>(&self, line: &'l str) -> Option<&'l str> {
        if !self.marker.matches(line) {
            return None;
        }
        match self.token {
            Token::Index(n) => line.split_whitespace().nth(n),
            Token::Last => line.split_whitespace().last(),
            Token::AfterMarker => {
                let rest = match &self.marker {
                    Marker::Contains(s) => line.find(s).map(|pos| &line[pos + s.len()..]),
                    Marker::Pattern(re) => re.find(line).map(|m| &line[m.end()..]),
                    Marker::Blank => None,
                }?;
                rest.split_whitespace()
                    .find(|tok| !tok.chars().all(|c| c == ':' || c == '='))
            }
            Token::Capture => match &self.marker {
                Marker::Pattern(re) => re
                    .captures(line)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str()),
                _ => None,
            },
        }
    }
}

/// 命令回显的范围
#[derive(Debug, Clone)]
pub enum EchoScope {
    /// 只取第一条回显行
    First,
    /// 从第一条回显行起拼接后续续行，直到出现结束标记（不区分大小写）
    UntilEnd {
        continuation: Marker,
        end: &'static str,
    },
    /// 拼接所有回显行
    All,
}

/// 区段规则：起止标记加上区段内有效行的模式
#[derive(Debug, Clone)]
pub struct SectionRule {
    pub start: Marker,
    pub stops: Vec<Marker>,
    pub row: Regex,
}

impl SectionRule {
    fn new(start: Marker, stops: Vec<Marker>, row: &str) -> Self {
        SectionRule {
            start,
            stops,
            row: Regex::new(row).unwrap(),
        }
    }
}

/// 一个程序的完整标记表
#[derive(Debug)]
pub struct MarkerTable {
    pub program: Program,

    /// 用于识别程序的标志行
    pub banner: Marker,

    /// 命令回显行
    pub command_echo: Marker,
    pub echo_scope: EchoScope,
    pub opt_keywords: &'static [&'static str],
    pub freq_keywords: &'static [&'static str],

    /// 正常结束标志
    pub termination: &'static str,

    /// 最终单点能所在的文件末尾比例
    pub final_energy_tail: f64,

    pub dft_method: Vec<FieldRule>,
    pub ab_initio_method: Vec<FieldRule>,
    pub basis: Vec<FieldRule>,
    pub multiplicity: Vec<FieldRule>,

    pub scf_total: Vec<FieldRule>,
    pub final_single_point: Vec<FieldRule>,
    pub hf_dft: Vec<FieldRule>,
    pub correlation: Vec<FieldRule>,
    pub mp2_opposite_spin: Vec<FieldRule>,
    pub mp2_same_spin: Vec<FieldRule>,
    pub srs_mp2: Vec<FieldRule>,

    /// 轨道能量表，行格式为 (编号, 占据数, Eh, eV)
    pub orbitals: Option<SectionRule>,

    pub converged: Option<Marker>,

    /// 坐标块，行模式的捕获组为 (元素, x, y, z)
    pub geometry: Option<SectionRule>,

    /// 振动频率表，行模式的捕获组为频率
    pub frequencies: Option<SectionRule>,
}

const PSI4_DRIVER: &str =
    r"(?:^|[=\s])(?:energy|optimize|opt|frequency|frequencies|freq|gradient|properties)\(";

pub static ORCA: LazyLock<MarkerTable> = LazyLock::new(|| {
    let scf_total = FieldRule::new(Marker::Contains("Total Energy       :"), Token::Index(3));
    MarkerTable {
        program: Program::Orca,
        banner: Marker::Contains("* O   R   C   A *"),
        command_echo: Marker::Contains("> !"),
        echo_scope: EchoScope::First,
        opt_keywords: &["opt"],
        freq_keywords: &["freq"],
        termination: "****ORCA TERMINATED NORMALLY****",
        final_energy_tail: 0.2,
        dft_method: vec![FieldRule::new(
            Marker::Contains("Exchange Functional    Exchange"),
            Token::Last,
        )],
        ab_initio_method: vec![FieldRule::new(
            Marker::Contains("Ab initio Hamiltonian  Method"),
            Token::Last,
        )],
        basis: vec![FieldRule::new(
            Marker::Contains("Your calculation utilizes the basis:"),
            Token::Last,
        )],
        multiplicity: vec![FieldRule::new(Marker::Contains("Multiplicity"), Token::Last)],
        scf_total: vec![scf_total.clone()],
        final_single_point: vec![FieldRule::new(
            Marker::Contains("FINAL SINGLE POINT ENERGY"),
            Token::Last,
        )],
        hf_dft: vec![scf_total],
        correlation: vec![FieldRule::new(
            Marker::Contains("MP2 CORRELATION ENERGY"),
            Token::AfterMarker,
        )],
        mp2_opposite_spin: vec![],
        mp2_same_spin: vec![],
        srs_mp2: vec![],
        orbitals: Some(SectionRule::new(
            Marker::Contains("ORBITAL ENERGIES"),
            vec![
                Marker::Contains("********"),
                Marker::Contains("POPULATION ANALYSIS"),
            ],
            r"^\s+[0-9]+(\s+-?[0-9]+.[0-9]+){3}",
        )),
        converged: Some(Marker::Contains("THE OPTIMIZATION HAS CONVERGED")),
        geometry: Some(SectionRule::new(
            Marker::Contains("CARTESIAN COORDINATES (ANGSTROEM)"),
            vec![Marker::Blank],
            r"^\s*([A-Z][a-z]?)\s+(-?\d+\.\d+)\s+(-?\d+\.\d+)\s+(-?\d+\.\d+)\s*$",
        )),
        frequencies: Some(SectionRule::new(
            Marker::Contains("VIBRATIONAL FREQUENCIES"),
            vec![Marker::Contains("NORMAL MODES")],
            r"^\s*\d+:\s+(-?\d+\.\d+)\s+cm\*\*-1",
        )),
    }
});

pub static GAMESS: LazyLock<MarkerTable> = LazyLock::new(|| {
    let final_scf = FieldRule::new(Marker::pattern(r"^\s*FINAL \S+ ENERGY IS"), Token::Index(4));
    MarkerTable {
        program: Program::Gamess,
        banner: Marker::Contains("GAMESS VERSION"),
        command_echo: Marker::pattern(r"(?i)INPUT CARD>\s*\$CONTRL"),
        // $CONTRL 组可以跨多张输入卡
        echo_scope: EchoScope::UntilEnd {
            continuation: Marker::Contains("INPUT CARD>"),
            end: "$end",
        },
        opt_keywords: &["runtyp=optimize"],
        freq_keywords: &["runtyp=hessian"],
        termination: "EXECUTION OF GAMESS TERMINATED NORMALLY",
        final_energy_tail: 0.5,
        dft_method: vec![FieldRule::new(Marker::pattern(r"DFTTYP=(\S+)"), Token::Capture)],
        ab_initio_method: vec![FieldRule::new(
            Marker::pattern(r"SCFTYP=(\S+)"),
            Token::Capture,
        )],
        basis: vec![FieldRule::new(Marker::pattern(r"GBASIS=(\S+)"), Token::Capture)],
        multiplicity: vec![FieldRule::new(
            Marker::Contains("SPIN MULTIPLICITY"),
            Token::Last,
        )],
        scf_total: vec![final_scf.clone()],
        final_single_point: vec![
            FieldRule::new(Marker::Contains("E(MP2)="), Token::AfterMarker),
            FieldRule::new(Marker::Contains("TOTAL ENERGY ="), Token::Last),
        ],
        hf_dft: vec![final_scf],
        correlation: vec![FieldRule::new(Marker::Contains("E(2)="), Token::AfterMarker)],
        mp2_opposite_spin: vec![FieldRule::new(
            Marker::Contains("OPPOSITE SPIN"),
            Token::AfterMarker,
        )],
        mp2_same_spin: vec![FieldRule::new(
            Marker::Contains("SAME SPIN"),
            Token::AfterMarker,
        )],
        srs_mp2: vec![FieldRule::new(
            Marker::pattern(r"E\(SRS-MP2\)\s*="),
            Token::AfterMarker,
        )],
        orbitals: None,
        converged: Some(Marker::Contains("EQUILIBRIUM GEOMETRY LOCATED")),
        geometry: Some(SectionRule::new(
            Marker::Contains("COORDINATES OF ALL ATOMS ARE (ANGS)"),
            vec![Marker::Blank],
            r"^\s*([A-Za-z]+)\d*\s+\d+\.\d+\s+(-?\d+\.\d+)\s+(-?\d+\.\d+)\s+(-?\d+\.\d+)\s*$",
        )),
        frequencies: None,
    }
});

pub static PSI4: LazyLock<MarkerTable> = LazyLock::new(|| {
    let final_scf = FieldRule::new(
        Marker::pattern(r"@\S*(?:RHF|UHF|ROHF|RKS|UKS) Final Energy:"),
        Token::Last,
    );
    MarkerTable {
        program: Program::Psi4,
        banner: Marker::Contains("Psi4: An Open-Source Ab Initio Electronic Structure Package"),
        command_echo: Marker::pattern(PSI4_DRIVER),
        // 优化加频率是两次驱动调用
        echo_scope: EchoScope::All,
        opt_keywords: &["optimize(", "opt("],
        freq_keywords: &["freq"],
        termination: "*** Psi4 exiting successfully.",
        final_energy_tail: 0.5,
        dft_method: vec![FieldRule::new(
            Marker::pattern(r"=> Composite Functional: (\S+) <="),
            Token::Capture,
        )],
        ab_initio_method: vec![FieldRule::new(
            Marker::pattern(&format!(r#"{}\s*['"]([^'"]+)['"]"#, PSI4_DRIVER)),
            Token::Capture,
        )],
        basis: vec![FieldRule::new(
            Marker::pattern(r"^\s*Basis Set: (\S+)"),
            Token::Capture,
        )],
        multiplicity: vec![FieldRule::new(
            Marker::pattern(r"^\s*Multiplicity = "),
            Token::Last,
        )],
        scf_total: vec![final_scf.clone()],
        final_single_point: vec![FieldRule::new(
            Marker::pattern(r"^\s*Total Energy\s+="),
            Token::AfterMarker,
        )],
        hf_dft: vec![final_scf],
        correlation: vec![FieldRule::new(
            Marker::pattern(r"^\s*Correlation Energy\s+="),
            Token::AfterMarker,
        )],
        mp2_opposite_spin: vec![FieldRule::new(
            Marker::pattern(r"^\s*Opposite-Spin Energy\s+="),
            Token::AfterMarker,
        )],
        mp2_same_spin: vec![FieldRule::new(
            Marker::pattern(r"^\s*Same-Spin Energy\s+="),
            Token::AfterMarker,
        )],
        srs_mp2: vec![],
        orbitals: None,
        converged: Some(Marker::Contains("Optimization is complete!")),
        geometry: Some(SectionRule::new(
            Marker::pattern(r"^\s*Center\s+X\s+Y\s+Z"),
            vec![Marker::Blank],
            r"^\s*([A-Z][a-z]?)\s+(-?\d+\.\d+)\s+(-?\d+\.\d+)\s+(-?\d+\.\d+)",
        )),
        frequencies: None,
    }
});

/// 获取程序对应的标记表
pub fn table(program: Program) -> &'static MarkerTable {
    match program {
        Program::Orca => &ORCA,
        Program::Gamess => &GAMESS,
        Program::Psi4 => &PSI4,
    }
}

/// 根据标志行识别日志所属程序
pub fn sniff_program(lines: &[String]) -> Option<Program> {
    let tables = [&*ORCA, &*GAMESS, &*PSI4];
    lines.iter().find_map(|line| {
        tables
            .iter()
            .find(|t| t.banner.matches(line))
            .map(|t| t.program)
    })
}
