//! 对外提供的 Rust 调用接口

use anyhow::bail;
use log::info;

use crate::config::{ScoringCriteria, Target};
use crate::public_key::{KeyMaterial, parse_key_material};

/// 一种评分规则及其参数，与工厂函数一一对应
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Benchmark,
    Zeros,
    Gas,
    Letters,
    Numbers,
    Leading(char),
    Matching(String),
    TronPrefix(String),
    LeadingRange { min: u8, max: u8 },
    Range { min: u8, max: u8 },
    Mirror,
    Doubles,
}

impl Rule {
    /// 调用对应的工厂函数
    pub fn build(&self) -> ScoringCriteria {
        match self {
            Rule::Benchmark => ScoringCriteria::benchmark(),
            Rule::Zeros => ScoringCriteria::zeros(),
            Rule::Gas => ScoringCriteria::gas(),
            Rule::Letters => ScoringCriteria::letters(),
            Rule::Numbers => ScoringCriteria::numbers(),
            Rule::Leading(c) => ScoringCriteria::leading(*c),
            Rule::Matching(hex) => ScoringCriteria::matching(hex),
            Rule::TronPrefix(prefix) => ScoringCriteria::tron_prefix(prefix),
            Rule::LeadingRange { min, max } => ScoringCriteria::leading_range(*min, *max),
            Rule::Range { min, max } => ScoringCriteria::range(*min, *max),
            Rule::Mirror => ScoringCriteria::mirror(),
            Rule::Doubles => ScoringCriteria::doubles(),
        }
    }
}

/// 互斥的规则选择开关
///
/// 同时设置多个时按字段顺序取第一个。空字符串视为未设置。
#[derive(Debug, Clone, Default)]
pub struct RuleSelectors {
    pub benchmark: bool,
    pub zeros: bool,
    pub gas: bool,
    pub letters: bool,
    pub numbers: bool,
    pub leading: Option<String>,
    pub matching: Option<String>,
    pub tron: Option<String>,
    pub leading_range: bool,
    pub range: bool,
    pub mirror: bool,
    pub doubles: bool,
    pub min: u8,
    pub max: u8,
}

impl RuleSelectors {
    pub fn select(&self) -> Option<Rule> {
        let non_empty = |s: &Option<String>| s.clone().filter(|v| !v.is_empty());

        if self.benchmark {
            Some(Rule::Benchmark)
        } else if self.zeros {
            Some(Rule::Zeros)
        } else if self.gas {
            Some(Rule::Gas)
        } else if self.letters {
            Some(Rule::Letters)
        } else if self.numbers {
            Some(Rule::Numbers)
        } else if let Some(c) = non_empty(&self.leading).and_then(|s| s.chars().next()) {
            Some(Rule::Leading(c))
        } else if let Some(hex) = non_empty(&self.matching) {
            Some(Rule::Matching(hex))
        } else if let Some(prefix) = non_empty(&self.tron) {
            Some(Rule::TronPrefix(prefix))
        } else if self.leading_range {
            Some(Rule::LeadingRange {
                min: self.min,
                max: self.max,
            })
        } else if self.range {
            Some(Rule::Range {
                min: self.min,
                max: self.max,
            })
        } else if self.mirror {
            Some(Rule::Mirror)
        } else if self.doubles {
            Some(Rule::Doubles)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct CriteriaRequest {
    pub rule: Rule,
    pub target: Target,
    /// 公钥 (128 个十六进制字符) 或初始种子 (64 个)
    pub key: Option<String>,
}

impl CriteriaRequest {
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            target: Target::Address,
            key: None,
        }
    }
}

/// 编译完成、可以交给调度层的评分条件
#[derive(Debug, Clone)]
pub struct CompiledCriteria {
    pub criteria: ScoringCriteria,
    pub key: Option<KeyMaterial>,
}

/// 构建评分条件；规则输入非法时返回错误，调用方应以非零状态退出
pub fn compile(request: &CriteriaRequest) -> anyhow::Result<CompiledCriteria> {
    let criteria = request.rule.build();
    if criteria.is_error() {
        bail!("Init mode error: {}", criteria.name());
    }
    let criteria = criteria.with_target(request.target);

    info!("Mode: {}", criteria.name());
    info!("Target: {}", criteria.target().transform_name());

    let key = request
        .key
        .as_deref()
        .map(parse_key_material)
        .transpose()?;

    Ok(CompiledCriteria { criteria, key })
}
