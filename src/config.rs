//! 评分条件和传给 GPU 的数据结构定义

use byteorder::{ByteOrder, LittleEndian};
use std::fmt;
use std::str::FromStr;

use crate::encoding::{BOUND_LEN, BoundArrays};
use crate::error::CriteriaError;

/// 评分内核标识
///
/// 调度层按字符串精确匹配选择 OpenCL 评分内核。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelId {
    Benchmark,
    Range,
    Gas,
    Leading,
    Matching,
    TronPrefix,
    LeadingRange,
    Mirror,
    Doubles,
    /// 构建失败的哨兵值
    Error,
}

impl KernelId {
    pub const ALL: [KernelId; 10] = [
        KernelId::Benchmark,
        KernelId::Range,
        KernelId::Gas,
        KernelId::Leading,
        KernelId::Matching,
        KernelId::TronPrefix,
        KernelId::LeadingRange,
        KernelId::Mirror,
        KernelId::Doubles,
        KernelId::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KernelId::Benchmark => "profanity_score_benchmark",
            KernelId::Range => "profanity_score_range",
            KernelId::Gas => "profanity_score_gas",
            KernelId::Leading => "profanity_score_leading",
            KernelId::Matching => "profanity_score_matching",
            KernelId::TronPrefix => "profanity_score_tron_prefix",
            KernelId::LeadingRange => "profanity_score_leadingrange",
            KernelId::Mirror => "profanity_score_mirror",
            KernelId::Doubles => "profanity_score_doubles",
            KernelId::Error => "ERROR",
        }
    }
}

impl fmt::Display for KernelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KernelId {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KernelId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CriteriaError::UnknownKernel(s.to_string()))
    }
}

/// 评分前对地址做的变换
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// 普通地址
    #[default]
    Address = 0,
    /// 合约地址 (由部署者地址派生)
    Contract = 1,
}

impl Target {
    /// 变换内核名称，普通地址不需要变换
    pub fn transform_kernel(self) -> Option<&'static str> {
        match self {
            Target::Address => None,
            Target::Contract => Some("profanity_transform_contract"),
        }
    }

    /// 显示名称
    pub fn transform_name(self) -> &'static str {
        match self {
            Target::Address => "Address",
            Target::Contract => "Contract",
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// 编译后的评分条件
///
/// 启动时由工厂函数构建一次，之后只有 `score` 会被调度层修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringCriteria {
    name: String,
    kernel: KernelId,
    bounds: BoundArrays,
    target: Target,
    /// 主机端记录的当前最高分，评分条件本身不读取
    pub score: u64,
}

impl ScoringCriteria {
    pub(crate) fn new(name: &str, kernel: KernelId, bounds: BoundArrays) -> Self {
        Self {
            name: name.to_string(),
            kernel,
            bounds,
            target: Target::default(),
            score: 0,
        }
    }

    /// 构建失败的哨兵条件，`name` 保存错误信息
    pub fn from_error(err: CriteriaError) -> Self {
        log::warn!("scoring criteria rejected: {}", err);
        Self::new(&err.to_string(), KernelId::Error, BoundArrays::default())
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// 规则名称；构建失败时为错误信息
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kernel(&self) -> KernelId {
        self.kernel
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn is_error(&self) -> bool {
        self.kernel == KernelId::Error
    }

    /// 第一组边界数组 (掩码或下界)
    pub fn bound_a(&self) -> &[u8; BOUND_LEN] {
        &self.bounds.a
    }

    /// 第二组边界数组 (期望值或上界)
    pub fn bound_b(&self) -> &[u8; BOUND_LEN] {
        &self.bounds.b
    }

    pub fn bounds(&self) -> &BoundArrays {
        &self.bounds
    }

    /// 哨兵条件转换为错误信息，正常条件原样返回
    pub fn into_result(self) -> Result<Self, String> {
        if self.is_error() {
            Err(self.name)
        } else {
            Ok(self)
        }
    }

    /// 生成传给 GPU 的参数块
    pub fn payload(&self) -> KernelPayload {
        KernelPayload {
            bound_a: self.bounds.a,
            bound_b: self.bounds.b,
            target: self.target.as_u8(),
            _padding: [0; 7],
            score: self.score,
        }
    }
}

/// 评分参数块 (传递给 GPU)
///
/// OpenCL 布局: bound_a[20] @0, bound_b[20] @20, target @40, _padding[7] @41, score @48
/// 总大小: 56 bytes
#[repr(C, align(8))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelPayload {
    /// 对应 OpenCL uchar[20]
    pub bound_a: [u8; BOUND_LEN],
    /// 对应 OpenCL uchar[20]
    pub bound_b: [u8; BOUND_LEN],
    /// 对应 OpenCL uchar
    pub target: u8,
    pub _padding: [u8; 7],
    /// 对应 OpenCL ulong
    pub score: u64,
}

impl KernelPayload {
    pub const SIZE: usize = 56;

    /// 按 OpenCL 设备的小端布局序列化
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..20].copy_from_slice(&self.bound_a);
        out[20..40].copy_from_slice(&self.bound_b);
        out[40] = self.target;
        LittleEndian::write_u64(&mut out[48..56], self.score);
        out
    }
}
