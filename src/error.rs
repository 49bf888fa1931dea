//! 评分条件构建过程中的错误类型

use thiserror::Error;

use crate::base58::Base58Error;

/// 构建 `ScoringCriteria` 时可能出现的输入校验错误
///
/// 这些错误都来自用户输入，是可恢复的：工厂函数会把它们转换成
/// `kernel == ERROR` 的哨兵条件返回给调用方，而不是 panic。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    /// 非法的十六进制字符
    #[error("bad hex value '{character}' at index {index}")]
    InvalidHexCharacter { character: char, index: usize },

    /// 匹配模式超过 20 字节 (40 个十六进制字符)
    #[error("matching pattern is {len} characters long, at most {max} allowed")]
    PatternTooLong { len: usize, max: usize },

    /// 前缀长度不在 [1, 34] 范围内
    #[error("prefix wrong format: length {len} not in [1, {max}]")]
    PrefixLength { len: usize, max: usize },

    /// 前缀首字符不是链地址的固定首字符
    #[error("prefix wrong format: must start with '{expected}', got '{found}'")]
    WrongLeadCharacter { expected: char, found: char },

    /// Base58 解码失败
    #[error("Fail to Decode Base58: {candidate}: {source}")]
    Base58 {
        candidate: String,
        #[source]
        source: Base58Error,
    },

    /// 谓词槽位写满
    #[error("predicate has no free slot (capacity {capacity})")]
    SlotOverflow { capacity: usize },

    /// 未知的评分内核标识
    #[error("unknown scoring kernel: {0}")]
    UnknownKernel(String),

    /// 公钥/初始种子格式错误
    #[error(
        "key material must be 128 hex characters (public key) or 64 (initial seed), got {len}"
    )]
    KeyMaterialLength { len: usize },

    /// 公钥/初始种子中包含非十六进制内容
    #[error("key material is not valid hex: {0}")]
    KeyMaterialHex(String),
}
