//! GPU 靓号地址搜索 - 评分条件编译
//!
//! 把用户指定的匹配规则 (前导字符、数值范围、十六进制模式、TRON Base58 前缀、
//! 回文、重复字符等) 编译成定长的字节谓词，供 OpenCL 评分内核逐个候选地址
//! 以 O(1) 代价检查。

pub mod api;
pub mod base58;
pub mod config;
pub mod criteria;
pub mod encoding;
pub mod error;
pub mod public_key;

pub use api::{CompiledCriteria, CriteriaRequest, Rule, RuleSelectors, compile};
pub use base58::{Base58Chain, Base58Codec, Base58Error, PrefixBounds, TRON};
pub use config::{KernelId, KernelPayload, ScoringCriteria, Target};
pub use encoding::{BOUND_LEN, BoundArrays, PredicateWriter};
pub use error::CriteriaError;
pub use public_key::{KeyMaterial, Uint256Lanes, parse_key_material};
