//! 评分条件工厂
//!
//! 每种规则对应一个构造函数。`try_*` 版本返回 `Result`，
//! 不带前缀的版本在输入非法时返回 `kernel == ERROR` 的哨兵条件。

use log::debug;

use crate::base58::TRON;
use crate::config::{KernelId, ScoringCriteria};
use crate::encoding::{BOUND_LEN, BoundArrays, PredicateWriter, hex_value};
use crate::error::CriteriaError;

/// 匹配模式最多 40 个十六进制字符 (20 字节)
pub const MAX_MATCHING_CHARS: usize = BOUND_LEN * 2;

fn first_bytes(a: u8, b: u8) -> BoundArrays {
    let mut bounds = BoundArrays::default();
    bounds.a[0] = a;
    bounds.b[0] = b;
    bounds
}

impl ScoringCriteria {
    /// 不做任何约束，用于测速
    pub fn benchmark() -> Self {
        Self::new("benchmark", KernelId::Benchmark, BoundArrays::default())
    }

    /// 前导零，等价于 `range(0, 0)`
    pub fn zeros() -> Self {
        Self::range(0, 0).renamed("zeros")
    }

    pub fn gas() -> Self {
        Self::new("gas", KernelId::Gas, BoundArrays::default())
    }

    /// 前导半字节必须等于给定的十六进制字符
    pub fn leading(c: char) -> Self {
        Self::try_leading(c).unwrap_or_else(Self::from_error)
    }

    pub fn try_leading(c: char) -> Result<Self, CriteriaError> {
        let nibble = hex_value(c, 0)?;
        Ok(Self::new("leading", KernelId::Leading, first_bytes(nibble, 0)))
    }

    pub fn leading_range(min: u8, max: u8) -> Self {
        Self::new("leadingrange", KernelId::LeadingRange, first_bytes(min, max))
    }

    pub fn range(min: u8, max: u8) -> Self {
        Self::new("range", KernelId::Range, first_bytes(min, max))
    }

    /// 前导半字节是字母 a-f
    pub fn letters() -> Self {
        Self::range(10, 15).renamed("letters")
    }

    /// 前导半字节是数字 0-9
    pub fn numbers() -> Self {
        Self::range(0, 9).renamed("numbers")
    }

    /// 十六进制字面量前缀匹配
    ///
    /// 每两个字符占一个槽位；奇数长度时最后一个槽位只约束高半字节。
    pub fn matching(hex: &str) -> Self {
        Self::try_matching(hex).unwrap_or_else(Self::from_error)
    }

    pub fn try_matching(hex: &str) -> Result<Self, CriteriaError> {
        let chars: Vec<char> = hex.chars().collect();
        if chars.len() > MAX_MATCHING_CHARS {
            return Err(CriteriaError::PatternTooLong {
                len: chars.len(),
                max: MAX_MATCHING_CHARS,
            });
        }

        let mut writer = PredicateWriter::new();
        for (pair, digits) in chars.chunks(2).enumerate() {
            let index = pair * 2;
            let high = hex_value(digits[0], index)?;
            let low = match digits.get(1) {
                Some(&c) => Some(hex_value(c, index + 1)?),
                None => None,
            };
            writer.push_nibbles(high, low)?;
        }

        debug!("matching {}: {} slot(s)", hex, writer.len());
        Ok(Self::new("matching", KernelId::Matching, writer.finish()))
    }

    /// 地址字节构成回文
    pub fn mirror() -> Self {
        Self::new("mirror", KernelId::Mirror, BoundArrays::default())
    }

    /// 重复的前导字符
    pub fn doubles() -> Self {
        Self::new("doubles", KernelId::Doubles, BoundArrays::default())
    }

    /// TRON Base58 地址前缀，如 `TVanity`
    pub fn tron_prefix(prefix: &str) -> Self {
        Self::try_tron_prefix(prefix).unwrap_or_else(Self::from_error)
    }

    pub fn try_tron_prefix(prefix: &str) -> Result<Self, CriteriaError> {
        let bounds = TRON.prefix_predicate(prefix)?;
        Ok(Self::new("tron_prefix", KernelId::TronPrefix, bounds))
    }

    fn renamed(self, name: &str) -> Self {
        Self::new(name, self.kernel(), *self.bounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_leading() {
        let criteria = ScoringCriteria::leading('a');
        assert_eq!(criteria.bound_a()[0], 10);
        assert_eq!(criteria.kernel().as_str(), "profanity_score_leading");
        assert_eq!(criteria.name(), "leading");

        assert_eq!(ScoringCriteria::leading('F').bound_a()[0], 15);
    }

    #[test]
    fn test_leading_invalid() {
        let criteria = ScoringCriteria::leading('g');
        assert!(criteria.is_error());
        assert!(criteria.name().contains("'g'"));
        assert_eq!(criteria.bound_a(), &[0u8; 20]);
    }

    #[test]
    fn test_range_family() {
        let letters = ScoringCriteria::letters();
        assert_eq!((letters.bound_a()[0], letters.bound_b()[0]), (10, 15));
        assert_eq!(letters.kernel(), KernelId::Range);
        assert_eq!(letters.name(), "letters");

        let numbers = ScoringCriteria::numbers();
        assert_eq!((numbers.bound_a()[0], numbers.bound_b()[0]), (0, 9));
        assert_eq!(numbers.name(), "numbers");

        let zeros = ScoringCriteria::zeros();
        assert_eq!(zeros.bounds(), ScoringCriteria::range(0, 0).bounds());
        assert_eq!(zeros.kernel(), KernelId::Range);
        assert_eq!(zeros.name(), "zeros");

        let leading_range = ScoringCriteria::leading_range(3, 7);
        assert_eq!(leading_range.kernel().as_str(), "profanity_score_leadingrange");
        assert_eq!(
            (leading_range.bound_a()[0], leading_range.bound_b()[0]),
            (3, 7)
        );
    }

    #[test]
    fn test_matching_pairs() {
        let criteria = ScoringCriteria::matching("ab");
        assert_eq!(criteria.bound_a()[0], 0xFF);
        assert_eq!(criteria.bound_b()[0], 0xAB);
        assert_eq!(criteria.bound_a()[1], 0);

        let criteria = ScoringCriteria::matching("a");
        assert_eq!(criteria.bound_a()[0], 0xF0);
        assert_eq!(criteria.bound_b()[0], 0xA0);
    }

    #[test]
    fn test_matching_limits() {
        let empty = ScoringCriteria::matching("");
        assert!(!empty.is_error());
        assert_eq!(empty.bound_a(), &[0u8; 20]);

        let full = ScoringCriteria::matching(&"f".repeat(40));
        assert_eq!(full.bound_a(), &[0xFF; 20]);

        let too_long = ScoringCriteria::matching(&"0".repeat(41));
        assert!(too_long.is_error());
    }

    #[test]
    fn test_matching_invalid_char() {
        assert_eq!(
            ScoringCriteria::try_matching("12x4"),
            Err(CriteriaError::InvalidHexCharacter {
                character: 'x',
                index: 2
            })
        );
        assert!(ScoringCriteria::matching("0xab").is_error());
    }

    #[test]
    fn test_unconstrained_rules() {
        for (criteria, kernel) in [
            (ScoringCriteria::benchmark(), "profanity_score_benchmark"),
            (ScoringCriteria::gas(), "profanity_score_gas"),
            (ScoringCriteria::mirror(), "profanity_score_mirror"),
            (ScoringCriteria::doubles(), "profanity_score_doubles"),
        ] {
            assert_eq!(criteria.kernel().as_str(), kernel);
            assert_eq!(criteria.bounds(), &BoundArrays::default());
            assert_eq!(criteria.score, 0);
        }
    }

    #[test]
    fn test_tron_prefix() {
        let criteria = ScoringCriteria::tron_prefix("TRX");
        assert_eq!(criteria.kernel(), KernelId::TronPrefix);
        assert_eq!(criteria.name(), "tron_prefix");
        assert_eq!(&criteria.bound_a()[..3], &[0xFFu8, 0xBD, 0x00]);
        assert_eq!(&criteria.bound_b()[..3], &[0xAAu8, 0x8D, 0x00]);

        assert!(ScoringCriteria::tron_prefix("").is_error());
        assert!(ScoringCriteria::tron_prefix("ABC").is_error());
    }
}
