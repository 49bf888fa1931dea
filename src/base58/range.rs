//! Base58 地址前缀到字节区间的转换
//!
//! 一个文本前缀对应一段连续的地址数值区间:
//! - 下界: 前缀右侧用字母表最小字符补齐到 34 位
//! - 上界: 同一补齐串，把前缀最后一个字符的编码加一 (不做进位)
//!
//! 两个边界解码后去掉版本字节，逐字节比较 20 字节载荷:
//! 相同的字节生成相等槽位，第一个不同的字节生成一个范围槽位后停止。

use log::debug;

use super::codec::Base58Codec;
use crate::encoding::{BOUND_LEN, BoundArrays, PredicateWriter};
use crate::error::CriteriaError;

/// Base58 地址文本长度
pub const ADDRESS_CHARS: usize = 34;

/// 解码后的地址字节数: 版本字节 + 20 字节载荷 + 4 字节校验和
pub const ADDRESS_BYTES: usize = 25;

const PAYLOAD_OFFSET: usize = 1;

/// 使用 34 字符 / 25 字节地址格式的链参数
#[derive(Debug, Clone, Copy)]
pub struct Base58Chain {
    /// 链名称 (用于日志)
    pub name: &'static str,
    /// 地址固定首字符，由版本字节决定
    pub lead: char,
    /// 字母表中数值最小的字符
    pub zero_digit: u8,
    pub codec: Base58Codec,
}

/// TRON 主网: 版本字节 0x41，地址以 'T' 开头
pub const TRON: Base58Chain = Base58Chain {
    name: "tron",
    lead: 'T',
    zero_digit: b'1',
    codec: Base58Codec::BITCOIN,
};

/// 前缀对应的最小/最大候选地址
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixBounds {
    pub lowest: [u8; ADDRESS_BYTES],
    pub highest: [u8; ADDRESS_BYTES],
}

impl Base58Chain {
    /// 计算前缀对应的最小和最大候选地址
    pub fn prefix_bounds(&self, prefix: &str) -> Result<PrefixBounds, CriteriaError> {
        let len = prefix.chars().count();
        if !(1..=ADDRESS_CHARS).contains(&len) {
            return Err(CriteriaError::PrefixLength {
                len,
                max: ADDRESS_CHARS,
            });
        }

        let first = prefix.chars().next().unwrap_or_default();
        if first != self.lead {
            return Err(CriteriaError::WrongLeadCharacter {
                expected: self.lead,
                found: first,
            });
        }

        // 非 ASCII 字符不可能出现在 Base58 字母表中
        if let Some((index, character)) = prefix.char_indices().find(|(_, c)| !c.is_ascii()) {
            return Err(CriteriaError::Base58 {
                candidate: prefix.to_string(),
                source: super::Base58Error::InvalidCharacter { character, index },
            });
        }

        let mut padded = [self.zero_digit; ADDRESS_CHARS];
        padded[..len].copy_from_slice(prefix.as_bytes());
        let lowest = self.decode_candidate(&padded)?;

        let last = len - 1;
        padded[last] = padded[last].wrapping_add(1);
        let highest = self.decode_candidate(&padded)?;

        debug!("{} prefix {} lo: 0x{}", self.name, prefix, hex::encode(lowest));
        debug!("{} prefix {} hi: 0x{}", self.name, prefix, hex::encode(highest));

        Ok(PrefixBounds { lowest, highest })
    }

    /// 把前缀编译为顺序比较的谓词数组
    ///
    /// 掩码 `0xFF` 的槽位要求字节相等；其他槽位要求 `value <= byte < mask`。
    pub fn prefix_predicate(&self, prefix: &str) -> Result<BoundArrays, CriteriaError> {
        self.prefix_bounds(prefix)?.collapse()
    }

    fn decode_candidate(
        &self,
        padded: &[u8; ADDRESS_CHARS],
    ) -> Result<[u8; ADDRESS_BYTES], CriteriaError> {
        self.codec
            .decode::<ADDRESS_BYTES>(padded)
            .map_err(|source| CriteriaError::Base58 {
                candidate: String::from_utf8_lossy(padded).into_owned(),
                source,
            })
    }
}

impl PrefixBounds {
    /// 下界的 20 字节载荷 (去掉版本字节)
    pub fn low_payload(&self) -> &[u8] {
        &self.lowest[PAYLOAD_OFFSET..PAYLOAD_OFFSET + BOUND_LEN]
    }

    /// 上界的 20 字节载荷 (去掉版本字节)
    pub fn high_payload(&self) -> &[u8] {
        &self.highest[PAYLOAD_OFFSET..PAYLOAD_OFFSET + BOUND_LEN]
    }

    /// 逐字节扫描载荷，生成相等槽位序列加一个范围槽位
    pub fn collapse(&self) -> Result<BoundArrays, CriteriaError> {
        let mut writer = PredicateWriter::new();

        let pairs = self.low_payload().iter().zip(self.high_payload());
        for (i, (&lo, &hi)) in pairs.enumerate() {
            if lo == hi {
                writer.push_equal(lo)?;
                debug!(" data#{} : x = {:02x}", i, lo);
            } else {
                writer.push_range(lo, hi)?;
                debug!(" data#{} : x >= {:02x} && x < {:02x}", i, lo, hi);
                break;
            }
        }

        Ok(writer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex20(s: &str) -> [u8; 20] {
        let mut out = [0u8; 20];
        hex::decode_to_slice(s, &mut out).unwrap();
        out
    }

    #[test]
    fn test_bounds_tab() {
        let bounds = TRON.prefix_bounds("TAB").unwrap();
        assert_eq!(
            hex::encode(bounds.lowest),
            "41023af93e68c91412cc726eec7e55361ad51f17f600000000"
        );
        assert_eq!(
            hex::encode(bounds.highest),
            "41026b63bae192602b92e32f38097cfe376249035080000000"
        );
    }

    #[test]
    fn test_predicate_tab() {
        let arrays = TRON.prefix_predicate("TAB").unwrap();
        assert_eq!(arrays.a, hex20("ff6b000000000000000000000000000000000000"));
        assert_eq!(arrays.b, hex20("023a000000000000000000000000000000000000"));
    }

    #[test]
    fn test_predicate_single_range_slot() {
        // "TJ": 第一个载荷字节就不同
        let arrays = TRON.prefix_predicate("TJ").unwrap();
        assert_eq!(arrays.a[0], 0x63);
        assert_eq!(arrays.b[0], 0x58);
        assert!(arrays.a[1..].iter().all(|&m| m == 0));
    }

    #[test]
    fn test_predicate_full_address() {
        // 完整地址只在校验和字节上不同，载荷全部是相等槽位
        let arrays = TRON
            .prefix_predicate("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t")
            .unwrap();
        assert_eq!(arrays.a, [0xFF; 20]);
        assert_eq!(arrays.b, hex20("a614f803b6fd780986a42c78ec9c7f77e6ded13c"));
    }

    #[test]
    fn test_prefix_length_bounds() {
        assert_eq!(
            TRON.prefix_bounds(""),
            Err(CriteriaError::PrefixLength { len: 0, max: 34 })
        );
        let too_long = format!("T{}", "1".repeat(34));
        assert_eq!(
            TRON.prefix_bounds(&too_long),
            Err(CriteriaError::PrefixLength { len: 35, max: 34 })
        );
    }

    #[test]
    fn test_wrong_lead_character() {
        assert_eq!(
            TRON.prefix_bounds("AB"),
            Err(CriteriaError::WrongLeadCharacter {
                expected: 'T',
                found: 'A'
            })
        );
    }

    #[test]
    fn test_invalid_body_character() {
        let err = TRON.prefix_bounds("T0").unwrap_err();
        assert!(matches!(err, CriteriaError::Base58 { .. }));

        let err = TRON.prefix_bounds("Tä").unwrap_err();
        assert!(matches!(err, CriteriaError::Base58 { .. }));
    }

    #[test]
    fn test_increment_leaves_alphabet() {
        // 'z' + 1 = '{'，'H' + 1 = 'I'，都不在字母表中，上界解码失败
        for prefix in ["Tz", "TH", "T9"] {
            let err = TRON.prefix_bounds(prefix).unwrap_err();
            match err {
                CriteriaError::Base58 { candidate, .. } => {
                    assert_eq!(candidate.len(), ADDRESS_CHARS);
                }
                other => panic!("unexpected error for {}: {:?}", prefix, other),
            }
        }
    }
}
