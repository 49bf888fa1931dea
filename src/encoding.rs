//! 字节谓词编码工具
//!
//! GPU 评分内核逐字节读取两组 20 字节数组。前缀类规则从下标 0 开始连续写入，
//! 第一个全零的掩码槽位表示"之后不再约束"。

use crate::error::CriteriaError;

/// 地址字节数，同时也是谓词槽位数
pub const BOUND_LEN: usize = 20;

/// 表示"整个字节必须相等"的掩码
pub const MASK_EQUAL: u8 = 0xFF;

/// 只约束高半字节的掩码
pub const MASK_HIGH_NIBBLE: u8 = 0xF0;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// 十六进制字符转半字节，不区分大小写
///
/// 非法字符返回 `None`，用于内部边界计算。
pub fn hex_value_no_error(c: char) -> Option<u8> {
    let lower = c.to_ascii_lowercase();
    HEX_DIGITS
        .iter()
        .position(|&d| char::from(d) == lower)
        .map(|pos| pos as u8)
}

/// 十六进制字符转半字节，非法字符报告具体字符和位置
pub fn hex_value(c: char, index: usize) -> Result<u8, CriteriaError> {
    hex_value_no_error(c).ok_or(CriteriaError::InvalidHexCharacter {
        character: c,
        index,
    })
}

/// 两组定长边界数组 (对应 OpenCL uchar[20] x 2)
///
/// 前缀类规则中 `a` 为掩码、`b` 为期望值；范围类规则中 `a` 为下界、`b` 为上界。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundArrays {
    pub a: [u8; BOUND_LEN],
    pub b: [u8; BOUND_LEN],
}

/// 顺序写入谓词槽位
///
/// 每次写入都会检查槽位边界，保证已写入的槽位从 0 开始连续。
#[derive(Debug, Default)]
pub struct PredicateWriter {
    arrays: BoundArrays,
    len: usize,
}

impl PredicateWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入一个 (掩码, 值) 槽位
    pub fn push(&mut self, mask: u8, value: u8) -> Result<(), CriteriaError> {
        if self.len >= BOUND_LEN {
            return Err(CriteriaError::SlotOverflow {
                capacity: BOUND_LEN,
            });
        }
        self.arrays.a[self.len] = mask;
        self.arrays.b[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// 相等槽位: 候选字节必须等于 `value`
    pub fn push_equal(&mut self, value: u8) -> Result<(), CriteriaError> {
        self.push(MASK_EQUAL, value)
    }

    /// 范围槽位: `low <= byte < high`，上界写入掩码位置
    pub fn push_range(&mut self, low: u8, high: u8) -> Result<(), CriteriaError> {
        self.push(high, low)
    }

    /// 半字节槽位: 低半字节缺失时只约束高半字节，值的低半字节按 0 处理
    pub fn push_nibbles(&mut self, high: u8, low: Option<u8>) -> Result<(), CriteriaError> {
        match low {
            Some(low) => self.push(MASK_EQUAL, (high << 4) | (low & 0x0F)),
            None => self.push(MASK_HIGH_NIBBLE, high << 4),
        }
    }

    /// 已写入的槽位数
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn finish(self) -> BoundArrays {
        self.arrays
    }
}
