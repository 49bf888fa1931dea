//! 测试公共模块
//!
//! 提供评分内核判定逻辑的 Rust 参考实现和随机样本生成

#![allow(dead_code)]

use rand::Rng;

pub const BASE58_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// `profanity_score_matching` 的判定: 每个槽位 `(byte & mask) == value`，遇到全零掩码停止
pub fn rust_check_matching(address: &[u8; 20], mask: &[u8; 20], value: &[u8; 20]) -> bool {
    for i in 0..20 {
        if mask[i] == 0 {
            break;
        }
        if address[i] & mask[i] != value[i] {
            return false;
        }
    }
    true
}

/// `profanity_score_tron_prefix` 的判定
///
/// 掩码 0xFF 要求字节相等，否则要求 `value <= byte < mask`；遇到全零掩码停止。
pub fn rust_check_tron_prefix(payload: &[u8], mask: &[u8; 20], value: &[u8; 20]) -> bool {
    for i in 0..20 {
        if mask[i] == 0 {
            break;
        }
        if mask[i] == 0xFF {
            if payload[i] != value[i] {
                return false;
            }
        } else if !(value[i] <= payload[i] && payload[i] < mask[i]) {
            return false;
        }
    }
    true
}

/// 随机十六进制字符串 (大小写混合)
pub fn random_hex<R: Rng>(rng: &mut R, len: usize) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefABCDEF";
    (0..len)
        .map(|_| char::from(DIGITS[rng.gen_range(0..DIGITS.len())]))
        .collect()
}

/// 把前缀用随机 Base58 字符补齐到 34 位
pub fn random_address_with_prefix<R: Rng>(rng: &mut R, prefix: &str) -> String {
    let mut address = String::from(prefix);
    while address.len() < 34 {
        address.push(char::from(
            BASE58_ALPHABET[rng.gen_range(0..BASE58_ALPHABET.len())],
        ));
    }
    address
}

/// 手工解码十六进制字符串到地址字节 (奇数长度时低半字节补 0)
pub fn manual_hex_bytes(hex: &str) -> Vec<u8> {
    let nibbles: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).expect("test input must be hex") as u8)
        .collect();
    nibbles
        .chunks(2)
        .map(|pair| (pair[0] << 4) | pair.get(1).copied().unwrap_or(0))
        .collect()
}
