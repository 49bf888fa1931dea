//! 公钥 / 初始种子输入解析
//!
//! GPU 端以四个 64 位字 (低位字在前) 表示 256 位整数。

use byteorder::{BigEndian, ByteOrder};

use crate::error::CriteriaError;

/// 256 位整数，`lanes[0]` 为最低 64 位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Uint256Lanes {
    pub lanes: [u64; 4],
}

impl Uint256Lanes {
    /// 从 32 字节大端表示转换
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut lanes = [0u64; 4];
        for (k, lane) in lanes.iter_mut().enumerate() {
            let start = 24 - 8 * k;
            *lane = BigEndian::read_u64(&bytes[start..start + 8]);
        }
        Self { lanes }
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (k, lane) in self.lanes.iter().enumerate() {
            let start = 24 - 8 * k;
            BigEndian::write_u64(&mut bytes[start..start + 8], *lane);
        }
        bytes
    }
}

/// 搜索起点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMaterial {
    /// 未压缩公钥 (X, Y)，搜索在其上叠加随机偏移
    PublicKey { x: Uint256Lanes, y: Uint256Lanes },
    /// 直接给定的初始种子
    InitSeed(Uint256Lanes),
}

/// 解析 `-z` 参数: 128 个十六进制字符为公钥，64 个为初始种子
pub fn parse_key_material(input: &str) -> Result<KeyMaterial, CriteriaError> {
    let hex_str = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    if !hex_str.is_ascii() {
        return Err(CriteriaError::KeyMaterialHex(String::from(
            "non-ASCII character in input",
        )));
    }

    match hex_str.len() {
        128 => {
            let mut x = [0u8; 32];
            let mut y = [0u8; 32];
            decode_hex(&hex_str[..64], &mut x)?;
            decode_hex(&hex_str[64..], &mut y)?;
            Ok(KeyMaterial::PublicKey {
                x: Uint256Lanes::from_be_bytes(&x),
                y: Uint256Lanes::from_be_bytes(&y),
            })
        }
        64 => {
            let mut raw = [0u8; 32];
            decode_hex(hex_str, &mut raw)?;
            Ok(KeyMaterial::InitSeed(Uint256Lanes::from_be_bytes(&raw)))
        }
        _ => Err(length_error(hex_str)),
    }
}

fn decode_hex(hex_str: &str, out: &mut [u8]) -> Result<(), CriteriaError> {
    hex::decode_to_slice(hex_str, out).map_err(|e| CriteriaError::KeyMaterialHex(e.to_string()))
}

fn length_error(hex_str: &str) -> CriteriaError {
    CriteriaError::KeyMaterialLength { len: hex_str.len() }
}
