//! 定长 Base58 编解码

use bs58::Alphabet;
use std::fmt;
use thiserror::Error;

/// Base58 解码错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Base58Error {
    /// 字符不在字母表中
    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    /// 解码结果不是恰好 `expected` 字节
    #[error("decoded value does not fit in exactly {expected} bytes")]
    WrongLength { expected: usize },

    /// 其他解码错误
    #[error("base58 decoding failed: {0}")]
    Other(String),
}

/// 绑定字母表的 Base58 编解码器
#[derive(Clone, Copy)]
pub struct Base58Codec {
    alphabet: &'static Alphabet,
}

impl fmt::Debug for Base58Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Base58Codec").finish_non_exhaustive()
    }
}

impl Base58Codec {
    /// 比特币字母表 (TRON 同样使用)
    pub const BITCOIN: Self = Self {
        alphabet: Alphabet::BITCOIN,
    };

    pub const fn new(alphabet: &'static Alphabet) -> Self {
        Self { alphabet }
    }

    /// 解码到 `out`，解码结果必须恰好填满 `out`
    pub fn decode_into(
        &self,
        text: impl AsRef<[u8]>,
        out: &mut [u8],
    ) -> Result<(), Base58Error> {
        let text = text.as_ref();
        let expected = out.len();
        let mut buf = vec![0u8; expected];

        let written = bs58::decode(text)
            .with_alphabet(self.alphabet)
            .onto(&mut buf[..])
            .map_err(|e| match e {
                bs58::decode::Error::BufferTooSmall => Base58Error::WrongLength { expected },
                bs58::decode::Error::InvalidCharacter { character, index } => {
                    Base58Error::InvalidCharacter { character, index }
                }
                bs58::decode::Error::NonAsciiCharacter { index } => {
                    Base58Error::InvalidCharacter {
                        character: text.get(index).copied().map(char::from).unwrap_or('?'),
                        index,
                    }
                }
                other => Base58Error::Other(other.to_string()),
            })?;

        if written != expected {
            return Err(Base58Error::WrongLength { expected });
        }

        out.copy_from_slice(&buf);
        Ok(())
    }

    /// 解码为定长数组
    pub fn decode<const N: usize>(
        &self,
        text: impl AsRef<[u8]>,
    ) -> Result<[u8; N], Base58Error> {
        let mut out = [0u8; N];
        self.decode_into(text, &mut out)?;
        Ok(out)
    }

    pub fn encode(&self, bytes: impl AsRef<[u8]>) -> String {
        bs58::encode(bytes)
            .with_alphabet(self.alphabet)
            .into_string()
    }
}

impl Default for Base58Codec {
    fn default() -> Self {
        Self::BITCOIN
    }
}
