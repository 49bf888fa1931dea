//! Base58 地址前缀处理

pub mod codec;
pub mod range;

pub use codec::{Base58Codec, Base58Error};
pub use range::{ADDRESS_BYTES, ADDRESS_CHARS, Base58Chain, PrefixBounds, TRON};
