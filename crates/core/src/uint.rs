//! Fixed-width unsigned integers stored as raw bytes.
//!
//! Byte order is big-endian throughout: index 0 is the most significant
//! byte. `to_bytes`, `to_hex`, the keyed coder layout and the derived
//! ordering all use that one convention, so comparing two values compares
//! them as unsigned integers.

use crate::base58;
use crate::coder::KeyedCoder;
use crate::error::{CodecError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! fixed_uint {
    ($name:ident, $len:expr) => {
        impl $name {
            /// Width of the value in bytes.
            pub const LEN: usize = $len;

            /// The zero value.
            pub const ZERO: Self = Self([0u8; $len]);

            /// Build a value from a byte slice of exactly `LEN` bytes.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                let arr: [u8; $len] =
                    bytes.try_into().map_err(|_| CodecError::InvalidLength {
                        expected: $len,
                        actual: bytes.len(),
                    })?;
                Ok(Self(arr))
            }

            /// Copy out the underlying bytes.
            pub fn to_bytes(&self) -> [u8; $len] {
                self.0
            }

            /// Get the underlying bytes.
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Parse from a hex string of exactly `2 * LEN` characters.
            pub fn from_hex(s: &str) -> Result<Self> {
                if s.len() != $len * 2 {
                    return Err(CodecError::InvalidHex);
                }
                let mut arr = [0u8; $len];
                hex::decode_to_slice(s, &mut arr)?;
                Ok(Self(arr))
            }

            /// Lower-case, zero-padded hex.
            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }

            /// True when every byte is zero.
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|&b| b == 0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl FromStr for $name {
            type Err = CodecError;

            fn from_str(s: &str) -> Result<Self> {
                Self::from_hex(s)
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $len] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }
    };
}

/// A 256-bit unsigned integer, used for hashes and identifiers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct UInt256(pub [u8; 32]);

/// A 160-bit unsigned integer, the width of a pubkey or script hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct UInt160(pub [u8; 20]);

fixed_uint!(UInt256, 32);
fixed_uint!(UInt160, 20);

impl UInt256 {
    /// The largest representable value.
    pub const MAX: Self = Self([0xff; 32]);

    /// Byte-reversed copy.
    ///
    /// Transaction and block hashes are conventionally displayed in this
    /// order.
    pub fn reversed(&self) -> Self {
        let mut bytes = self.0;
        bytes.reverse();
        Self(bytes)
    }

    /// First 8 hex characters, for listings and log lines.
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Base58 rendering of the 32 bytes, without checksum.
    pub fn to_base58(&self) -> String {
        base58::encode(&self.0)
    }

    /// Write the 32-byte field under `key`.
    pub fn encode_with<C: KeyedCoder>(
        &self,
        coder: &mut C,
        key: &str,
    ) -> std::result::Result<(), C::Error> {
        coder.encode_bytes(key, &self.0)
    }

    /// Read the field stored under `key`, if any.
    ///
    /// A stored field that is not exactly 32 bytes fails with
    /// `InvalidLength`.
    pub fn decode_with<C: KeyedCoder>(
        coder: &C,
        key: &str,
    ) -> std::result::Result<Option<Self>, C::Error> {
        match coder.decode_bytes(key)? {
            Some(bytes) => Ok(Some(Self::from_bytes(&bytes)?)),
            None => Ok(None),
        }
    }
}
