//! Address encoding primitives for addrkit.
//!
//! This crate provides the value types and codecs used to turn raw key and
//! address bytes into transcribable strings and back:
//! - SHA-256, double SHA-256 and hash160 digests
//! - Fixed-width `UInt256` / `UInt160` values with hex and keyed encodings
//! - Base58 and Base58Check codecs
//! - Network address version bytes
//!
//! Every operation is a pure function over its inputs. Decoding surfaces a
//! specific [`CodecError`] and never returns partial output.

pub mod base58;
pub mod check;
pub mod coder;
pub mod error;
pub mod hash;
pub mod network;
pub mod text;
pub mod uint;

// Re-export commonly used types at the crate root
pub use check::{base58check_to_hex, hex_to_base58check};
pub use coder::{KeyedCoder, MemoryCoder};
pub use error::{CodecError, Result};
pub use hash::{checksum, hash160, sha256, sha256_concat, sha256d, H160, H256};
pub use network::{AddressKind, Network};
pub use text::{decode_hex, encode_hex, normalize_hex};
pub use uint::{UInt160, UInt256};
