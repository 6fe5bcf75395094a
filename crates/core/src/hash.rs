//! SHA-256 based digests.
//!
//! All functions here are total: every byte slice, the empty one included,
//! has a well-defined digest.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// A named alias for a 32-byte(u8) array, the output of SHA-256.
pub type H256 = [u8; 32];

/// A named alias for a 20-byte(u8) array, the output of [`hash160`].
pub type H160 = [u8; 20];

/// Length of a Base58Check checksum in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Hash arbitrary data using SHA-256.
pub fn sha256(data: &[u8]) -> H256 {
    Sha256::digest(data).into()
}

/// SHA-256 applied to its own output.
pub fn sha256d(data: &[u8]) -> H256 {
    sha256(&sha256(data))
}

/// Hash multiple pieces of data by concatenating them.
pub fn sha256_concat(parts: &[&[u8]]) -> H256 {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// RIPEMD-160 of SHA-256, the digest behind pubkey-hash addresses.
pub fn hash160(data: &[u8]) -> H160 {
    Ripemd160::digest(sha256(data)).into()
}

/// The first four bytes of `sha256d(data)`.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = sha256d(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}
