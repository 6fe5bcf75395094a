//! Hex text helpers for payload bytes.

use crate::error::Result;

/// Decode a hex string into bytes.
///
/// Accepts upper, lower or mixed case and an optional `0x` prefix. Odd
/// lengths and non-hex characters fail with `InvalidHex`.
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    let s = strip_hex_prefix(s);
    Ok(hex::decode(s)?)
}

/// Encode bytes as lower-case hex with no prefix.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Canonical form of a hex string: lower-case, no `0x` prefix.
pub fn normalize_hex(s: &str) -> Result<String> {
    decode_hex(s).map(|bytes| encode_hex(&bytes))
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}
