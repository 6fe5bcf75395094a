//! Base58 encoding without checksum.
//!
//! The buffer is read as a big-endian unsigned integer and rewritten in
//! base 58. Each leading zero byte is carried separately as one leading `1`
//! so buffers that differ only in leading zeros stay distinct.

use crate::error::{CodecError, Result};

/// The Bitcoin alphabet: digits and letters minus `0`, `O`, `I` and `l`.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const INVALID: u8 = 0xff;

/// ASCII code point to digit value, `INVALID` for characters outside the
/// alphabet.
const DIGIT_MAP: [u8; 128] = {
    let mut map = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
};

fn digit_value(c: char) -> Option<u8> {
    let idx = c as usize;
    if idx >= DIGIT_MAP.len() {
        return None;
    }
    match DIGIT_MAP[idx] {
        INVALID => None,
        v => Some(v),
    }
}

/// Encode bytes as a base58 string.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();

    // Base58 digits, least significant first. log(256)/log(58) < 1.38.
    let mut digits: Vec<u8> = Vec::with_capacity((data.len() - zeros) * 138 / 100 + 1);
    for &byte in &data[zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut result = String::with_capacity(zeros + digits.len());
    result.extend(std::iter::repeat('1').take(zeros));
    result.extend(digits.iter().rev().map(|&d| ALPHABET[d as usize] as char));
    result
}

/// Decode a base58 string into bytes.
///
/// Fails with `InvalidCharacter` on the first character outside the
/// alphabet, whitespace included. The empty string decodes to no bytes.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    let mut zeros = 0usize;
    let mut leading = true;

    // Base256 digits, least significant first. log(58)/log(256) < 0.733.
    let mut bytes: Vec<u8> = Vec::with_capacity(s.len() * 733 / 1000 + 1);
    for (position, character) in s.chars().enumerate() {
        let value = digit_value(character).ok_or(CodecError::InvalidCharacter {
            character,
            position,
        })?;

        if leading && value == 0 {
            zeros += 1;
            continue;
        }
        leading = false;

        let mut carry = value as u32;
        for byte in bytes.iter_mut() {
            carry += (*byte as u32) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut result = vec![0u8; zeros];
    result.extend(bytes.iter().rev());
    Ok(result)
}
