//! Base58Check: Base58 over `payload ++ checksum(payload)`.
//!
//! This module is the only place checksums are built or verified.

use crate::base58;
use crate::error::{CodecError, Result};
use crate::hash::{checksum, CHECKSUM_LEN};
use crate::text::{decode_hex, encode_hex};
use crate::uint::UInt160;

/// Encode a payload with a 4-byte double SHA-256 checksum.
pub fn encode(payload: &[u8]) -> String {
    let mut extended = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    extended.extend_from_slice(payload);
    extended.extend_from_slice(&checksum(payload));
    base58::encode(&extended)
}

/// Decode a Base58Check string and verify its checksum.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    let mut data = base58::decode(s)?;
    if data.len() < CHECKSUM_LEN {
        return Err(CodecError::TooShort { len: data.len() });
    }

    let split = data.len() - CHECKSUM_LEN;
    let expected = checksum(&data[..split]);
    if expected[..] != data[split..] {
        return Err(CodecError::ChecksumMismatch {
            expected: encode_hex(&expected),
            actual: encode_hex(&data[split..]),
        });
    }

    data.truncate(split);
    Ok(data)
}

/// Hex payload to Base58Check.
pub fn hex_to_base58check(hex: &str) -> Result<String> {
    let payload = decode_hex(hex)?;
    Ok(encode(&payload))
}

/// Base58Check to lower-case hex payload.
pub fn base58check_to_hex(s: &str) -> Result<String> {
    decode(s).map(|payload| encode_hex(&payload))
}

/// Encode `version ++ payload`.
pub fn encode_versioned(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + 1);
    data.push(version);
    data.extend_from_slice(payload);
    encode(&data)
}

/// Split a checked payload into its leading version byte and the rest.
pub fn decode_versioned(s: &str) -> Result<(u8, Vec<u8>)> {
    let mut data = decode(s)?;
    if data.is_empty() {
        return Err(CodecError::TooShort {
            len: CHECKSUM_LEN,
        });
    }
    let version = data.remove(0);
    Ok((version, data))
}

/// Like [`decode_versioned`], but the version byte must equal `expected`.
pub fn decode_with_version(s: &str, expected: u8) -> Result<Vec<u8>> {
    let (actual, payload) = decode_versioned(s)?;
    if actual != expected {
        return Err(CodecError::VersionMismatch { expected, actual });
    }
    Ok(payload)
}

/// Address string for a pubkey or script hash.
pub fn address_from_hash160(version: u8, hash: &UInt160) -> String {
    encode_versioned(version, hash.as_bytes())
}

/// Recover the hash behind an address with the given version byte.
pub fn hash160_from_address(address: &str, version: u8) -> Result<UInt160> {
    let payload = decode_with_version(address, version)?;
    UInt160::from_bytes(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD_HEX: &str = "00010966776006953d5567439e5e39f86a0d273bee";
    const ADDRESS: &str = "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM";

    #[test]
    fn test_known_address() {
        assert_eq!(hex_to_base58check(PAYLOAD_HEX).unwrap(), ADDRESS);
        assert_eq!(base58check_to_hex(ADDRESS).unwrap(), PAYLOAD_HEX);
    }

    #[test]
    fn test_hex_input_is_normalized() {
        let upper = format!("0x{}", PAYLOAD_HEX.to_uppercase());
        let encoded = hex_to_base58check(&upper).unwrap();
        assert_eq!(encoded, ADDRESS);
        assert_eq!(base58check_to_hex(&encoded).unwrap(), PAYLOAD_HEX);
    }

    #[test]
    fn test_invalid_hex() {
        assert_eq!(hex_to_base58check("abc"), Err(CodecError::InvalidHex));
        assert_eq!(hex_to_base58check("xy"), Err(CodecError::InvalidHex));
    }

    #[test]
    fn test_last_character_altered() {
        let mut altered = ADDRESS[..ADDRESS.len() - 1].to_string();
        altered.push('N');
        assert!(matches!(
            base58check_to_hex(&altered),
            Err(CodecError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_invalid_character() {
        assert!(matches!(
            base58check_to_hex("16UwLL9Risc3QfPqBUvKofHmBQ7wMtjv0"),
            Err(CodecError::InvalidCharacter { character: '0', .. })
        ));
    }

    #[test]
    fn test_too_short() {
        assert_eq!(decode(""), Err(CodecError::TooShort { len: 0 }));
        // "2g" decodes to a single byte.
        assert_eq!(decode("2g"), Err(CodecError::TooShort { len: 1 }));
    }

    #[test]
    fn test_empty_payload_roundtrip() {
        let encoded = encode(&[]);
        assert_eq!(decode(&encoded).unwrap(), Vec::<u8>::new());
        assert_eq!(base58check_to_hex(&encoded).unwrap(), "");
    }

    #[test]
    fn test_versioned() {
        let (version, payload) = decode_versioned(ADDRESS).unwrap();
        assert_eq!(version, 0);
        assert_eq!(encode_hex(&payload), &PAYLOAD_HEX[2..]);
        assert_eq!(encode_versioned(version, &payload), ADDRESS);
    }

    #[test]
    fn test_versioned_empty_payload() {
        let encoded = encode(&[]);
        assert!(matches!(
            decode_versioned(&encoded),
            Err(CodecError::TooShort { .. })
        ));
    }

    #[test]
    fn test_version_mismatch() {
        assert_eq!(
            decode_with_version(ADDRESS, 76),
            Err(CodecError::VersionMismatch {
                expected: 76,
                actual: 0
            })
        );
    }

    #[test]
    fn test_address_hash160_roundtrip() {
        let hash = UInt160::from_hex(&PAYLOAD_HEX[2..]).unwrap();
        let address = address_from_hash160(0, &hash);
        assert_eq!(address, ADDRESS);
        assert_eq!(hash160_from_address(&address, 0).unwrap(), hash);
    }

    #[test]
    fn test_hash160_from_address_wrong_length() {
        let address = encode_versioned(76, &[1, 2, 3]);
        assert_eq!(
            hash160_from_address(&address, 76),
            Err(CodecError::InvalidLength {
                expected: 20,
                actual: 3
            })
        );
    }
}
