//! Error taxonomy shared by every codec in this crate.

use thiserror::Error;

/// Validation failures raised while parsing or decoding.
///
/// Encoding an in-memory value never fails, so every variant here describes
/// malformed input. None of them are transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid hex string")]
    InvalidHex,

    #[error("invalid base58 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("decoded payload too short: {len} bytes")]
    TooShort { len: usize },

    #[error("checksum mismatch: expected {expected}, found {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("version byte mismatch: expected {expected}, found {actual}")]
    VersionMismatch { expected: u8, actual: u8 },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

impl From<hex::FromHexError> for CodecError {
    fn from(_: hex::FromHexError) -> Self {
        CodecError::InvalidHex
    }
}
