//! Keyed encode/decode interface for persisting fixed-width fields.
//!
//! A coder stores opaque byte fields under string labels. Framing those
//! fields inside a larger record is the coder's business; values only
//! guarantee that the bytes they hand over round-trip.

use crate::error::CodecError;
use std::collections::BTreeMap;

/// A store of byte fields keyed by label.
pub trait KeyedCoder {
    /// Error raised by the backing store. Must absorb codec failures so a
    /// malformed stored field can be reported through the same channel.
    type Error: From<CodecError>;

    /// Store `bytes` under `key`, replacing any previous field.
    fn encode_bytes(&mut self, key: &str, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Fetch the field stored under `key`.
    fn decode_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error>;
}

/// In-memory coder, mostly useful in tests and for building records before
/// they are written elsewhere.
#[derive(Debug, Default, Clone)]
pub struct MemoryCoder {
    fields: BTreeMap<String, Vec<u8>>,
}

impl MemoryCoder {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&[u8]> {
        self.fields.get(key).map(Vec::as_slice)
    }
}

impl KeyedCoder for MemoryCoder {
    type Error = CodecError;

    fn encode_bytes(&mut self, key: &str, bytes: &[u8]) -> Result<(), Self::Error> {
        self.fields.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn decode_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error> {
        Ok(self.fields.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_coder_overwrite() {
        let mut coder = MemoryCoder::new();
        assert_eq!(coder.decode_bytes("a").unwrap(), None);

        coder.encode_bytes("a", &[1]).unwrap();
        coder.encode_bytes("a", &[2, 3]).unwrap();

        assert_eq!(coder.get("a"), Some(&[2u8, 3][..]));
        assert_eq!(coder.decode_bytes("a").unwrap(), Some(vec![2, 3]));
        assert_eq!(coder.decode_bytes("b").unwrap(), None);
    }
}
