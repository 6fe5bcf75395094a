//! sled database wrapper with serialization helpers.

use addrkit_core::{sha256, CodecError, KeyedCoder, UInt256};
use sled::Db;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("Malformed stored field: {0}")]
    Codec(#[from] CodecError),

    #[error("Key not found: {0}")]
    NotFound(String),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

const FIELD_PREFIX: &[u8] = b"field:";

/// Wrapper around sled database with serialization helpers.
pub struct Storage {
    db: Db,
}

impl Storage {
    /// Open a database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = sled::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "opened storage");
        Ok(Self { db })
    }

    /// Open an in-memory database (for testing).
    pub fn open_temporary() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db })
    }

    /// Store a serializable value.
    pub fn put<K, V>(&self, key: K, value: &V) -> Result<()>
    where
        K: AsRef<[u8]>,
        V: serde::Serialize,
    {
        let encoded = bincode::serialize(value)?;
        self.db.insert(key, encoded)?;
        Ok(())
    }

    /// Retrieve and deserialize a value.
    pub fn get<K, V>(&self, key: K) -> Result<Option<V>>
    where
        K: AsRef<[u8]>,
        V: serde::de::DeserializeOwned,
    {
        match self.db.get(key)? {
            Some(bytes) => {
                let value = bincode::deserialize(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Flush all pending writes to disk.
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }

    /// Labels of every keyed field, in key order.
    pub fn field_labels(&self) -> Result<Vec<String>> {
        let mut labels = Vec::new();
        for entry in self.db.scan_prefix(FIELD_PREFIX) {
            let (key, _) = entry?;
            labels.push(String::from_utf8_lossy(&key[FIELD_PREFIX.len()..]).into_owned());
        }
        Ok(labels)
    }

    /// Store a 256-bit value under `label`.
    pub fn put_uint256(&mut self, label: &str, value: &UInt256) -> Result<()> {
        value.encode_with(self, label)
    }

    /// Load the 256-bit value stored under `label`.
    pub fn get_uint256(&self, label: &str) -> Result<Option<UInt256>> {
        UInt256::decode_with(self, label)
    }

    /// Load the 256-bit value stored under `label`, returning error if not found.
    pub fn require_uint256(&self, label: &str) -> Result<UInt256> {
        self.get_uint256(label)?
            .ok_or_else(|| StorageError::NotFound(label.to_string()))
    }

    // =========================================================================
    // Key Construction Helpers
    // =========================================================================

    /// Create a prefixed key for a keyed field.
    /// Format: "field:" + label
    pub fn field_key(label: &str) -> Vec<u8> {
        let mut key = FIELD_PREFIX.to_vec();
        key.extend_from_slice(label.as_bytes());
        key
    }

    /// Create the metadata key for a transaction hash.
    /// Format: "txn-" + hex(sha256(hash_bytes))
    pub fn tx_key(tx_hash: &UInt256) -> String {
        format!("txn-{}", UInt256(sha256(tx_hash.as_bytes())))
    }
}

impl KeyedCoder for Storage {
    type Error = StorageError;

    fn encode_bytes(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        debug!(label = key, len = bytes.len(), "writing field");
        self.put(Self::field_key(key), &bytes)
    }

    fn decode_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let field: Option<Vec<u8>> = self.get(Self::field_key(key))?;
        debug!(label = key, found = field.is_some(), "reading field");
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_temporary() {
        let storage = Storage::open_temporary().unwrap();
        assert!(storage.db.is_empty());
    }

    #[test]
    fn test_put_get() {
        let storage = Storage::open_temporary().unwrap();

        // Store a value
        storage.put("key1", &42u64).unwrap();

        // Retrieve it
        let value: Option<u64> = storage.get("key1").unwrap();
        assert_eq!(value, Some(42));

        // Non-existent key returns None
        let missing: Option<u64> = storage.get("missing").unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn test_require_uint256() {
        let mut storage = Storage::open_temporary().unwrap();
        storage.put_uint256("exists", &UInt256::MAX).unwrap();

        assert_eq!(storage.require_uint256("exists").unwrap(), UInt256::MAX);

        let result = storage.require_uint256("missing");
        assert!(matches!(result, Err(StorageError::NotFound(label)) if label == "missing"));
    }

    #[test]
    fn test_uint256_field_roundtrip() {
        let mut storage = Storage::open_temporary().unwrap();
        let value = UInt256([0x5a; 32]);

        storage.put_uint256("lastBlockHash", &value).unwrap();

        assert_eq!(storage.get_uint256("lastBlockHash").unwrap(), Some(value));
        assert_eq!(storage.get_uint256("other").unwrap(), None);
    }

    #[test]
    fn test_field_is_framed_32_bytes() {
        let mut storage = Storage::open_temporary().unwrap();
        storage.put_uint256("tip", &UInt256::MAX).unwrap();

        let raw = storage.db.get(Storage::field_key("tip")).unwrap().unwrap();
        // bincode length prefix (u64) followed by the 32-byte field
        assert_eq!(raw.len(), 8 + 32);
        assert_eq!(&raw[8..], &[0xff; 32][..]);
    }

    #[test]
    fn test_malformed_field_is_rejected() {
        let mut storage = Storage::open_temporary().unwrap();
        storage.encode_bytes("bad", &[1, 2, 3]).unwrap();

        let result = storage.get_uint256("bad");
        assert!(matches!(
            result,
            Err(StorageError::Codec(CodecError::InvalidLength {
                expected: 32,
                actual: 3
            }))
        ));
    }

    #[test]
    fn test_field_labels() {
        let mut storage = Storage::open_temporary().unwrap();
        storage.put_uint256("b", &UInt256::ZERO).unwrap();
        storage.put_uint256("a", &UInt256::MAX).unwrap();
        storage.put("unrelated", &1u8).unwrap();

        assert_eq!(storage.field_labels().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_key_construction() {
        assert_eq!(Storage::field_key("tip"), b"field:tip");

        let tx_key = Storage::tx_key(&UInt256::ZERO);
        assert!(tx_key.starts_with("txn-"));
        assert_eq!(
            tx_key,
            "txn-66687aadf862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2925"
        );
    }
}
