//! Persistent storage layer for addrkit.
//!
//! This crate provides a `sled`-backed [`KeyedCoder`](addrkit_core::KeyedCoder):
//! fixed-width values such as [`UInt256`](addrkit_core::UInt256) are written
//! as labelled byte fields, framed with `bincode`.
//!
//! # Example
//!
//! ```rust,no_run
//! use addrkit_core::UInt256;
//! use addrkit_storage::Storage;
//!
//! let mut storage = Storage::open("./addrkit_data").unwrap();
//! storage.put_uint256("lastBlockHash", &UInt256::ZERO).unwrap();
//! assert_eq!(storage.get_uint256("lastBlockHash").unwrap(), Some(UInt256::ZERO));
//! ```

pub mod db;

// Re-export commonly used types
pub use db::{Result, Storage, StorageError};
