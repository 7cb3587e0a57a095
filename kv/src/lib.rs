//! Key-value store interface and implementations.
//!
//! Provides a trait-based KV store interface with an in-memory implementation
//! for testing and a redb-based implementation for persistence. Keys and
//! values are strings.

pub mod memory;
pub mod redb;

use std::fmt;
use thiserror::Error;

/// Errors that can occur in KV store operations.
#[derive(Error, Debug)]
pub enum KVError {
    #[error("kv: storage error: {0}")]
    Storage(String),
}

/// Result type for KV operations.
pub type KVResult<T> = Result<T, KVError>;

/// Key-value store trait.
///
/// Basic operations over string keys and string values. Reads of a missing
/// key return `Ok(None)`; deleting a missing key is not an error.
pub trait KVStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &str) -> KVResult<Option<String>>;

    /// Set a key-value pair, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> KVResult<()>;

    /// Delete a key.
    fn delete(&self, key: &str) -> KVResult<()>;
}

impl fmt::Debug for dyn KVStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KVStore {{ ... }}")
    }
}

/// A boxed KV store for use in trait objects.
pub type BoxedKVStore = Box<dyn KVStore>;

// Re-export the implementations
pub use memory::MemoryStore;
pub use redb::RedbStore;
