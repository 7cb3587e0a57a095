//! Persistent storage for the caller's API key.

use std::sync::Arc;

use tracing::warn;
use upath_kv::KVStore;

/// Storage slot holding the configured API key.
pub const API_KEY_SLOT: &str = "upath_api_key";

/// Single-slot store for one API key.
///
/// Persistence here is best effort: every fault from the backing store is
/// swallowed, so a broken or read-only store degrades to "no key saved"
/// instead of failing the caller. A failed read is indistinguishable from a
/// key that was never set, and a failed write is dropped silently.
///
/// The API client never reads this store itself; the key is always passed
/// into operations by the caller.
#[derive(Clone)]
pub struct ApiKeyStore {
    store: Arc<dyn KVStore>,
}

impl ApiKeyStore {
    /// Creates a key store over the given KV backend.
    pub fn new(store: Arc<dyn KVStore>) -> Self {
        Self { store }
    }

    /// Reads the stored key. Returns `None` when unset or when the store
    /// fails.
    pub fn get(&self) -> Option<String> {
        match self.store.get(API_KEY_SLOT) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "api key read failed, treating as unset");
                None
            }
        }
    }

    /// Stores the key.
    pub fn set(&self, api_key: &str) {
        if let Err(err) = self.store.set(API_KEY_SLOT, api_key) {
            warn!(error = %err, "api key write failed, dropping");
        }
    }

    /// Removes the stored key.
    pub fn clear(&self) {
        if let Err(err) = self.store.delete(API_KEY_SLOT) {
            warn!(error = %err, "api key delete failed");
        }
    }
}
