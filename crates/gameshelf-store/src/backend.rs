//! The [`KeyValueStore`] trait and the in-memory backend.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::StoreError;

/// A durable string-to-string store.
///
/// This is the "platform storage" seam: a phone's key/value store, a
/// browser's local storage, or here a JSON file on disk. Backends report
/// every fault; deciding that a fault is harmless is the caller's job
/// (see [`TokenStore`](crate::TokenStore)).
///
/// # Trait bounds
///
/// - `Send + Sync` → one store is shared by the API client and the
///   session controller, possibly across Tokio worker threads.
/// - `'static` → it lives as long as the session it backs.
///
/// Implementations must serialize their own access: two concurrent
/// `set` calls may not interleave into a torn value.
pub trait KeyValueStore: Send + Sync + 'static {
    /// Reads a value. `Ok(None)` means the key is absent.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Writes a value, replacing any previous one.
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Deletes a value. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}

impl<S: KeyValueStore> KeyValueStore for Arc<S> {
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StoreError>> + Send {
        (**self).get(key)
    }

    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StoreError>> + Send {
        (**self).remove(key)
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// A [`KeyValueStore`] that lives only as long as the process.
///
/// Useful for tests and for "don't remember me" sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_set_then_get() {
        let store = MemoryStore::new();
        store.set("userToken", "abc123").await.unwrap();
        assert_eq!(store.get("userToken").await.unwrap().as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_memory_store_get_absent_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("userToken").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_set_overwrites() {
        let store = MemoryStore::with_entry("userToken", "old");
        store.set("userToken", "new").await.unwrap();
        assert_eq!(store.get("userToken").await.unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_memory_store_remove_absent_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("userToken").await.is_ok());
    }

    #[tokio::test]
    async fn test_arc_store_shares_state() {
        let store = Arc::new(MemoryStore::new());
        let other = Arc::clone(&store);
        store.set("k", "v").await.unwrap();
        assert_eq!(other.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
