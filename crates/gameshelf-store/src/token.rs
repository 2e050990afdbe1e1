//! The best-effort session token store.
//!
//! [`TokenStore`] wraps any [`KeyValueStore`] and swallows its faults:
//! a read that fails looks like "no token", a write that fails returns
//! `false`. Nothing here ever returns an error, because a broken disk
//! should cost the user their "remember me", not their current session.

use std::sync::Arc;

use crate::KeyValueStore;

/// The well-known key the session token is stored under.
pub const TOKEN_KEY: &str = "userToken";

/// Best-effort view of a [`KeyValueStore`].
///
/// Cloning is cheap (an `Arc` bump) and every clone sees the same
/// backend, which is how the API client and the session controller share
/// one token.
pub struct TokenStore<S: KeyValueStore> {
    backend: Arc<S>,
}

impl<S: KeyValueStore> Clone for TokenStore<S> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<S: KeyValueStore> TokenStore<S> {
    /// Wraps a backend.
    pub fn new(backend: S) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Wraps a backend that is already shared elsewhere.
    pub fn from_shared(backend: Arc<S>) -> Self {
        Self { backend }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Reads `key`; any backend fault is logged and reported as absent.
    pub async fn get(&self, key: &str) -> Option<String> {
        match self.backend.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(key, error = %e, "token store read failed");
                None
            }
        }
    }

    /// Writes `key`; returns `false` (after logging) if the backend failed.
    ///
    /// `false` means the value won't survive a restart, nothing more.
    pub async fn set(&self, key: &str, value: &str) -> bool {
        match self.backend.set(key, value).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key, error = %e, "token store write failed");
                false
            }
        }
    }

    /// Deletes `key`; returns `false` (after logging) if the backend failed.
    pub async fn remove(&self, key: &str) -> bool {
        match self.backend.remove(key).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key, error = %e, "token store remove failed");
                false
            }
        }
    }

    /// The stored session token, if any.
    pub async fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY).await.filter(|t| !t.is_empty())
    }

    /// Persists the session token.
    pub async fn save_token(&self, token: &str) -> bool {
        self.set(TOKEN_KEY, token).await
    }

    /// Forgets the session token.
    pub async fn clear_token(&self) -> bool {
        self.remove(TOKEN_KEY).await
    }
}
