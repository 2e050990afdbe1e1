//! Error types for the storage layer.

/// Errors a [`KeyValueStore`](crate::KeyValueStore) backend can report.
///
/// These never reach the UI: [`TokenStore`](crate::TokenStore) logs them
/// and degrades to "no token" / "not saved".
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The device refused a read, write or rename.
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but isn't a JSON object of strings.
    #[error("storage file is corrupt: {0}")]
    Corrupt(String),
}
