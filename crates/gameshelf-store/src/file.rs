//! A [`KeyValueStore`] persisted as a small JSON file.
//!
//! The file holds one flat object, e.g. `{"userToken": "..."}`. It is
//! created on first write with owner-only permissions (0600) on unix,
//! since it contains a bearer credential.
//!
//! Writes go to a sibling temp file that is then renamed over the real
//! one, so a crash mid-write leaves either the old contents or the new
//! ones, never a truncated mix.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rand::Rng;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::{KeyValueStore, StoreError};

type Entries = BTreeMap<String, String>;

/// File-backed store. One instance per file; all access goes through an
/// async mutex so read-modify-write cycles don't interleave.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Creates a store backed by `path`. Nothing touches the disk until
    /// the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// The backing file's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Entries, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            // A missing file is just an empty store.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };
        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&contents).map_err(|e| {
            StoreError::Corrupt(format!("{}: {e}", self.path.display()))
        })
    }

    async fn save(&self, entries: &Entries) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let contents = serde_json::to_vec_pretty(entries)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let tmp = self.temp_path();
        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let written = async {
            let mut file = options.open(&tmp).await?;
            file.write_all(&contents).await?;
            file.sync_all().await?;
            tokio::fs::rename(&tmp, &self.path).await
        }
        .await;

        if let Err(e) = written {
            // Best effort: don't leave stray temp files behind.
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::Io(e));
        }
        Ok(())
    }

    /// `<file>.<random hex>.tmp` next to the real file, so the final
    /// rename never crosses a filesystem boundary.
    fn temp_path(&self) -> PathBuf {
        let suffix: u64 = rand::rng().random();
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "store".into());
        name.push(format!(".{suffix:016x}.tmp"));
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        // A corrupt file is replaced rather than blocking every future
        // login; the old contents were unreadable anyway.
        let mut entries = match self.load().await {
            Ok(entries) => entries,
            Err(StoreError::Corrupt(reason)) => {
                tracing::warn!(%reason, "overwriting corrupt store file");
                Entries::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let (mut entries, was_corrupt) = match self.load().await {
            Ok(entries) => (entries, false),
            Err(StoreError::Corrupt(reason)) => {
                tracing::warn!(%reason, "discarding corrupt store file");
                (Entries::new(), true)
            }
            Err(e) => return Err(e),
        };
        if entries.remove(key).is_none() && !was_corrupt {
            return Ok(());
        }
        self.save(&entries).await
    }
}
