//! Key-value storage adapters.
//!
//! The app keeps its state under a couple of fixed keys. [`KeyValueStore`] is
//! the seam; [`FileStore`] is the on-device implementation and
//! [`MemoryStore`] backs tests and runs without a data directory.

use std::collections::HashMap;
use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::sync::RwLock;

use crate::{Error, Result};

/// Key holding the JSON array of to-do items.
pub const ITEMS_KEY: &str = "@todo-list/items";

/// Key holding the chosen color scheme.
pub const COLOR_SCHEME_KEY: &str = "@todo-list/color-scheme";

/// Asynchronous string key-value storage.
pub trait KeyValueStore: Send + Sync + 'static {
    /// Value stored under `key`, or `None` if nothing was ever written.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<()>> + Send;
}

/// Stores each key as a JSON file inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(key)))
    }
}

/// Turn a namespaced key such as `@todo-list/items` into `todo-list_items`.
fn file_stem(key: &str) -> String {
    let stem: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = stem.trim_matches('_');
    if stem.is_empty() {
        "_".to_string()
    } else {
        stem.to_string()
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(Error::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let write_err = |source: std::io::Error| Error::Write {
            key: key.to_string(),
            source,
        };

        tokio::fs::create_dir_all(&self.dir).await.map_err(write_err)?;

        // Write beside the target and rename so readers never see a partial value.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await.map_err(write_err)?;
        tokio::fs::rename(&tmp, &path).await.map_err(write_err)?;

        tracing::trace!(key, path = %path.display(), "stored value");
        Ok(())
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}
