//! 本地设置存储
//!
//! Key/value settings that outlive a single run: the theme flag and the
//! backend's session cookies. Consumers receive a `SettingsStore` handle
//! instead of touching the file directly.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::errors::{LinkfrontError, Result};

/// Persistent key/value settings.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    fn name(&self) -> &'static str;
}

/// JSON file backed store.
///
/// The whole map is rewritten on every change; the file is small.
pub struct FileSettingsStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileSettingsStore {
    /// Open the store, reading existing entries if the file exists.
    ///
    /// An unreadable or corrupt file is logged and treated as empty so
    /// a broken settings file never blocks the UI.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(map) => map,
                Err(e) => {
                    warn!("Ignoring corrupt settings file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("Failed to read settings file {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        debug!(
            "Settings store opened at {} ({} entries)",
            path.display(),
            entries.len()
        );

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    pub fn arc<P: AsRef<Path>>(path: P) -> Arc<dyn SettingsStore> {
        Arc::new(Self::open(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content).map_err(|e| {
            LinkfrontError::storage(format!(
                "Failed to write settings file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    // 先写文件，成功后才更新内存
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        if entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

/// Process-local store, nothing is written to disk.
#[derive(Default)]
pub struct MemorySettingsStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<dyn SettingsStore> {
        Arc::new(Self::new())
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.get("darkmode"), None);
        store.set("darkmode", "active").unwrap();
        assert_eq!(store.get("darkmode").as_deref(), Some("active"));
        store.remove("darkmode").unwrap();
        assert_eq!(store.get("darkmode"), None);
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let store = FileSettingsStore::open(&path);
        store.set("darkmode", "active").unwrap();
        assert!(path.exists());

        let reopened = FileSettingsStore::open(&path);
        assert_eq!(reopened.get("darkmode").as_deref(), Some("active"));

        reopened.remove("darkmode").unwrap();
        let again = FileSettingsStore::open(&path);
        assert_eq!(again.get("darkmode"), None);
    }

    #[test]
    fn test_file_store_ignores_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileSettingsStore::open(&path);
        assert_eq!(store.get("darkmode"), None);
        // 写入会覆盖损坏的文件
        store.set("darkmode", "active").unwrap();
        assert_eq!(
            FileSettingsStore::open(&path).get("darkmode").as_deref(),
            Some("active")
        );
    }

    #[test]
    fn test_failed_write_leaves_entries_unchanged() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        // 父路径是普通文件，写入必然失败
        let store = FileSettingsStore::open(blocker.join("state.json"));

        assert!(store.set("darkmode", "active").is_err());
        assert_eq!(store.get("darkmode"), None);
    }

    #[test]
    fn test_failed_remove_keeps_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        let store = FileSettingsStore::open(&path);
        store.set("darkmode", "active").unwrap();

        // 用目录占住文件路径，之后的写入失败
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        assert!(store.remove("darkmode").is_err());
        assert_eq!(store.get("darkmode").as_deref(), Some("active"));
    }

    #[test]
    fn test_remove_missing_key_does_not_create_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        let store = FileSettingsStore::open(&path);
        store.remove("absent").unwrap();
        assert!(!path.exists());
    }
}
