use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{KeyValueStorage, StorageError};

/// Storage backed by a single JSON object file mapping keys to string values.
///
/// Writes go to a sibling temp file that is then renamed over the original,
/// so a crash mid-write leaves the previous contents intact.
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(StorageError::Read(err)),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(StorageError::Encoding)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        // A corrupt file is replaced rather than blocking every later write.
        let mut entries = match self.read_entries().await {
            Ok(entries) => entries,
            Err(StorageError::Encoding(err)) => {
                tracing::warn!(path = %self.path.display(), error = %err, "discarding corrupt storage file");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), value.to_string());
        let encoded = serde_json::to_vec_pretty(&entries).map_err(StorageError::Encoding)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(StorageError::Write)?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, encoded)
            .await
            .map_err(StorageError::Write)?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(StorageError::Write)?;

        tracing::debug!(path = %self.path.display(), key, "storage entry written");
        Ok(())
    }
}
