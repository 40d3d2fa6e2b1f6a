use crate::preferences::{KeyValueStore, PreferenceError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Stores all values in a single JSON object file. A missing file is an empty store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Map<String, Value>, PreferenceError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(Map::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(err) => Err(self.io_error(err)),
        }
    }

    async fn write(&self, values: &Map<String, Value>) -> Result<(), PreferenceError> {
        let content = serde_json::to_string_pretty(values)?;
        let temporary = self.path.with_extension("tmp");

        fs::write(&temporary, content).await.map_err(|e| self.io_error(e))?;
        fs::rename(&temporary, &self.path).await.map_err(|e| self.io_error(e))?;
        Ok(())
    }

    /// Applies `change` to the stored values while holding the write lock.
    async fn update<F>(&self, change: F) -> Result<(), PreferenceError>
    where
        F: FnOnce(&mut Map<String, Value>) + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut values = self.read().await?;
        change(&mut values);
        self.write(&values).await
    }

    fn io_error(&self, source: std::io::Error) -> PreferenceError {
        PreferenceError::Io {
            source,
            path: self.path.clone(),
        }
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get_value(&self, key: &str) -> Result<Option<Value>, PreferenceError> {
        Ok(self.read().await?.remove(key))
    }

    #[instrument(skip(self, value), fields(path = %self.path.display()))]
    async fn set_value(&self, key: &str, value: Value) -> Result<(), PreferenceError> {
        self.update(|values| {
            values.insert(key.to_string(), value);
        })
        .await?;
        debug!("💾 Stored '{}'", key);
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        self.update(|values| {
            values.remove(key);
        })
        .await?;
        debug!("💾 Removed '{}'", key);
        Ok(())
    }
}
