use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::RwLock;

/// Durable key-value storage for client side preferences.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_value(&self, key: &str) -> Result<Option<Value>, PreferenceError>;

    async fn set_value(&self, key: &str, value: Value) -> Result<(), PreferenceError>;

    async fn remove(&self, key: &str) -> Result<(), PreferenceError>;
}

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("{source} ({})", .path.display())]
    Io { source: io::Error, path: PathBuf },
    #[error("invalid preference value: {0}")]
    Json(#[from] serde_json::Error),
}

/// Keeps the values for as long as the process lives.
#[derive(Default, Debug)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_value(&self, key: &str) -> Result<Option<Value>, PreferenceError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set_value(&self, key: &str, value: Value) -> Result<(), PreferenceError> {
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn memory_store_sets_gets_and_removes() -> Result<(), PreferenceError> {
        let store = MemoryStore::new();

        assert_eq!(store.get_value("theme").await?, None);

        store.set_value("theme", json!("dark")).await?;
        assert_eq!(store.get_value("theme").await?, Some(json!("dark")));

        store.remove("theme").await?;
        assert_eq!(store.get_value("theme").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn removing_a_missing_key_is_fine() -> Result<(), PreferenceError> {
        MemoryStore::new().remove("missing").await
    }
}
