//! The durable key-value storage seam.
//!
//! Implementations wrap a persistent local medium (one JSON value per key)
//! behind an async `save`/`load` pair. A missing key is a normal case, never
//! an error: `load` resolves with the caller-supplied default.

use async_trait::async_trait;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Async key-value store for JSON-serializable section values.
#[async_trait]
pub trait DurableStore: Send + Sync {
    /// Persist `value` under `key`, resolving with the stored value.
    async fn save(&self, key: &str, value: Value) -> Result<Value>;

    /// Load the value under `key`, resolving with `default` if the key is
    /// absent or the stored bytes cannot be parsed.
    async fn load(&self, key: &str, default: Value) -> Result<Value>;
}

/// Serialize a typed section value and persist it under `key`.
pub async fn save_typed<T>(store: &dyn DurableStore, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(value)?;
    store.save(key, value).await?;
    Ok(())
}

/// Load a typed section value, falling open to `default` on every failure.
///
/// Absence, store errors and shape mismatches all degrade to the default so
/// hydration can never be blocked by one bad key.
pub async fn load_typed<T>(store: &dyn DurableStore, key: &str, default: T) -> T
where
    T: Serialize + DeserializeOwned,
{
    let fallback = match serde_json::to_value(&default) {
        Ok(value) => value,
        Err(e) => {
            warn!("default for key '{}' is not serializable: {}", key, e);
            return default;
        }
    };

    match store.load(key, fallback).await {
        Ok(value) => match serde_json::from_value(value) {
            Ok(typed) => typed,
            Err(e) => {
                warn!(
                    "stored value under '{}' has an unexpected shape, using default: {}",
                    key, e
                );
                default
            }
        },
        Err(e) => {
            warn!("failed to load '{}', using default: {}", key, e);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStore;

    #[tokio::test]
    async fn test_typed_round_trip() {
        let store = MemoryStore::new();
        save_typed(&store, "skills", &vec!["React", "Rust"])
            .await
            .unwrap();

        let loaded: Vec<String> = load_typed(&store, "skills", Vec::new()).await;
        assert_eq!(loaded, vec!["React", "Rust"]);
    }

    #[tokio::test]
    async fn test_load_typed_absent_key_yields_default() {
        let store = MemoryStore::new();
        let loaded: Vec<String> = load_typed(&store, "missing", vec!["fallback".to_string()]).await;
        assert_eq!(loaded, vec!["fallback"]);
    }

    #[tokio::test]
    async fn test_load_typed_shape_mismatch_yields_default() {
        let store = MemoryStore::new();
        // store a string where a list is expected
        save_typed(&store, "education", "not a list").await.unwrap();

        let loaded: Vec<u32> = load_typed(&store, "education", vec![7]).await;
        assert_eq!(loaded, vec![7]);
    }
}
