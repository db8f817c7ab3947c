//! In-memory durable store double.
//!
//! Same contract as `FileStore` without touching the file system; zero
//! latency unless configured otherwise. Useful for tests and embedders that
//! manage persistence themselves.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tokio::time::sleep;

use super::StoreLatency;
use crate::error::Result;
use crate::interface::DurableStore;

/// Key-value store backed by a HashMap.
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
    latency: StoreLatency,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_latency(StoreLatency::none())
    }

    pub fn with_latency(latency: StoreLatency) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            latency,
        }
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Peek at a stored value without the load path (test helper).
    pub async fn raw_get(&self, key: &str) -> Option<Value> {
        self.entries.read().await.get(key).cloned()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DurableStore for MemoryStore {
    async fn save(&self, key: &str, value: Value) -> Result<Value> {
        sleep(self.latency.save).await;
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.clone());
        Ok(value)
    }

    async fn load(&self, key: &str, default: Value) -> Result<Value> {
        sleep(self.latency.load).await;
        Ok(self
            .entries
            .read()
            .await
            .get(key)
            .cloned()
            .unwrap_or(default))
    }
}
