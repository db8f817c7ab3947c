//! File-backed durable store.
//!
//! One pretty-printed JSON file per key under a storage directory. This is
//! the production adapter; it outlives the process the way browser local
//! storage outlives a tab.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::time::sleep;

use super::StoreLatency;
use crate::config::get_data_dir;
use crate::error::{AppError, Result};
use crate::interface::DurableStore;

/// Durable key-value store persisting each key as `<dir>/<key>.json`.
pub struct FileStore {
    storage_dir: PathBuf,
    latency: StoreLatency,
}

impl FileStore {
    /// Create a store rooted at `storage_dir`, with the default simulated
    /// latency. The directory is created if missing.
    pub fn new(storage_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::with_latency(storage_dir, StoreLatency::default())
    }

    /// Create a store rooted at `storage_dir` with explicit latency.
    pub fn with_latency(storage_dir: impl Into<PathBuf>, latency: StoreLatency) -> Result<Self> {
        let storage_dir = storage_dir.into();
        if !storage_dir.exists() {
            std::fs::create_dir_all(&storage_dir)
                .map_err(|e| AppError::storage(format!("cannot create {:?}: {}", storage_dir, e)))?;
        }
        Ok(Self {
            storage_dir,
            latency,
        })
    }

    /// Create a store under the per-user cvdesk data directory.
    pub fn open_default() -> Result<Self> {
        let dir = get_data_dir()?;
        info!("opening file store at {:?}", dir);
        Self::new(dir)
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.storage_dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl DurableStore for FileStore {
    async fn save(&self, key: &str, value: Value) -> Result<Value> {
        sleep(self.latency.save).await;

        let path = self.path_for(key);
        let payload = serde_json::to_string_pretty(&value)?;
        fs::write(&path, payload)
            .await
            .map_err(|e| AppError::storage(format!("cannot write {:?}: {}", path, e)))?;

        debug!("saved key '{}' to {:?}", key, path);
        Ok(value)
    }

    async fn load(&self, key: &str, default: Value) -> Result<Value> {
        sleep(self.latency.load).await;

        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("key '{}' absent, using default", key);
                return Ok(default);
            }
            Err(e) => {
                return Err(AppError::storage(format!(
                    "cannot read {:?}: {}",
                    path, e
                )))
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                // Corrupted payloads fail open so hydration never stalls.
                warn!("corrupt JSON under key '{}', using default: {}", key, e);
                Ok(default)
            }
        }
    }
}
