pub mod file_store;
pub mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use std::time::Duration;

/// Simulated I/O latency for a durable store.
///
/// Writes to real local storage are not free; the adapter models that cost so
/// the rest of the system is honest about suspension points. Zero both fields
/// for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLatency {
    pub save: Duration,
    pub load: Duration,
}

impl StoreLatency {
    /// No artificial delay.
    pub fn none() -> Self {
        Self {
            save: Duration::ZERO,
            load: Duration::ZERO,
        }
    }
}

impl Default for StoreLatency {
    fn default() -> Self {
        Self {
            save: Duration::from_millis(500),
            load: Duration::from_millis(300),
        }
    }
}
