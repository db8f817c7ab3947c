pub mod storage_trait;

pub use storage_trait::{load_typed, save_typed, DurableStore};
