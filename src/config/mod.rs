//! Data directory resolution.

use std::env;
use std::path::PathBuf;

use crate::error::{AppError, Result};

/// Environment variable overriding the store location, mainly for tests and
/// portable setups.
pub const DATA_DIR_ENV: &str = "CVDESK_DATA_DIR";

/// Get the directory the file store lives in.
///
/// Returns:
///
/// - the `CVDESK_DATA_DIR` override when set
/// - otherwise `cvdesk` under the per-user config directory
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let base_dir = dirs::config_dir()
        .ok_or_else(|| AppError::storage("could not find the user config directory"))?;
    Ok(base_dir.join("cvdesk"))
}
