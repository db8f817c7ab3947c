//! Unified error type system for the cvdesk résumé engine.
//!
//! This module provides a centralized error handling approach, replacing
//! scattered String-based error returns with a typed `AppError` enum.

use std::fmt;

/// Unified application error type.
///
/// This enum represents all possible error scenarios across the crate,
/// organized by domain (Storage, Serialization, State, Io).
#[derive(Debug, Clone)]
pub enum AppError {
    /// Durable store errors (file system writes, data directory resolution)
    Storage(String),

    /// Serialization/deserialization errors for stored payloads
    Serialization(String),

    /// Lifecycle errors (operation not valid in the current phase or edit mode)
    State(String),

    /// I/O errors (file read/write, permissions)
    Io(String),

    /// Generic/internal errors that don't fit other categories
    Internal(String),
}

impl AppError {
    /// Create a storage error with a message.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a serialization error with a message.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a state error with a message.
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Create an I/O error with a message.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Create an internal error with a message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the error message as a string slice.
    pub fn message(&self) -> &str {
        match self {
            AppError::Storage(msg) => msg,
            AppError::Serialization(msg) => msg,
            AppError::State(msg) => msg,
            AppError::Io(msg) => msg,
            AppError::Internal(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            AppError::State(msg) => write!(f, "State error: {}", msg),
            AppError::Io(msg) => write!(f, "I/O error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Convert from `anyhow::Error` to `AppError`.
///
/// Preserves the error message and categorizes anyhow errors as internal.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert from `std::io::Error` to `AppError`.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::io(err.to_string())
    }
}

/// Convert from `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::serialization(format!("JSON error: {}", err))
    }
}

/// Type alias for Result with AppError.
///
/// This simplifies function signatures throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
