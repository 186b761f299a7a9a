//! Core error types for focushive-core.
//!
//! This module defines the error hierarchy using thiserror. Network
//! failures live in [`crate::sync::SyncError`] and are wrapped here.

use std::path::PathBuf;
use thiserror::Error;

use crate::sync::SyncError;

/// Core error type for focushive-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Remote session sync errors
    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Data directory could not be resolved or created
    #[error("Failed to prepare data directory: {0}")]
    DataDir(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Finishing requires an open remote record
    #[error("No open session; start the timer before finishing")]
    SessionNotOpen,

    /// Finishing with zero accumulated time is rejected locally
    #[error("Session has no elapsed time to report")]
    NoElapsedTime,

    /// A new session may only begin once the previous record is closed
    #[error("Remote session is still open; finish it before starting over")]
    SessionStillOpen,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
