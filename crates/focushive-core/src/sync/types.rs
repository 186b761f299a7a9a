//! Core types for remote session synchronization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend-assigned identifier for a durable session record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub i64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The durable, server-side representation of one timer-usage session.
/// Opened at first start, closed exactly once at finish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteSession {
    pub session_id: SessionId,
    /// When the record was opened.
    pub started_at: DateTime<Utc>,
    /// User-supplied session name, immutable once the record is opened.
    pub label: String,
}

/// Sync error types. All are non-fatal; the caller decides whether to
/// retry or abandon. There is no automatic retry in the sync layer.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Server rejected the request (HTTP {status}): {message}")]
    ServerRejected { status: u16, message: String },
}

impl SyncError {
    /// Whether retrying the same request can succeed. A rejection is
    /// terminal (e.g. the record is unknown or already closed); transport
    /// failures are worth retrying.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, SyncError::ServerRejected { .. })
    }
}
