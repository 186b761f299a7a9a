//! Remote session synchronization layer.
//!
//! Bridges local timer activity to a durable session record on the
//! study-session API: one open at first start, one close at finish.
//! Pause and resume never touch the network.

pub mod client;
pub mod session_sync;
pub mod types;

pub use client::{SessionClient, SessionRecord, DEFAULT_TIMEOUT_SECS};
pub use session_sync::SessionSync;
pub use types::{RemoteSession, SessionId, SyncError};
