//! Remote persistence adapter: at most one open and one close per
//! session attempt.

use chrono::{DateTime, Utc};

use super::client::SessionClient;
use super::types::{RemoteSession, SessionId, SyncError};

/// Owns the `RemoteSession` and is the only component that mutates it.
///
/// All methods take `&mut self`, so an open can never overlap another
/// open for the same session attempt; a repeated call while a record
/// already exists returns it without touching the network.
#[derive(Debug)]
pub struct SessionSync {
    client: SessionClient,
    session: Option<RemoteSession>,
    closed: bool,
}

impl SessionSync {
    pub fn new(client: SessionClient) -> Self {
        Self {
            client,
            session: None,
            closed: false,
        }
    }

    /// Rebuild from state persisted by the shell. A restored session is
    /// considered open (a closed one is never persisted).
    pub fn with_session(client: SessionClient, session: Option<RemoteSession>) -> Self {
        Self {
            client,
            session,
            closed: false,
        }
    }

    pub fn session(&self) -> Option<&RemoteSession> {
        self.session.as_ref()
    }

    /// Whether a record exists and has not been closed yet.
    pub fn is_open(&self) -> bool {
        self.session.is_some() && !self.closed
    }

    /// Open the remote record unless one already exists.
    ///
    /// Triggered by the first start. On failure the record stays absent,
    /// so the next call retries the create request; the caller must not
    /// let the countdown run against an unopened record.
    pub async fn open_if_needed(
        &mut self,
        label: &str,
        started_at: DateTime<Utc>,
    ) -> Result<RemoteSession, SyncError> {
        if let Some(ref session) = self.session {
            return Ok(session.clone());
        }
        let session_id = self.client.create_session(label, started_at).await?;
        let session = RemoteSession {
            session_id,
            started_at,
            label: label.to_string(),
        };
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Close the record with the final session metrics.
    ///
    /// On failure the record stays open and untouched so the caller may
    /// retry; idempotency of a retried close is the backend's contract.
    pub async fn close(
        &mut self,
        session_id: SessionId,
        duration_minutes: u32,
        completed: bool,
        description: &str,
    ) -> Result<(), SyncError> {
        self.client
            .close_session(session_id, duration_minutes, completed, description)
            .await?;
        if self.session.as_ref().map(|s| s.session_id) == Some(session_id) {
            self.closed = true;
        }
        Ok(())
    }

    /// Forget the closed record so a fresh attempt can begin.
    pub fn reset(&mut self) {
        self.session = None;
        self.closed = false;
    }
}
