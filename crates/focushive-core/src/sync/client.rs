//! HTTP client for the study-session records API.
//!
//! The wire shape is owned by the backend; request and response field
//! names follow its schema and are mapped via serde renames.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use super::types::{SessionId, SyncError};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the remote session-records API.
#[derive(Debug, Clone)]
pub struct SessionClient {
    http: Client,
    base_url: Url,
    user_id: i64,
    method_id: i64,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
struct CreateSessionBody<'a> {
    user_id: i64,
    #[serde(rename = "metodo_id")]
    method_id: i64,
    #[serde(rename = "fecha_inicio")]
    started_at: DateTime<Utc>,
    #[serde(rename = "descripcion")]
    description: &'a str,
}

#[derive(Debug, Deserialize)]
struct SessionCreated {
    session_id: SessionId,
}

#[derive(Debug, Serialize)]
struct CloseSessionBody<'a> {
    #[serde(rename = "duracion_minutos")]
    duration_minutes: u32,
    #[serde(rename = "fue_completada")]
    completed: bool,
    #[serde(rename = "descripcion")]
    description: &'a str,
}

/// A session record as returned by the history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub user_id: i64,
    #[serde(rename = "metodo_id")]
    pub method_id: i64,
    #[serde(rename = "fecha_inicio")]
    pub started_at: DateTime<Utc>,
    #[serde(rename = "duracion_minutos")]
    pub duration_minutes: u32,
    #[serde(rename = "fue_completada")]
    pub completed: bool,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}

impl SessionClient {
    /// Create a client for the API at `base_url`. The user and method ids
    /// are carried on every created record; `timeout_secs` bounds each
    /// request.
    pub fn new(base_url: Url, user_id: i64, method_id: i64, timeout_secs: u64) -> Self {
        Self {
            http: Client::new(),
            base_url,
            user_id,
            method_id,
            timeout: Duration::from_secs(timeout_secs.max(1)),
        }
    }

    /// Open a new session record. Returns the backend-assigned id.
    pub async fn create_session(
        &self,
        label: &str,
        started_at: DateTime<Utc>,
    ) -> Result<SessionId, SyncError> {
        let url = format!("{}/sessions", self.base());
        let body = CreateSessionBody {
            user_id: self.user_id,
            method_id: self.method_id,
            started_at,
            description: label,
        };
        let resp = self
            .http
            .post(&url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let resp = check_status(resp).await?;
        let created: SessionCreated = resp.json().await.map_err(|e| self.transport_error(e))?;
        Ok(created.session_id)
    }

    /// Close an open session record with the final metrics.
    pub async fn close_session(
        &self,
        session_id: SessionId,
        duration_minutes: u32,
        completed: bool,
        description: &str,
    ) -> Result<(), SyncError> {
        let url = format!("{}/sessions/{}", self.base(), session_id);
        let body = CloseSessionBody {
            duration_minutes,
            completed,
            description,
        };
        let resp = self
            .http
            .put(&url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        check_status(resp).await?;
        Ok(())
    }

    /// Fetch the session history for the configured user, newest first.
    pub async fn list_sessions(&self) -> Result<Vec<SessionRecord>, SyncError> {
        let url = format!("{}/sessions/users/{}/sessions", self.base(), self.user_id);
        let resp = self
            .http
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let resp = check_status(resp).await?;
        resp.json().await.map_err(|e| self.transport_error(e))
    }

    fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    fn transport_error(&self, err: reqwest::Error) -> SyncError {
        if err.is_timeout() {
            SyncError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            SyncError::NetworkUnreachable(err.to_string())
        }
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, SyncError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    Err(SyncError::ServerRejected {
        status: status.as_u16(),
        message,
    })
}
