//! Session controller: the action surface a shell drives.
//!
//! Owns one [`CycleEngine`] and one [`SessionSync`] and enforces the
//! ordering between them: the countdown only runs against an open remote
//! record, and finishing requires one. The shell renders [`Snapshot`]s
//! and wires user actions to the methods here.

use chrono::Utc;
use serde::Serialize;

use crate::error::{CoreError, ValidationError};
use crate::events::Event;
use crate::sync::{RemoteSession, SessionId, SessionSync};
use crate::timer::{CycleEngine, CyclePhase};

/// Read-only render model for the shell.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: CyclePhase,
    pub phase_label: &'static str,
    /// Remaining time in the current phase, `mm:ss`.
    pub remaining: String,
    pub remaining_secs: u64,
    pub running: bool,
    pub completed_focus: u32,
    /// Accumulated session time, `mm:ss`.
    pub accumulated: String,
    pub accumulated_secs: u64,
    /// Whether the remote record is open (enables the finish action).
    pub session_open: bool,
    pub session_id: Option<SessionId>,
    pub label: String,
}

pub struct SessionController {
    engine: CycleEngine,
    sync: SessionSync,
    /// Session name sent when the record is opened. Kept here so a failed
    /// open never loses what the user entered.
    label: String,
}

impl SessionController {
    pub fn new(engine: CycleEngine, sync: SessionSync, label: impl Into<String>) -> Self {
        Self {
            engine,
            sync,
            label: label.into(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn engine(&self) -> &CycleEngine {
        &self.engine
    }

    pub fn session(&self) -> Option<&RemoteSession> {
        self.sync.session()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn snapshot(&self) -> Snapshot {
        let label = self
            .sync
            .session()
            .map(|s| s.label.clone())
            .unwrap_or_else(|| self.label.clone());
        Snapshot {
            phase: self.engine.phase(),
            phase_label: self.engine.phase().label(),
            remaining: format_mmss(self.engine.remaining_secs()),
            remaining_secs: self.engine.remaining_secs(),
            running: self.engine.is_running(),
            completed_focus: self.engine.completed_focus(),
            accumulated: format_mmss(self.engine.accumulated_secs()),
            accumulated_secs: self.engine.accumulated_secs(),
            session_open: self.sync.is_open(),
            session_id: self.sync.session().map(|s| s.session_id),
            label,
        }
    }

    // ── Actions ──────────────────────────────────────────────────────

    /// Start (or resume) the countdown, opening the remote record first
    /// when none exists. The engine only begins running after a
    /// successful open; a failed open leaves it paused and the label
    /// intact, and the next call retries the open.
    pub async fn start(&mut self) -> Result<Vec<Event>, CoreError> {
        let mut events = Vec::new();
        if !self.sync.is_open() {
            let opened = self.sync.open_if_needed(&self.label, Utc::now()).await?;
            events.push(Event::SessionOpened {
                session_id: opened.session_id,
                label: opened.label,
                at: Utc::now(),
            });
        }
        events.extend(self.engine.start());
        Ok(events)
    }

    /// Pause the countdown. Local only; never touches the network.
    pub fn pause(&mut self) -> Option<Event> {
        self.engine.pause()
    }

    /// Reset the current phase to its full duration (paused only).
    pub fn reset_current_phase(&mut self) -> Option<Event> {
        self.engine.reset_current_phase()
    }

    /// Forward one elapsed second to the engine.
    pub fn tick(&mut self) -> Option<Event> {
        self.engine.tick()
    }

    /// Close the remote record with the accumulated metrics.
    ///
    /// Requires an open record and nonzero accumulated time. On failure
    /// every local counter is preserved so the user may retry.
    pub async fn finish(&mut self, description: Option<&str>) -> Result<Event, CoreError> {
        let Some(session) = self.sync.session().filter(|_| self.sync.is_open()).cloned() else {
            return Err(ValidationError::SessionNotOpen.into());
        };
        let accumulated = self.engine.accumulated_secs();
        if accumulated == 0 {
            return Err(ValidationError::NoElapsedTime.into());
        }

        self.engine.pause();
        let minutes = duration_minutes(accumulated);
        let completed = self.engine.completed_focus() > 0;
        let description = match description {
            Some(d) => d.to_string(),
            None => format!(
                "{} ({} focus cycles)",
                session.label,
                self.engine.completed_focus()
            ),
        };

        self.sync
            .close(session.session_id, minutes, completed, &description)
            .await?;

        Ok(Event::SessionClosed {
            session_id: session.session_id,
            duration_minutes: minutes,
            completed,
            at: Utc::now(),
        })
    }

    /// Discard the closed session and prepare a fresh one. Rejected while
    /// the remote record is still open.
    pub fn reset_session(&mut self) -> Result<(), CoreError> {
        if self.sync.is_open() {
            return Err(ValidationError::SessionStillOpen.into());
        }
        self.engine = CycleEngine::new(self.engine.plan().clone());
        self.sync.reset();
        Ok(())
    }

    /// Split the controller back into the parts the shell persists.
    pub fn into_parts(self) -> (CycleEngine, Option<RemoteSession>, String) {
        let session = self.sync.session().cloned();
        (self.engine, session, self.label)
    }
}

/// Reported session length: ceiling minutes, floored at one.
pub(crate) fn duration_minutes(accumulated_secs: u64) -> u32 {
    accumulated_secs.div_ceil(60).max(1) as u32
}

/// Format seconds as `mm:ss`. Minutes are not capped at 60.
pub fn format_mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
