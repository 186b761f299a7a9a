//! On-disk shell state: the serializable half of the session controller.
//!
//! The core engine is tick-driven and never reads the wall clock; the
//! shell is the clock. Between invocations the elapsed wall time is
//! replayed as discrete ticks on load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use focushive_core::events::Event;
use focushive_core::storage::data_dir;
use focushive_core::sync::RemoteSession;
use focushive_core::timer::CycleEngine;

const STATE_FILE: &str = "session_state.json";

#[derive(Debug, Serialize, Deserialize)]
pub struct ShellState {
    pub engine: CycleEngine,
    pub remote: Option<RemoteSession>,
    pub label: String,
    /// Wall-clock time of the last save.
    pub saved_at: DateTime<Utc>,
}

pub fn load() -> Result<Option<ShellState>, Box<dyn std::error::Error>> {
    let path = data_dir()?.join(STATE_FILE);
    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
        Err(_) => Ok(None),
    }
}

pub fn save(state: &ShellState) -> Result<(), Box<dyn std::error::Error>> {
    let path = data_dir()?.join(STATE_FILE);
    let json = serde_json::to_string(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Replay elapsed wall-clock seconds as discrete ticks.
///
/// Stops at the first phase transition: the engine pauses itself there
/// and waits for an explicit start, so later seconds never tick.
pub fn replay_elapsed(
    engine: &mut CycleEngine,
    saved_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<Event> {
    let elapsed = (now - saved_at).num_seconds().max(0) as u64;
    for _ in 0..elapsed {
        if !engine.is_running() {
            return None;
        }
        if let Some(event) = engine.tick() {
            return Some(event);
        }
    }
    None
}
