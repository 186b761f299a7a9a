use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sync::SessionId;
use crate::timer::CyclePhase;

/// Every state change in the core produces an Event.
/// The shell renders them; nothing in the core presents UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        phase: CyclePhase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        phase: CyclePhase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A phase ran to completion. The engine is left paused on the next
    /// phase; an explicit start is required to continue.
    PhaseTransitioned {
        from: CyclePhase,
        to: CyclePhase,
        completed_focus: u32,
        next_duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// The remote session record was created.
    SessionOpened {
        session_id: SessionId,
        label: String,
        at: DateTime<Utc>,
    },
    /// The remote session record was closed with final metrics.
    SessionClosed {
        session_id: SessionId,
        duration_minutes: u32,
        completed: bool,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_tagged_by_type() {
        let event = Event::PhaseTransitioned {
            from: CyclePhase::Focus,
            to: CyclePhase::ShortBreak,
            completed_focus: 1,
            next_duration_secs: 300,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "PhaseTransitioned");
        assert_eq!(json["from"], "focus");
        assert_eq!(json["to"], "short_break");
    }

    #[test]
    fn session_closed_roundtrip() {
        let event = Event::SessionClosed {
            session_id: SessionId(42),
            duration_minutes: 30,
            completed: true,
            at: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let parsed: Event = serde_json::from_str(&json).unwrap();
        match parsed {
            Event::SessionClosed { session_id, duration_minutes, completed, .. } => {
                assert_eq!(session_id, SessionId(42));
                assert_eq!(duration_minutes, 30);
                assert!(completed);
            }
            _ => panic!("Expected SessionClosed"),
        }
    }
}
