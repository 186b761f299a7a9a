//! Cycle engine implementation.
//!
//! The cycle engine is a tick-driven state machine. It owns no thread and
//! reads no wall clock - the caller invokes `tick()` once per elapsed
//! second while the countdown is running.
//!
//! ## Phase cycle
//!
//! ```text
//! Focus -> ShortBreak -> Focus -> ... -> LongBreak (every 4th focus) -> Focus
//! ```
//!
//! Every transition leaves the engine paused on the next phase; an explicit
//! `start()` is required to continue.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = CycleEngine::new(PhasePlan::default());
//! engine.start();
//! // Once per elapsed second:
//! engine.tick(); // Returns Some(Event::PhaseTransitioned) when a phase completes
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::phase::{CyclePhase, PhasePlan};
use crate::events::Event;

/// Core countdown/cycle state machine.
///
/// Performs no I/O; every operation is a total function over in-memory
/// state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleEngine {
    plan: PhasePlan,
    phase: CyclePhase,
    /// Remaining time in seconds for the current phase.
    remaining_secs: u64,
    running: bool,
    /// Focus phases fully completed since session start.
    completed_focus: u32,
    /// Total seconds ticked across all phases since session start.
    accumulated_secs: u64,
}

impl CycleEngine {
    /// Create a new engine: Focus phase, paused, full nominal duration.
    pub fn new(plan: PhasePlan) -> Self {
        let remaining_secs = plan.duration_secs(CyclePhase::Focus);
        Self {
            plan,
            phase: CyclePhase::Focus,
            remaining_secs,
            running: false,
            completed_focus: 0,
            accumulated_secs: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn plan(&self) -> &PhasePlan {
        &self.plan
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn completed_focus(&self) -> u32 {
        self.completed_focus
    }

    pub fn accumulated_secs(&self) -> u64 {
        self.accumulated_secs
    }

    /// 0.0 .. 1.0 progress within the current phase.
    pub fn phase_progress(&self) -> f64 {
        let total = self.plan.duration_secs(self.phase);
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs as f64 / total as f64)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start (or resume) the countdown. Never resets the remaining time.
    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None; // Already running.
        }
        self.running = true;
        Some(Event::TimerStarted {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None; // Already paused.
        }
        self.running = false;
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Apply one elapsed second. Returns `Some(Event::PhaseTransitioned)`
    /// when the current phase completes; the engine is then paused on the
    /// next phase and decrements no further within the same tick.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.accumulated_secs += 1;
        if self.remaining_secs == 0 {
            return Some(self.advance_phase());
        }
        None
    }

    /// Restore the current phase to its full nominal duration.
    /// Only permitted while paused; a no-op while running. Completed-focus
    /// and accumulated counters are untouched.
    pub fn reset_current_phase(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        self.remaining_secs = self.plan.duration_secs(self.phase);
        Some(Event::TimerReset {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Phase-transition rule. A completed focus phase counts toward the
    /// long-break cadence; either break returns to focus. The next phase
    /// starts paused with its full duration.
    fn advance_phase(&mut self) -> Event {
        let from = self.phase;
        let next = if from.is_focus() {
            self.completed_focus += 1;
            if self.completed_focus % self.plan.cycles_before_long_break == 0 {
                CyclePhase::LongBreak
            } else {
                CyclePhase::ShortBreak
            }
        } else {
            CyclePhase::Focus
        };
        self.phase = next;
        self.remaining_secs = self.plan.duration_secs(next);
        self.running = false;
        Event::PhaseTransitioned {
            from,
            to: next,
            completed_focus: self.completed_focus,
            next_duration_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(engine: &mut CycleEngine) -> Event {
        engine.start();
        loop {
            if let Some(event) = engine.tick() {
                return event;
            }
        }
    }

    #[test]
    fn initial_state_is_paused_focus() {
        let engine = CycleEngine::new(PhasePlan::default());
        assert_eq!(engine.phase(), CyclePhase::Focus);
        assert_eq!(engine.remaining_secs(), 1500);
        assert!(!engine.is_running());
        assert_eq!(engine.completed_focus(), 0);
        assert_eq!(engine.accumulated_secs(), 0);
    }

    #[test]
    fn start_pause_resume() {
        let mut engine = CycleEngine::new(PhasePlan::default());

        assert!(engine.start().is_some());
        assert!(engine.is_running());
        assert!(engine.start().is_none()); // no-op while running

        assert!(engine.pause().is_some());
        assert!(!engine.is_running());
        assert!(engine.pause().is_none()); // no-op while paused

        engine.tick();
        engine.tick();
        assert_eq!(engine.accumulated_secs(), 0); // paused engine ignores ticks

        assert!(engine.start().is_some());
        assert_eq!(engine.remaining_secs(), 1500); // resume does not reset
    }

    #[test]
    fn tick_decrements_and_accumulates() {
        let mut engine = CycleEngine::new(PhasePlan::default());
        engine.start();
        for _ in 0..10 {
            assert!(engine.tick().is_none());
        }
        assert_eq!(engine.remaining_secs(), 1490);
        assert_eq!(engine.accumulated_secs(), 10);
    }

    #[test]
    fn focus_completion_transitions_to_short_break() {
        let mut engine = CycleEngine::new(PhasePlan::default());
        engine.start();
        let mut completion = None;
        for _ in 0..1500 {
            completion = engine.tick();
        }
        match completion {
            Some(Event::PhaseTransitioned { from, to, completed_focus, next_duration_secs, .. }) => {
                assert_eq!(from, CyclePhase::Focus);
                assert_eq!(to, CyclePhase::ShortBreak);
                assert_eq!(completed_focus, 1);
                assert_eq!(next_duration_secs, 300);
            }
            other => panic!("Expected PhaseTransitioned, got {other:?}"),
        }
        assert_eq!(engine.phase(), CyclePhase::ShortBreak);
        assert_eq!(engine.remaining_secs(), 300);
        assert!(!engine.is_running());
        assert_eq!(engine.completed_focus(), 1);
        assert_eq!(engine.accumulated_secs(), 1500);
    }

    #[test]
    fn long_break_every_fourth_focus() {
        let mut engine = CycleEngine::new(PhasePlan::default());
        for expected_count in 1..=4u32 {
            let event = run_to_completion(&mut engine); // focus phase
            match event {
                Event::PhaseTransitioned { to, completed_focus, .. } => {
                    assert_eq!(completed_focus, expected_count);
                    if expected_count == 4 {
                        assert_eq!(to, CyclePhase::LongBreak);
                    } else {
                        assert_eq!(to, CyclePhase::ShortBreak);
                    }
                }
                other => panic!("Expected PhaseTransitioned, got {other:?}"),
            }
            let event = run_to_completion(&mut engine); // break phase
            match event {
                Event::PhaseTransitioned { to, completed_focus, .. } => {
                    assert_eq!(to, CyclePhase::Focus);
                    assert_eq!(completed_focus, expected_count); // breaks don't count
                }
                other => panic!("Expected PhaseTransitioned, got {other:?}"),
            }
        }
    }

    #[test]
    fn breaks_return_to_focus() {
        let mut engine = CycleEngine::new(PhasePlan::new(2, 3, 5, 4).unwrap());
        run_to_completion(&mut engine);
        assert_eq!(engine.phase(), CyclePhase::ShortBreak);
        run_to_completion(&mut engine);
        assert_eq!(engine.phase(), CyclePhase::Focus);
        assert_eq!(engine.remaining_secs(), 2);
    }

    #[test]
    fn reset_restores_duration_while_paused() {
        let mut engine = CycleEngine::new(PhasePlan::default());
        engine.start();
        for _ in 0..100 {
            engine.tick();
        }
        engine.pause();

        assert!(engine.reset_current_phase().is_some());
        assert_eq!(engine.remaining_secs(), 1500);
        assert_eq!(engine.accumulated_secs(), 100); // counters untouched
        assert_eq!(engine.completed_focus(), 0);
    }

    #[test]
    fn reset_is_noop_while_running() {
        let mut engine = CycleEngine::new(PhasePlan::default());
        engine.start();
        for _ in 0..100 {
            engine.tick();
        }
        assert!(engine.reset_current_phase().is_none());
        assert_eq!(engine.remaining_secs(), 1400);
        assert!(engine.is_running());
    }

    #[test]
    fn transition_requires_explicit_restart() {
        let mut engine = CycleEngine::new(PhasePlan::new(2, 3, 5, 4).unwrap());
        run_to_completion(&mut engine);
        assert!(!engine.is_running());
        assert!(engine.tick().is_none()); // paused after the transition
        assert_eq!(engine.remaining_secs(), 3);
    }
}
