//! Property tests for the cycle engine invariants.

use proptest::prelude::*;

use focushive_core::timer::{CycleEngine, PhasePlan};

proptest! {
    /// Accumulated time equals the number of applied ticks, and the
    /// remaining time never exceeds the current phase's nominal duration.
    #[test]
    fn accumulated_matches_applied_ticks(ticks in 0u64..5_000) {
        let mut engine = CycleEngine::new(PhasePlan::default());
        engine.start();
        for applied in 1..=ticks {
            if !engine.is_running() {
                engine.start(); // acknowledge the phase transition
            }
            engine.tick();
            prop_assert!(
                engine.remaining_secs() <= engine.plan().duration_secs(engine.phase())
            );
            prop_assert_eq!(engine.accumulated_secs(), applied);
        }
    }

    /// A paused engine ignores ticks entirely.
    #[test]
    fn paused_engine_ignores_ticks(ticks in 0u64..500) {
        let mut engine = CycleEngine::new(PhasePlan::default());
        for _ in 0..ticks {
            prop_assert!(engine.tick().is_none());
        }
        prop_assert_eq!(engine.remaining_secs(), 1500);
        prop_assert_eq!(engine.accumulated_secs(), 0);
    }

    /// The focus counter only moves on completed focus phases, whatever
    /// the plan durations are.
    #[test]
    fn focus_counter_tracks_completed_focus_phases(
        focus in 1u64..30,
        short in 1u64..30,
        long in 1u64..30,
        phases in 1u32..12,
    ) {
        let mut engine = CycleEngine::new(PhasePlan::new(focus, short, long, 4).unwrap());
        let mut focus_completions = 0u32;
        for _ in 0..phases {
            let was_focus = engine.phase().is_focus();
            engine.start();
            while engine.is_running() {
                engine.tick();
            }
            if was_focus {
                focus_completions += 1;
            }
            prop_assert_eq!(engine.completed_focus(), focus_completions);
        }
    }

    /// Reset while paused restores the nominal duration and never touches
    /// the counters.
    #[test]
    fn reset_preserves_counters(ticks in 1u64..1_499) {
        let mut engine = CycleEngine::new(PhasePlan::default());
        engine.start();
        for _ in 0..ticks {
            engine.tick();
        }
        engine.pause();
        let accumulated = engine.accumulated_secs();

        engine.reset_current_phase();

        prop_assert_eq!(engine.remaining_secs(), 1500);
        prop_assert_eq!(engine.accumulated_secs(), accumulated);
        prop_assert_eq!(engine.completed_focus(), 0);
    }
}
