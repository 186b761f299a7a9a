use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    Focus,
    ShortBreak,
    LongBreak,
}

impl CyclePhase {
    /// Human-readable phase name for rendering.
    pub fn label(&self) -> &'static str {
        match self {
            CyclePhase::Focus => "Focus",
            CyclePhase::ShortBreak => "Short Break",
            CyclePhase::LongBreak => "Long Break",
        }
    }

    pub fn is_focus(&self) -> bool {
        matches!(self, CyclePhase::Focus)
    }
}

/// Nominal phase durations and the long-break cadence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhasePlan {
    /// Focus duration in seconds.
    pub focus_secs: u64,
    /// Short break duration in seconds.
    pub short_break_secs: u64,
    /// Long break duration in seconds.
    pub long_break_secs: u64,
    /// A long break replaces the short one every Nth completed focus phase.
    pub cycles_before_long_break: u32,
}

impl PhasePlan {
    /// Build a plan, rejecting zero durations and a zero cadence.
    pub fn new(
        focus_secs: u64,
        short_break_secs: u64,
        long_break_secs: u64,
        cycles_before_long_break: u32,
    ) -> Result<Self, ValidationError> {
        let check = |field: &str, value: u64| {
            if value == 0 {
                Err(ValidationError::InvalidValue {
                    field: field.to_string(),
                    message: "must be greater than zero".to_string(),
                })
            } else {
                Ok(())
            }
        };
        check("focus_secs", focus_secs)?;
        check("short_break_secs", short_break_secs)?;
        check("long_break_secs", long_break_secs)?;
        check("cycles_before_long_break", u64::from(cycles_before_long_break))?;
        Ok(Self {
            focus_secs,
            short_break_secs,
            long_break_secs,
            cycles_before_long_break,
        })
    }

    /// Nominal duration of a phase in seconds.
    pub fn duration_secs(&self, phase: CyclePhase) -> u64 {
        match phase {
            CyclePhase::Focus => self.focus_secs,
            CyclePhase::ShortBreak => self.short_break_secs,
            CyclePhase::LongBreak => self.long_break_secs,
        }
    }
}

impl Default for PhasePlan {
    fn default() -> Self {
        Self {
            focus_secs: 25 * 60,
            short_break_secs: 5 * 60,
            long_break_secs: 15 * 60,
            cycles_before_long_break: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_durations() {
        let plan = PhasePlan::default();
        assert_eq!(plan.duration_secs(CyclePhase::Focus), 1500);
        assert_eq!(plan.duration_secs(CyclePhase::ShortBreak), 300);
        assert_eq!(plan.duration_secs(CyclePhase::LongBreak), 900);
        assert_eq!(plan.cycles_before_long_break, 4);
    }

    #[test]
    fn plan_rejects_zero_duration() {
        assert!(PhasePlan::new(0, 300, 900, 4).is_err());
        assert!(PhasePlan::new(1500, 0, 900, 4).is_err());
        assert!(PhasePlan::new(1500, 300, 0, 4).is_err());
        assert!(PhasePlan::new(1500, 300, 900, 0).is_err());
    }

    #[test]
    fn phase_labels() {
        assert_eq!(CyclePhase::Focus.label(), "Focus");
        assert_eq!(CyclePhase::ShortBreak.label(), "Short Break");
        assert_eq!(CyclePhase::LongBreak.label(), "Long Break");
    }
}
