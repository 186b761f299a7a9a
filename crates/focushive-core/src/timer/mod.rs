mod engine;
mod phase;

pub use engine::CycleEngine;
pub use phase::{CyclePhase, PhasePlan};
