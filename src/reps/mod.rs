//! Rep counting module - turns a pose stream into scored repetitions
//!
//! Re-exports only. All logic in submodules.

mod confidence_gate;
mod counter;
mod exercise;
mod extraction;
mod phase;
mod timing;

#[cfg(test)]
pub(crate) mod testing;

pub use confidence_gate::ConfidenceGate;
pub use counter::{evaluate_frame, RepEvaluation};
pub use exercise::{
    ExerciseConfig, ExerciseKind, LimbChain, Side, UnknownExercise, PUSHUP_CONFIG, SQUAT_CONFIG,
};
pub use extraction::{measure_exercise, measure_limb, FrameDebug, MIN_LANDMARK_VISIBILITY};
pub use phase::{RepCounterState, RepPhase};
pub use timing::{normalize_elapsed_ms, NANOSECOND_CUTOFF, SECOND_CUTOFF};
