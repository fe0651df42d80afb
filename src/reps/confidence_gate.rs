//! Confidence gate - decides whether a frame's angle can be trusted
//!
//! When combined landmark confidence < threshold, the rep cycle is dropped
//! back to calibration instead of guessing at motion from bad tracking.

use super::exercise::ExerciseKind;

/// Confidence gate for one exercise
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidenceGate {
    /// Minimum confidence to accept a frame
    threshold: f32,
}

impl ConfidenceGate {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn for_exercise(exercise: ExerciseKind) -> Self {
        Self::new(exercise.config().min_confidence)
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// True when the frame can drive the phase machine. NaN never passes.
    pub fn passes(&self, confidence: f32) -> bool {
        confidence >= self.threshold
    }
}
