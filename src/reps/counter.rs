//! Rep counting state machine
//!
//! ```text
//!              angle >= up                 angle <= down
//! calibrating ------------> up  <---------------------------> down
//!      |                        angle >= up (+1 rep if gap ok)  ^
//!      +------------------------------------------------------+
//!              angle < up
//! ```
//!
//! Any frame below the confidence gate sends the cycle back to
//! calibrating. Pure: the next state is returned, nothing is mutated.

use super::confidence_gate::ConfidenceGate;
use super::exercise::{ExerciseConfig, ExerciseKind};
use super::extraction::{measure_exercise, FrameDebug};
use super::phase::{RepCounterState, RepPhase};
use super::timing::normalize_elapsed_ms;
use crate::pose::PoseFrame;

/// Result of feeding one frame to the counter
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepEvaluation {
    pub next: RepCounterState,
    pub rep_awarded: bool,
    pub debug: FrameDebug,
}

/// Advance the rep counter by one observation
///
/// `observation` is `None` when the detector found no body; that reads as
/// zero confidence. Frames must arrive in timestamp order.
pub fn evaluate_frame(
    exercise: ExerciseKind,
    observation: Option<&PoseFrame>,
    previous: RepCounterState,
) -> RepEvaluation {
    let config = exercise.config();
    let reading = measure_exercise(exercise, observation);

    tracing::trace!(
        exercise = %exercise,
        angle = reading.angle,
        confidence = reading.confidence,
        phase = %previous.phase,
        "frame"
    );

    if !ConfidenceGate::for_exercise(exercise).passes(reading.confidence) {
        if previous.phase != RepPhase::Calibrating {
            tracing::debug!(
                exercise = %exercise,
                confidence = reading.confidence,
                from = %previous.phase,
                "tracking lost, recalibrating"
            );
        }
        return RepEvaluation {
            next: RepCounterState {
                phase: RepPhase::Calibrating,
                ..previous
            },
            rep_awarded: false,
            debug: reading,
        };
    }

    // The gate passed, so a frame is present
    let timestamp_ms = observation.map_or(0.0, |frame| frame.timestamp_ms);
    let (next, rep_awarded) = advance(config, previous, reading.angle, timestamp_ms);

    if next.phase != previous.phase {
        tracing::debug!(
            exercise = %exercise,
            angle = reading.angle,
            from = %previous.phase,
            to = %next.phase,
            "phase change"
        );
    }
    if rep_awarded {
        tracing::info!(exercise = %exercise, reps = next.reps, timestamp_ms, "rep awarded");
    }

    RepEvaluation {
        next,
        rep_awarded,
        debug: reading,
    }
}

fn advance(
    config: &ExerciseConfig,
    previous: RepCounterState,
    angle: f32,
    timestamp_ms: f64,
) -> (RepCounterState, bool) {
    let with_phase = |phase: RepPhase| RepCounterState { phase, ..previous };

    match previous.phase {
        RepPhase::Calibrating if angle >= config.up_threshold => (with_phase(RepPhase::Up), false),
        RepPhase::Calibrating => (with_phase(RepPhase::Down), false),

        RepPhase::Up if angle <= config.down_threshold => (with_phase(RepPhase::Down), false),
        RepPhase::Up => (previous, false),

        RepPhase::Down if angle >= config.up_threshold => {
            // Without a usable clock the gap can't be checked, and recording
            // it would poison every later comparison
            if timestamp_ms.is_finite()
                && gap_elapsed(config, previous.last_rep_timestamp_ms, timestamp_ms)
            {
                let next = RepCounterState {
                    reps: previous.reps.saturating_add(1),
                    phase: RepPhase::Up,
                    last_rep_timestamp_ms: Some(timestamp_ms),
                };
                (next, true)
            } else {
                // Too soon after the last rep: settle at up without scoring
                (with_phase(RepPhase::Up), false)
            }
        }
        RepPhase::Down => (previous, false),
    }
}

fn gap_elapsed(config: &ExerciseConfig, last_rep_ms: Option<f64>, now_ms: f64) -> bool {
    match last_rep_ms {
        None => true,
        Some(last) => normalize_elapsed_ms(now_ms - last) >= config.min_rep_gap_ms,
    }
}
