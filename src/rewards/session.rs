//! Live workout session
//!
//! Wraps the rep counter for one run of an exercise: keeps the counter
//! state between frames, pays out tokens per rep, tracks the frame rate for
//! the HUD and finishes once the target is reached.

use serde::{Deserialize, Serialize};

use crate::pose::PoseFrame;
use crate::reps::{
    evaluate_frame, normalize_elapsed_ms, ExerciseKind, FrameDebug, RepCounterState, RepPhase,
};

/// Tokens credited for each awarded rep
pub const TOKENS_PER_REP: u32 = 10;

/// Target used when the caller gives none (or an unusable one)
pub const DEFAULT_TARGET_REPS: u32 = 10;

pub const MAX_TARGET_REPS: u32 = 100;

/// FPS estimate cap (very close timestamps otherwise blow up the HUD)
pub const MAX_REPORTED_FPS: f32 = 120.0;

/// What one processed frame changed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionUpdate {
    pub rep_awarded: bool,
    pub reps: u32,
    pub phase: RepPhase,
    pub debug: FrameDebug,
    pub fps: f32,
    /// Tokens credited by this frame (0 or `TOKENS_PER_REP`)
    pub tokens_awarded: u32,
    /// True only on the frame that reached the target
    pub just_finished: bool,
}

/// End-of-session result handed to the success screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub exercise: ExerciseKind,
    pub reps: u32,
    pub tokens_earned: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    exercise: ExerciseKind,
    counter: RepCounterState,
    target_reps: u32,
    tokens_earned: u32,
    fps: f32,
    last_frame_timestamp_ms: Option<f64>,
    last_debug: FrameDebug,
    finished: bool,
}

impl WorkoutSession {
    pub fn new(exercise: ExerciseKind, target_reps: u32) -> Self {
        Self {
            exercise,
            counter: RepCounterState::new(),
            target_reps: target_reps.clamp(1, MAX_TARGET_REPS),
            tokens_earned: 0,
            fps: 0.0,
            last_frame_timestamp_ms: None,
            last_debug: FrameDebug::default(),
            finished: false,
        }
    }

    /// Build from loosely typed navigation parameters
    pub fn from_params(exercise: Option<&str>, target: Option<&str>) -> Self {
        // Unparsable or zero falls back; anything else is clamped and rounded up
        let target = target
            .and_then(|t| t.trim().parse::<f64>().ok())
            .filter(|t| !t.is_nan() && *t != 0.0)
            .map(|t| t.clamp(1.0, f64::from(MAX_TARGET_REPS)).ceil() as u32)
            .unwrap_or(DEFAULT_TARGET_REPS);
        Self::new(ExerciseKind::from_param(exercise), target)
    }

    /// Feed one detector result (`None` = no body found)
    pub fn process(&mut self, observation: Option<&PoseFrame>) -> SessionUpdate {
        let evaluation = evaluate_frame(self.exercise, observation, self.counter);
        self.counter = evaluation.next;
        self.last_debug = evaluation.debug;

        if let Some(frame) = observation {
            self.fps = self.frame_rate(frame.timestamp_ms);
            self.last_frame_timestamp_ms = Some(frame.timestamp_ms);
        }

        let mut tokens_awarded = 0;
        let mut just_finished = false;
        if evaluation.rep_awarded && !self.finished {
            tokens_awarded = TOKENS_PER_REP;
            self.tokens_earned = self.tokens_earned.saturating_add(TOKENS_PER_REP);

            if self.counter.reps >= self.target_reps {
                self.finished = true;
                just_finished = true;
                tracing::info!(
                    exercise = %self.exercise,
                    reps = self.counter.reps,
                    tokens = self.tokens_earned,
                    "session target reached"
                );
            }
        }

        SessionUpdate {
            rep_awarded: evaluation.rep_awarded,
            reps: self.counter.reps,
            phase: self.counter.phase,
            debug: evaluation.debug,
            fps: self.fps,
            tokens_awarded,
            just_finished,
        }
    }

    fn frame_rate(&self, timestamp_ms: f64) -> f32 {
        let delta_ms = match self.last_frame_timestamp_ms {
            Some(previous) => normalize_elapsed_ms(timestamp_ms - previous),
            None => 0.0,
        };
        if delta_ms > 0.0 {
            ((1000.0 / delta_ms) as f32).min(MAX_REPORTED_FPS)
        } else {
            0.0
        }
    }

    /// Start over with the same exercise and target
    pub fn restart(&mut self) {
        *self = Self::new(self.exercise, self.target_reps);
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            exercise: self.exercise,
            reps: self.counter.reps,
            tokens_earned: self.tokens_earned,
        }
    }

    pub fn exercise(&self) -> ExerciseKind {
        self.exercise
    }

    pub fn counter(&self) -> RepCounterState {
        self.counter
    }

    pub fn reps(&self) -> u32 {
        self.counter.reps
    }

    pub fn phase(&self) -> RepPhase {
        self.counter.phase
    }

    pub fn target_reps(&self) -> u32 {
        self.target_reps
    }

    pub fn tokens_earned(&self) -> u32 {
        self.tokens_earned
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn last_debug(&self) -> FrameDebug {
        self.last_debug
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reps::testing::{arm_frame, leg_frame};

    /// Down then up, spaced well past the rep gap
    fn do_rep(session: &mut WorkoutSession, start_ms: f64) -> SessionUpdate {
        session.process(Some(&arm_frame(90.0, 0.9, start_ms)));
        session.process(Some(&arm_frame(165.0, 0.9, start_ms + 500.0)))
    }

    #[test]
    fn test_target_is_clamped() {
        assert_eq!(WorkoutSession::new(ExerciseKind::Pushup, 0).target_reps(), 1);
        assert_eq!(WorkoutSession::new(ExerciseKind::Pushup, 250).target_reps(), 100);
        assert_eq!(WorkoutSession::new(ExerciseKind::Squat, 12).target_reps(), 12);
    }

    #[test]
    fn test_from_params() {
        let session = WorkoutSession::from_params(Some("squat"), Some("12"));
        assert_eq!(session.exercise(), ExerciseKind::Squat);
        assert_eq!(session.target_reps(), 12);

        let session = WorkoutSession::from_params(None, Some("lots"));
        assert_eq!(session.exercise(), ExerciseKind::Pushup);
        assert_eq!(session.target_reps(), DEFAULT_TARGET_REPS);

        let target = |t| WorkoutSession::from_params(None, Some(t)).target_reps();
        assert_eq!(target("0"), DEFAULT_TARGET_REPS);
        assert_eq!(target("500"), MAX_TARGET_REPS);
        assert_eq!(target("-5"), 1);
        assert_eq!(target("7.2"), 8);
    }

    #[test]
    fn test_tokens_per_rep() {
        let mut session = WorkoutSession::new(ExerciseKind::Pushup, 5);
        session.process(Some(&arm_frame(165.0, 0.9, 0.0)));

        let update = do_rep(&mut session, 100.0);
        assert!(update.rep_awarded);
        assert_eq!(update.tokens_awarded, TOKENS_PER_REP);
        assert_eq!(session.tokens_earned(), 10);

        do_rep(&mut session, 1000.0);
        assert_eq!(
            session.summary(),
            SessionSummary {
                exercise: ExerciseKind::Pushup,
                reps: 2,
                tokens_earned: 20,
            }
        );
    }

    #[test]
    fn test_finishes_once() {
        let mut session = WorkoutSession::new(ExerciseKind::Pushup, 2);

        let first = do_rep(&mut session, 0.0);
        assert!(!first.just_finished);

        let second = do_rep(&mut session, 1000.0);
        assert!(second.just_finished);
        assert!(session.is_finished());

        // Reps after the target count but pay nothing
        let third = do_rep(&mut session, 2000.0);
        assert!(third.rep_awarded);
        assert!(!third.just_finished);
        assert_eq!(third.tokens_awarded, 0);
        assert_eq!(session.reps(), 3);
        assert_eq!(session.tokens_earned(), 20);
    }

    #[test]
    fn test_fps_estimate() {
        let mut session = WorkoutSession::new(ExerciseKind::Pushup, 10);
        assert_eq!(session.process(Some(&arm_frame(165.0, 0.9, 1000.0))).fps, 0.0);

        let update = session.process(Some(&arm_frame(165.0, 0.9, 1040.0)));
        assert!((update.fps - 25.0).abs() < 1e-3);
    }

    #[test]
    fn test_fps_is_capped() {
        let mut session = WorkoutSession::new(ExerciseKind::Pushup, 10);
        // Nanosecond clock, frames 5 ms apart
        session.process(Some(&arm_frame(165.0, 0.9, 1.0e9)));
        let update = session.process(Some(&arm_frame(165.0, 0.9, 1.005e9)));
        assert_eq!(update.fps, MAX_REPORTED_FPS);
    }

    #[test]
    fn test_no_detection_keeps_fps_and_recalibrates() {
        let mut session = WorkoutSession::new(ExerciseKind::Pushup, 10);
        session.process(Some(&arm_frame(165.0, 0.9, 0.0)));
        session.process(Some(&arm_frame(165.0, 0.9, 50.0)));

        let update = session.process(None);
        assert_eq!(update.phase, RepPhase::Calibrating);
        assert_eq!(update.debug, FrameDebug::default());
        assert!((update.fps - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_restart() {
        let mut session = WorkoutSession::new(ExerciseKind::Squat, 3);
        session.process(Some(&leg_frame(100.0, 0.9, 0.0)));
        session.process(Some(&leg_frame(170.0, 0.9, 600.0)));
        assert_eq!(session.reps(), 1);

        session.restart();
        assert_eq!(session, WorkoutSession::new(ExerciseKind::Squat, 3));
    }
}
