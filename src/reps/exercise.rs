//! Exercise kinds and their tuned thresholds
//!
//! Each exercise is judged on one joint angle, measured on both sides of
//! the body: the elbow for push-ups, the knee for squats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pose::PoseLandmark;

/// Thresholds for one exercise
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExerciseConfig {
    /// Minimum combined landmark confidence to trust a frame
    pub min_confidence: f32,
    /// Angle at or below which the joint counts as contracted (degrees)
    pub down_threshold: f32,
    /// Angle at or above which the joint counts as extended (degrees)
    pub up_threshold: f32,
    /// Minimum time between two awarded reps
    pub min_rep_gap_ms: f64,
}

pub const PUSHUP_CONFIG: ExerciseConfig = ExerciseConfig {
    min_confidence: 0.26,
    down_threshold: 112.0,
    up_threshold: 155.0,
    min_rep_gap_ms: 450.0,
};

pub const SQUAT_CONFIG: ExerciseConfig = ExerciseConfig {
    min_confidence: 0.24,
    down_threshold: 108.0,
    up_threshold: 165.0,
    min_rep_gap_ms: 500.0,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Three landmarks whose middle point is the measured joint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LimbChain {
    pub side: Side,
    pub proximal: PoseLandmark,
    pub joint: PoseLandmark,
    pub distal: PoseLandmark,
}

impl LimbChain {
    const fn new(
        side: Side,
        proximal: PoseLandmark,
        joint: PoseLandmark,
        distal: PoseLandmark,
    ) -> Self {
        Self {
            side,
            proximal,
            joint,
            distal,
        }
    }

    pub fn landmarks(&self) -> [PoseLandmark; 3] {
        [self.proximal, self.joint, self.distal]
    }
}

const ARM_CHAINS: [LimbChain; 2] = [
    LimbChain::new(
        Side::Left,
        PoseLandmark::LeftShoulder,
        PoseLandmark::LeftElbow,
        PoseLandmark::LeftWrist,
    ),
    LimbChain::new(
        Side::Right,
        PoseLandmark::RightShoulder,
        PoseLandmark::RightElbow,
        PoseLandmark::RightWrist,
    ),
];

const LEG_CHAINS: [LimbChain; 2] = [
    LimbChain::new(
        Side::Left,
        PoseLandmark::LeftHip,
        PoseLandmark::LeftKnee,
        PoseLandmark::LeftAnkle,
    ),
    LimbChain::new(
        Side::Right,
        PoseLandmark::RightHip,
        PoseLandmark::RightKnee,
        PoseLandmark::RightAnkle,
    ),
];

/// Supported exercises
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    #[default]
    Pushup,
    Squat,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 2] = [ExerciseKind::Pushup, ExerciseKind::Squat];

    pub fn config(&self) -> &'static ExerciseConfig {
        match self {
            ExerciseKind::Pushup => &PUSHUP_CONFIG,
            ExerciseKind::Squat => &SQUAT_CONFIG,
        }
    }

    /// Left and right chains measured for this exercise
    pub fn limb_chains(&self) -> &'static [LimbChain; 2] {
        match self {
            ExerciseKind::Pushup => &ARM_CHAINS,
            ExerciseKind::Squat => &LEG_CHAINS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::Pushup => "pushup",
            ExerciseKind::Squat => "squat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExerciseKind::Pushup => "Push-ups",
            ExerciseKind::Squat => "Squats",
        }
    }

    /// Lenient parse for navigation parameters: anything but squat is a push-up
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("squat") => ExerciseKind::Squat,
            _ => ExerciseKind::Pushup,
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown exercise '{0}' (expected 'pushup' or 'squat')")]
pub struct UnknownExercise(pub String);

impl FromStr for ExerciseKind {
    type Err = UnknownExercise;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pushup" => Ok(ExerciseKind::Pushup),
            "squat" => Ok(ExerciseKind::Squat),
            _ => Err(UnknownExercise(s.to_string())),
        }
    }
}
