//! Per-exercise angle and confidence extraction
//!
//! Each side of the body is measured on its own. A side with a missing or
//! barely visible landmark is dropped; the remaining sides are averaged.

use serde::{Deserialize, Serialize};

use super::exercise::{ExerciseKind, LimbChain};
use crate::geometry::{average, joint_angle};
use crate::pose::PoseFrame;

/// Landmarks at or below this visibility are treated as not detected
pub const MIN_LANDMARK_VISIBILITY: f32 = 0.01;

/// Angle and confidence read from one frame (also shown in the debug HUD)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameDebug {
    /// Joint angle in degrees
    pub angle: f32,
    /// Mean visibility of the landmarks that produced the angle
    pub confidence: f32,
}

/// Measure one limb chain, or `None` if it is not usable this frame
pub fn measure_limb(frame: &PoseFrame, chain: &LimbChain) -> Option<FrameDebug> {
    let [proximal, joint, distal] = chain.landmarks();

    let points = [
        frame.landmark(proximal)?,
        frame.landmark(joint)?,
        frame.landmark(distal)?,
    ];
    if !points.iter().all(|p| p.is_trackable(MIN_LANDMARK_VISIBILITY)) {
        return None;
    }

    let angle = joint_angle(points[0].xy(), points[1].xy(), points[2].xy());
    let confidence = average(points.iter().map(|p| p.visibility));

    Some(FrameDebug { angle, confidence })
}

/// Combined reading for an exercise; zero angle and confidence when no side
/// qualifies or there is no detection at all
pub fn measure_exercise(exercise: ExerciseKind, frame: Option<&PoseFrame>) -> FrameDebug {
    let Some(frame) = frame else {
        return FrameDebug::default();
    };

    let sides: Vec<FrameDebug> = exercise
        .limb_chains()
        .iter()
        .filter_map(|chain| measure_limb(frame, chain))
        .collect();

    if sides.is_empty() {
        return FrameDebug::default();
    }

    FrameDebug {
        angle: average(sides.iter().map(|s| s.angle)),
        confidence: average(sides.iter().map(|s| s.confidence)),
    }
}
