//! Frame builders for tests

use super::exercise::{ExerciseKind, LimbChain};
use crate::pose::{Landmark, PoseFrame, POSE_LANDMARK_COUNT};

const SEGMENT: f32 = 0.15;

/// Lay out a chain so its joint angle is `angle_deg`
pub(crate) fn place_chain(
    frame: &mut PoseFrame,
    chain: &LimbChain,
    angle_deg: f32,
    visibility: f32,
) {
    let joint = match chain.side {
        super::exercise::Side::Left => (0.35, 0.5),
        super::exercise::Side::Right => (0.65, 0.5),
    };
    let theta = angle_deg.to_radians();
    let proximal = (joint.0 - SEGMENT, joint.1);
    let distal = (joint.0 - SEGMENT * theta.cos(), joint.1 + SEGMENT * theta.sin());

    frame.landmarks[chain.proximal.index()] = Landmark::new(proximal.0, proximal.1, visibility);
    frame.landmarks[chain.joint.index()] = Landmark::new(joint.0, joint.1, visibility);
    frame.landmarks[chain.distal.index()] = Landmark::new(distal.0, distal.1, visibility);
}

pub(crate) fn exercise_frame(
    exercise: ExerciseKind,
    angle_deg: f32,
    visibility: f32,
    t: f64,
) -> PoseFrame {
    let mut frame = PoseFrame::new(vec![Landmark::default(); POSE_LANDMARK_COUNT], visibility, t);
    for chain in exercise.limb_chains() {
        place_chain(&mut frame, chain, angle_deg, visibility);
    }
    frame
}

pub(crate) fn arm_frame(angle_deg: f32, visibility: f32, t: f64) -> PoseFrame {
    exercise_frame(ExerciseKind::Pushup, angle_deg, visibility, t)
}

pub(crate) fn leg_frame(angle_deg: f32, visibility: f32, t: f64) -> PoseFrame {
    exercise_frame(ExerciseKind::Squat, angle_deg, visibility, t)
}
