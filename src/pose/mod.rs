//! Pose module - detector output as seen by the rep engine
//!
//! Re-exports only. All logic in submodules.

mod frame;
mod landmarks;

pub use frame::PoseFrame;
pub use landmarks::{Landmark, PoseLandmark, POSE_LANDMARK_COUNT};
