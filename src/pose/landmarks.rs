//! Landmark indices and the per-point landmark record
//!
//! The detector reports 33 body points in a fixed order (MediaPipe Pose
//! numbering). `PoseLandmark` names every position so nothing downstream
//! indexes the array with bare numbers.

use serde::{Deserialize, Serialize};

/// Number of landmarks in one detector frame
pub const POSE_LANDMARK_COUNT: usize = 33;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoseLandmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl PoseLandmark {
    /// Every landmark in detector order
    pub const ALL: [PoseLandmark; POSE_LANDMARK_COUNT] = [
        PoseLandmark::Nose,
        PoseLandmark::LeftEyeInner,
        PoseLandmark::LeftEye,
        PoseLandmark::LeftEyeOuter,
        PoseLandmark::RightEyeInner,
        PoseLandmark::RightEye,
        PoseLandmark::RightEyeOuter,
        PoseLandmark::LeftEar,
        PoseLandmark::RightEar,
        PoseLandmark::MouthLeft,
        PoseLandmark::MouthRight,
        PoseLandmark::LeftShoulder,
        PoseLandmark::RightShoulder,
        PoseLandmark::LeftElbow,
        PoseLandmark::RightElbow,
        PoseLandmark::LeftWrist,
        PoseLandmark::RightWrist,
        PoseLandmark::LeftPinky,
        PoseLandmark::RightPinky,
        PoseLandmark::LeftIndex,
        PoseLandmark::RightIndex,
        PoseLandmark::LeftThumb,
        PoseLandmark::RightThumb,
        PoseLandmark::LeftHip,
        PoseLandmark::RightHip,
        PoseLandmark::LeftKnee,
        PoseLandmark::RightKnee,
        PoseLandmark::LeftAnkle,
        PoseLandmark::RightAnkle,
        PoseLandmark::LeftHeel,
        PoseLandmark::RightHeel,
        PoseLandmark::LeftFootIndex,
        PoseLandmark::RightFootIndex,
    ];

    /// Position of this landmark in the detector array
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single tracked body point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized
    pub z: f32, // Relative depth
    pub visibility: f32,
    pub presence: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, visibility: f32) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            visibility,
            presence: visibility,
        }
    }

    /// 2D position used for joint angles
    pub fn xy(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Usable for angle math: finite position and visibility above `floor`
    pub fn is_trackable(&self, floor: f32) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.visibility.is_finite()
            && self.visibility > floor
    }
}
