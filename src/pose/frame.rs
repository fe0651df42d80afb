//! One detector observation

use serde::{Deserialize, Serialize};

use super::landmarks::{Landmark, PoseLandmark};

/// Landmarks for one processed camera frame
///
/// `landmarks` is positional; a short array simply lacks the higher indices.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    pub landmarks: Vec<Landmark>,
    /// Overall detector confidence
    pub confidence: f32,
    pub timestamp_ms: f64,
}

impl PoseFrame {
    pub fn new(landmarks: Vec<Landmark>, confidence: f32, timestamp_ms: f64) -> Self {
        Self {
            landmarks,
            confidence,
            timestamp_ms,
        }
    }

    /// Look up a landmark by name
    pub fn landmark(&self, which: PoseLandmark) -> Option<&Landmark> {
        self.landmarks.get(which.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        let mut landmarks = vec![Landmark::default(); 33];
        landmarks[PoseLandmark::LeftKnee.index()] = Landmark::new(0.3, 0.7, 0.8);
        let frame = PoseFrame::new(landmarks, 0.9, 0.0);

        let knee = frame.landmark(PoseLandmark::LeftKnee).copied();
        assert_eq!(knee, Some(Landmark::new(0.3, 0.7, 0.8)));
    }

    #[test]
    fn test_short_frame_lookup_is_none() {
        // Indices 0..=11: ends at the left shoulder
        let frame = PoseFrame::new(vec![Landmark::default(); 12], 0.9, 0.0);
        assert!(frame.landmark(PoseLandmark::LeftShoulder).is_some());
        assert!(frame.landmark(PoseLandmark::RightShoulder).is_none());
        assert!(frame.landmark(PoseLandmark::LeftElbow).is_none());
    }
}
