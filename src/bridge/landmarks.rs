//! Landmark decoding for the JS bridge
//!
//! Receives detector landmarks from JavaScript as one flat Float32Array and
//! turns them into a `PoseFrame` for the rep engine.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::pose::{Landmark, PoseFrame, POSE_LANDMARK_COUNT};
use crate::reps::UnknownExercise;

/// Floats per landmark: x, y, z, visibility, presence
pub const LANDMARK_STRIDE: usize = 5;

/// Length of a full frame (33 landmarks × 5 values)
pub const MAX_FRAME_VALUES: usize = POSE_LANDMARK_COUNT * LANDMARK_STRIDE;

/// Errors for data handed over from JavaScript
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    #[error(
        "invalid landmark data length: {0} (expected a non-zero multiple of {stride}, at most {max})",
        stride = LANDMARK_STRIDE,
        max = MAX_FRAME_VALUES
    )]
    InvalidLength(usize),

    #[error("invalid frame timestamp: {0}")]
    InvalidTimestamp(f64),

    #[error(transparent)]
    UnknownExercise(#[from] UnknownExercise),

    #[error("no active session; call start_session first")]
    NoSession,

    #[error("could not serialize session: {0}")]
    Serialize(String),
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Split a flat buffer into landmarks
///
/// Shorter buffers are fine; the missing indices just count as not detected.
pub fn decode_landmarks(data: &[f32]) -> Result<Vec<Landmark>, BridgeError> {
    if data.is_empty() || data.len() % LANDMARK_STRIDE != 0 || data.len() > MAX_FRAME_VALUES {
        return Err(BridgeError::InvalidLength(data.len()));
    }

    let landmarks = data
        .chunks_exact(LANDMARK_STRIDE)
        .map(|v| Landmark {
            x: v[0],
            y: v[1],
            z: v[2],
            visibility: v[3],
            presence: v[4],
        })
        .collect();

    Ok(landmarks)
}

/// Decode a full observation; the timestamp must be a real number
pub fn decode_frame(
    data: &[f32],
    confidence: f32,
    timestamp_ms: f64,
) -> Result<PoseFrame, BridgeError> {
    if !timestamp_ms.is_finite() {
        return Err(BridgeError::InvalidTimestamp(timestamp_ms));
    }
    Ok(PoseFrame::new(decode_landmarks(data)?, confidence, timestamp_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::PoseLandmark;

    #[test]
    fn test_full_frame() {
        let mut data = vec![0.0_f32; MAX_FRAME_VALUES];
        let base = PoseLandmark::RightKnee.index() * LANDMARK_STRIDE;
        data[base..base + LANDMARK_STRIDE].copy_from_slice(&[0.6, 0.7, -0.1, 0.95, 0.9]);

        let frame = decode_frame(&data, 0.8, 1234.0).unwrap();
        assert_eq!(frame.landmarks.len(), POSE_LANDMARK_COUNT);
        assert_eq!(frame.timestamp_ms, 1234.0);
        assert_eq!(
            frame.landmark(PoseLandmark::RightKnee),
            Some(&Landmark {
                x: 0.6,
                y: 0.7,
                z: -0.1,
                visibility: 0.95,
                presence: 0.9,
            })
        );
    }

    #[test]
    fn test_partial_frame() {
        let data = vec![0.5_f32; 17 * LANDMARK_STRIDE];
        let landmarks = decode_landmarks(&data).unwrap();
        assert_eq!(landmarks.len(), 17);
    }

    #[test]
    fn test_bad_lengths() {
        assert_eq!(decode_landmarks(&[]), Err(BridgeError::InvalidLength(0)));
        assert_eq!(decode_landmarks(&[0.0; 99]), Err(BridgeError::InvalidLength(99)));
        assert_eq!(
            decode_landmarks(&[0.0; MAX_FRAME_VALUES + LANDMARK_STRIDE]),
            Err(BridgeError::InvalidLength(MAX_FRAME_VALUES + LANDMARK_STRIDE))
        );
    }

    #[test]
    fn test_non_finite_timestamp_rejected() {
        let data = vec![0.5_f32; MAX_FRAME_VALUES];
        assert!(matches!(
            decode_frame(&data, 0.9, f64::NAN),
            Err(BridgeError::InvalidTimestamp(_))
        ));
        assert_eq!(
            decode_frame(&data, 0.9, f64::INFINITY),
            Err(BridgeError::InvalidTimestamp(f64::INFINITY))
        );
    }

    #[test]
    fn test_error_message_names_length() {
        let message = BridgeError::InvalidLength(7).to_string();
        assert!(message.contains('7'));
    }
}
