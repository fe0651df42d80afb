//! Session storage and JS bridge
//!
//! Holds the live workout session for the page. JavaScript pushes one
//! detector result per processed camera frame and reads counters back for
//! the HUD.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use super::landmarks::{decode_frame, BridgeError};
use crate::pose::PoseFrame;
use crate::reps::ExerciseKind;
use crate::rewards::{SessionUpdate, WorkoutSession};

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<Option<WorkoutSession>> = const { RefCell::new(None) };
}

/// Run `f` against the active session, if any
pub fn with_session<R>(f: impl FnOnce(&mut WorkoutSession) -> R) -> Option<R> {
    SESSION.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn install_session(session: WorkoutSession) {
    SESSION.with(|cell| *cell.borrow_mut() = Some(session));
}

fn process(observation: Option<&PoseFrame>) -> Option<SessionUpdate> {
    let update = with_session(|session| session.process(observation));
    if update.is_none() {
        web_sys::console::warn_1(&BridgeError::NoSession.to_string().into());
    }
    update
}

fn report(update: &SessionUpdate) {
    if update.rep_awarded {
        console_log!("💪 Rep {} (+{} tokens)", update.reps, update.tokens_awarded);
    }
    if update.just_finished {
        console_log!("🏁 Target reached at {} reps", update.reps);
    }
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Start (or replace) the session for `exercise` ("pushup" | "squat")
#[wasm_bindgen]
pub fn start_session(exercise: &str, target_reps: u32) -> Result<(), JsValue> {
    let exercise: ExerciseKind = exercise.parse().map_err(BridgeError::from)?;
    let session = WorkoutSession::new(exercise, target_reps);
    console_log!(
        "✅ {} session started, target {} reps",
        exercise.label(),
        session.target_reps()
    );
    install_session(session);
    Ok(())
}

/// Called from JavaScript with a flat Float32Array of landmarks
/// (up to 33 landmarks × 5 values: x, y, z, visibility, presence).
///
/// Returns true when this frame completed a rep. Malformed data is logged
/// and counted as a frame without a detection.
#[wasm_bindgen]
pub fn push_pose_frame(data: &[f32], confidence: f32, timestamp_ms: f64) -> bool {
    let frame = match decode_frame(data, confidence, timestamp_ms) {
        Ok(frame) => Some(frame),
        Err(err) => {
            web_sys::console::warn_1(&err.to_string().into());
            None
        }
    };

    match process(frame.as_ref()) {
        Some(update) => {
            report(&update);
            update.rep_awarded
        }
        None => false,
    }
}

/// Called from JavaScript when the detector found no body
#[wasm_bindgen]
pub fn push_no_detection() {
    process(None);
}

#[wasm_bindgen]
pub fn restart_session() {
    with_session(WorkoutSession::restart);
}

#[wasm_bindgen]
pub fn get_reps() -> u32 {
    with_session(|s| s.reps()).unwrap_or(0)
}

/// "calibrating" | "up" | "down", or "idle" with no session
#[wasm_bindgen]
pub fn get_phase() -> String {
    with_session(|s| s.phase().to_string()).unwrap_or_else(|| "idle".to_string())
}

#[wasm_bindgen]
pub fn get_tokens_earned() -> u32 {
    with_session(|s| s.tokens_earned()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_target_reps() -> u32 {
    with_session(|s| s.target_reps()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn is_session_finished() -> bool {
    with_session(|s| s.is_finished()).unwrap_or(false)
}

/// HUD values: [angle, confidence, fps, reps]
#[wasm_bindgen]
pub fn get_debug_info() -> Vec<f32> {
    with_session(|s| {
        let debug = s.last_debug();
        vec![debug.angle, debug.confidence, s.fps(), s.reps() as f32]
    })
    .unwrap_or_else(|| vec![0.0; 4])
}

/// Full session snapshot as JSON
#[wasm_bindgen]
pub fn get_session_json() -> Result<String, JsValue> {
    let json = with_session(|s| serde_json::to_string(&*s))
        .ok_or(BridgeError::NoSession)?
        .map_err(|e| BridgeError::Serialize(e.to_string()))?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reps::testing::arm_frame;

    // Only the storage path is exercised here; the entry points call into
    // the JS console, which is unavailable off wasm.

    #[test]
    fn test_with_session_without_session() {
        SESSION.with(|cell| *cell.borrow_mut() = None);
        assert_eq!(with_session(|s| s.reps()), None);
    }

    #[test]
    fn test_installed_session_counts() {
        install_session(WorkoutSession::new(ExerciseKind::Pushup, 3));

        with_session(|s| s.process(Some(&arm_frame(90.0, 0.9, 0.0))));
        let update = with_session(|s| s.process(Some(&arm_frame(170.0, 0.9, 600.0))));

        assert_eq!(update.map(|u| u.rep_awarded), Some(true));
        assert_eq!(with_session(|s| s.reps()), Some(1));

        let json = with_session(|s| serde_json::to_string(&*s).unwrap()).unwrap();
        assert!(json.contains("\"exercise\":\"pushup\""));
    }
}
