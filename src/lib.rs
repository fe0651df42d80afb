//! RepLock Core - pose-driven repetition counting
//!
//! Turns a stream of body landmarks into counted push-ups and squats, and
//! counted reps into tokens for unlocking app time.
//!
//! Entry point for the library and its WASM module. Only contains:
//! - Module declarations and re-exports
//! - wasm_bindgen entry points that delegate to submodules

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub(crate) fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

pub mod bridge;
pub mod geometry;
pub mod pose;
pub mod reps;
pub mod rewards;

pub use geometry::{average, joint_angle};
pub use pose::{Landmark, PoseFrame, PoseLandmark};
pub use reps::{
    evaluate_frame, ExerciseConfig, ExerciseKind, FrameDebug, RepCounterState, RepEvaluation,
    RepPhase,
};
pub use rewards::{SessionSummary, SessionUpdate, TokenWallet, WorkoutSession};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
