//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod session;

pub use landmarks::{
    // Decoding
    decode_frame,
    decode_landmarks,
    BridgeError,
    // Constants
    LANDMARK_STRIDE,
    MAX_FRAME_VALUES,
};

pub use session::{
    // WASM entry points
    start_session,
    push_pose_frame,
    push_no_detection,
    restart_session,
    get_reps,
    get_phase,
    get_tokens_earned,
    get_target_reps,
    is_session_finished,
    get_debug_info,
    get_session_json,
    // Internal API
    with_session,
};
