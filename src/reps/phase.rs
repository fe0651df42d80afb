//! Rep cycle phase and per-session counter state

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the athlete is in the rep cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepPhase {
    /// Entry state, and re-entered whenever tracking is not trusted
    #[default]
    Calibrating,
    /// Joint extended
    Up,
    /// Joint contracted
    Down,
}

impl RepPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepPhase::Calibrating => "calibrating",
            RepPhase::Up => "up",
            RepPhase::Down => "down",
        }
    }
}

impl fmt::Display for RepPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counter state for one exercise session
///
/// Threaded by value: every evaluation returns the next state and the
/// caller keeps it for the following frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RepCounterState {
    pub reps: u32,
    pub phase: RepPhase,
    /// Timestamp of the most recently awarded rep, `None` before the first
    pub last_rep_timestamp_ms: Option<f64>,
}

impl RepCounterState {
    pub fn new() -> Self {
        Self::default()
    }
}
