//! Geometry module - joint angles and confidence aggregation
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod mean;

pub use angles::{joint_angle, DEGENERATE_EPSILON};
pub use mean::average;
