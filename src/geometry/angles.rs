//! Joint angle calculation using dot product
//!
//! Calculates the angle at a middle joint (elbow, knee) from the two
//! segments meeting there: joint→a and joint→c.

/// Floor for the product of segment lengths. Keeps overlapping points
/// from dividing by zero.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// Calculate the angle at vertex `b` in degrees
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns angle in degrees, always within [0, 180]:
/// - 0° = segments folded onto each other
/// - 90° = right angle (also returned for coincident points)
/// - 180° = fully straight limb
///
/// Non-finite coordinates yield 0°.
pub fn joint_angle(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    // Segment from vertex to first point
    let v1 = (a.0 - b.0, a.1 - b.1);

    // Segment from vertex to second point
    let v2 = (c.0 - b.0, c.1 - b.1);

    let dot = v1.0 * v2.0 + v1.1 * v2.1;

    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();

    let denominator = (mag1 * mag2).max(DEGENERATE_EPSILON);
    let cos_angle = dot / denominator;
    if !cos_angle.is_finite() {
        return 0.0;
    }

    // acos can overshoot on float error; clamp first, then again on the way out
    cos_angle.clamp(-1.0, 1.0).acos().to_degrees().clamp(0.0, 180.0)
}
