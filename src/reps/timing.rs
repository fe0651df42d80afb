//! Elapsed-time normalization
//!
//! Native frame timestamps are not reliably in one unit across platforms.
//! Elapsed values are mapped to milliseconds by magnitude before they are
//! compared against a rep gap.

/// Elapsed values above this are read as nanoseconds
pub const NANOSECOND_CUTOFF: f64 = 100_000.0;

/// Elapsed values below this are read as seconds
pub const SECOND_CUTOFF: f64 = 10.0;

const NANOS_PER_MILLI: f64 = 1_000_000.0;
const MILLIS_PER_SECOND: f64 = 1_000.0;

/// Map a raw timestamp difference to milliseconds
///
/// Non-finite or non-positive input (out-of-order frames included) is 0.
///
/// On a millisecond clock the heuristic misreads both ends of the range:
/// - gaps over 100 s are read as nanoseconds, so a down→up edge after a
///   long rest looks instant and is not scored;
/// - gaps under 10 ms are read as seconds, so a re-trigger a few
///   milliseconds after a rep clears the rep gap and scores again.
pub fn normalize_elapsed_ms(raw_elapsed: f64) -> f64 {
    if !raw_elapsed.is_finite() || raw_elapsed <= 0.0 {
        return 0.0;
    }

    if raw_elapsed > NANOSECOND_CUTOFF {
        raw_elapsed / NANOS_PER_MILLI
    } else if raw_elapsed < SECOND_CUTOFF {
        raw_elapsed * MILLIS_PER_SECOND
    } else {
        raw_elapsed
    }
}
