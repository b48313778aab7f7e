//! Weight update policy.
//!
//! ```text
//! delta >= 0:  new = sqrt(current² + delta²)
//! delta <  0:  new = current + delta      (removed when new <= 0)
//! ```
//!
//! Repeated visits grow a weight sub-additively, while a single deposit on a
//! fresh path equals the delta. Decrease is linear. The asymmetry is kept as is.

/// Compute the weight after applying `delta` to `current`.
///
/// Returns `None` when the entry should be removed.
pub fn apply(current: f64, delta: f64) -> Option<f64> {
    let next = if delta >= 0.0 {
        current.hypot(delta)
    } else {
        current + delta
    };
    (next > 0.0).then_some(next)
}
