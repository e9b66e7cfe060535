//! Fixed regime boundaries of the Riemann–Siegel evaluation.

/// Below this height θ is computed from the reference gamma, and ζ falls
/// back to the reference evaluator.
pub const SMALL_HEIGHT: f64 = 14.0;

/// Maximum distance |σ − ½| handled by the Riemann–Siegel reconstruction.
pub const CRITICAL_BAND: f64 = 0.5;

/// Heights above which the second, third and fourth remainder corrections
/// apply. Each order is only considered once the previous one applies.
pub const SECOND_ORDER_HEIGHT: f64 = 50.0;
pub const THIRD_ORDER_HEIGHT: f64 = 200.0;
pub const FOURTH_ORDER_HEIGHT: f64 = 1000.0;

/// Distance to the nearest integer inside which the optional jitter fires.
pub const JITTER_WINDOW: f64 = 0.1;

/// Amplitude of the optional near-integer jitter.
pub const JITTER_AMPLITUDE: f64 = 1e-5;

/// Largest main-sum length Z will evaluate. ⌊√(t/2π)⌋ reaches it near
/// t ≈ 1.8e15.
pub const MAX_MAIN_SUM_TERMS: usize = 1 << 24;

/// Whether `t` lies inside the near-integer jitter window.
pub(crate) fn near_integer(t: f64) -> bool {
    (t - t.round()).abs() < JITTER_WINDOW
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_integer_window() {
        assert!(near_integer(20.0));
        assert!(near_integer(20.09));
        assert!(near_integer(19.95));
        assert!(!near_integer(20.1));
        assert!(!near_integer(20.5));
        assert!(near_integer(-3.02));
    }
}
