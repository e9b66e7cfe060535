//! Riemann–Siegel theta function θ(t).
//!
//! θ(t) = arg Γ(¼ + it/2) − (t/2)·ln π. For |t| below
//! [`SMALL_HEIGHT`](crate::thresholds::SMALL_HEIGHT) this identity is
//! evaluated with the reference gamma. The principal argument wraps, so the
//! small-height branch is θ modulo 2π. Above it the Stirling-type expansion
//! in [`theta_asymptotic`] is used.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::engine::RiemannSiegel;
use crate::error::{Result, SiegelError, finite_real};
use crate::reference::ReferenceEvaluator;
use crate::thresholds::{JITTER_AMPLITUDE, SMALL_HEIGHT, near_integer};

/// Asymptotic expansion of θ(t), including all five correction terms.
pub fn theta_asymptotic(t: f64) -> f64 {
    let t3 = t * t * t;
    let t5 = t3 * t * t;
    let t7 = t5 * t * t;
    let t9 = t7 * t * t;

    let main = (t / 2.0) * (t / (2.0 * PI)).ln() - t / 2.0 - PI / 8.0;
    let correction = 1.0 / (48.0 * t) + 7.0 / (5760.0 * t3) - 31.0 / (80640.0 * t5)
        + 127.0 / (430080.0 * t7)
        - 511.0 / (1216512.0 * t9);
    main + correction
}

impl<R: ReferenceEvaluator> RiemannSiegel<R> {
    /// θ(t) for finite `t`.
    ///
    /// Callers are expected to pass t ≥ 0. Heights at or below −14 take the
    /// asymptotic branch, whose logarithm is undefined there, and fail with
    /// [`SiegelError::NumericInstability`].
    pub fn theta(&self, t: f64) -> Result<f64> {
        if !t.is_finite() {
            return Err(SiegelError::InvalidArgument(format!(
                "theta requires a finite height, got {t}"
            )));
        }
        let at = Complex64::new(0.5, t);

        if t.abs() < SMALL_HEIGHT {
            let g = self.reference().gamma(Complex64::new(0.25, 0.5 * t))?;
            let value = self.reference().complex_arg(g) - (t / 2.0) * PI.ln();
            return finite_real(value, "theta", at);
        }

        let mut value = theta_asymptotic(t);
        if self.options().near_integer_jitter && near_integer(t) {
            value += JITTER_AMPLITUDE * (2.0 * PI * t).sin();
        }
        finite_real(value, "theta", at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineOptions;
    use crate::reference::StandardReference;

    #[test]
    fn test_small_height_uses_gamma_identity() {
        let engine = RiemannSiegel::new();
        // θ(10) = −3.0670743962898...
        let value = engine.theta(10.0).unwrap();
        assert!((value - (-3.067_074_396_289_8)).abs() < 1e-10, "θ(10) = {value}");
    }

    #[test]
    fn test_theta_at_zero() {
        let engine = RiemannSiegel::new();
        assert_eq!(engine.theta(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_small_height_is_odd() {
        let engine = RiemannSiegel::new();
        let a = engine.theta(5.0).unwrap();
        let b = engine.theta(-5.0).unwrap();
        assert!((a + b).abs() < 1e-12);
    }

    #[test]
    fn test_asymptotic_branch_value() {
        let engine = RiemannSiegel::new();
        // θ(100) = 87.9721652317...
        let value = engine.theta(100.0).unwrap();
        assert!((value - 87.972_165_231_7).abs() < 1e-8, "θ(100) = {value}");
        assert_eq!(value, theta_asymptotic(100.0));
    }

    #[test]
    fn test_asymptotic_matches_gamma_identity_at_boundary() {
        // At the switch the two formulas agree modulo 2π.
        let reference = StandardReference::new();
        let t = 14.0;
        let g = reference.gamma(Complex64::new(0.25, 0.5 * t)).unwrap();
        let exact = g.arg() - (t / 2.0) * PI.ln();
        let diff = (theta_asymptotic(t) - exact).rem_euclid(2.0 * PI);
        let wrapped = diff.min(2.0 * PI - diff);
        assert!(wrapped < 1e-8, "difference modulo 2π = {wrapped}");
    }

    #[test]
    fn test_monotone_in_asymptotic_regime() {
        let engine = RiemannSiegel::new();
        assert!(engine.theta(21.0).unwrap() - engine.theta(20.0).unwrap() > 0.1);

        let mut previous = engine.theta(14.0).unwrap();
        for step in 1..=400 {
            let t = 14.0 + step as f64 * 0.25;
            let current = engine.theta(t).unwrap();
            assert!(current > previous, "θ not increasing at t = {t}");
            previous = current;
        }
    }

    #[test]
    fn test_jitter_only_near_integers() {
        let plain = RiemannSiegel::new();
        let options = EngineOptions::default().with_jitter(true);
        let jittered = RiemannSiegel::with_reference(StandardReference::new(), options).unwrap();

        // 20.05 is near an integer: sin(2π·20.05) ≠ 0
        let t = 20.05;
        let delta = jittered.theta(t).unwrap() - plain.theta(t).unwrap();
        let expected = JITTER_AMPLITUDE * (2.0 * PI * t).sin();
        assert!((delta - expected).abs() < 1e-12);

        // 20.5 is outside the window
        assert_eq!(jittered.theta(20.5).unwrap(), plain.theta(20.5).unwrap());
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let engine = RiemannSiegel::new();
        assert!(matches!(
            engine.theta(f64::NAN),
            Err(SiegelError::InvalidArgument(_))
        ));
        assert!(engine.theta(f64::INFINITY).is_err());
    }

    #[test]
    fn test_large_negative_height_is_unstable() {
        let engine = RiemannSiegel::new();
        assert!(matches!(
            engine.theta(-20.0),
            Err(SiegelError::NumericInstability { .. })
        ));
    }
}
