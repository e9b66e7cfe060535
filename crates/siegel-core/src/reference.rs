//! Reference evaluator interface and the standard double-precision backend.
//!
//! The Riemann–Siegel engines never compute ζ or Γ directly. They consume a
//! [`ReferenceEvaluator`], which supplies full ζ values for inputs outside
//! the formula's accuracy region, derivatives for the off-line Taylor step,
//! and gamma values for θ and the functional-equation factor.
//!
//! [`StandardReference`] is the bundled implementation:
//!
//! | Quantity | Method |
//! |----------|--------|
//! | Γ(s), ln Γ(s) | Lanczos (g = 7, n = 9) with reflection for Re s < ½ |
//! | ζ(s)     | Euler–Maclaurin summation, functional equation for Re s < 0 |
//! | ζ⁽ᵏ⁾(s)  | Cauchy integral, trapezoidal rule on a circle |
//!
//! Accuracy is close to double precision for moderate |s| (relative error
//! around 1e-12 at heights of a few thousand). An arbitrary-precision
//! library can be plugged in by implementing the trait.

mod euler_maclaurin;
mod lanczos;

use std::f64::consts::{LN_2, PI};

use num_complex::Complex64;
use siegel_config::ReferenceConfig;

pub use crate::error::ReferenceError;

/// Order of a ζ derivative requested from the reference evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum DerivativeOrder {
    First,
    Second,
}

impl DerivativeOrder {
    /// The numeric order `k` of ζ⁽ᵏ⁾.
    pub fn as_u32(self) -> u32 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

/// External complex-analytic evaluator used as ground truth and fallback.
///
/// Implementations must be pure: the same input always yields the same
/// output, and calls may happen concurrently from several threads.
pub trait ReferenceEvaluator: Send + Sync {
    /// ζ(s).
    fn zeta(&self, s: Complex64) -> Result<Complex64, ReferenceError>;

    /// ζ'(s) or ζ''(s).
    fn zeta_derivative(
        &self,
        s: Complex64,
        order: DerivativeOrder,
    ) -> Result<Complex64, ReferenceError>;

    /// Γ(s).
    fn gamma(&self, s: Complex64) -> Result<Complex64, ReferenceError>;

    /// A logarithm of Γ(s), any branch.
    ///
    /// Backends should override this when Γ itself under- or overflows at
    /// large |Im s|; the default takes the logarithm of [`gamma`](Self::gamma).
    fn ln_gamma(&self, s: Complex64) -> Result<Complex64, ReferenceError> {
        let g = self.gamma(s)?;
        if g == Complex64::new(0.0, 0.0) {
            return Err(ReferenceError::NonFinite {
                function: "ln_gamma",
                at: s,
            });
        }
        Ok(g.ln())
    }

    /// Principal argument of `z`, in (−π, π].
    fn complex_arg(&self, z: Complex64) -> f64 {
        z.arg()
    }
}

/// ln(2^s·π^(s−1)·sin(πs/2)), the elementary factor of χ(s).
///
/// Adding a logarithm of Γ(1 − s) and exponentiating gives χ(s) without the
/// overflow of sin(πs/2) or the underflow of Γ(1 − s) at large |t|.
pub(crate) fn ln_chi_elementary(s: Complex64) -> Complex64 {
    s * LN_2 + (s - 1.0) * PI.ln() + lanczos::ln_sin(s * PI / 2.0)
}

/// Double-precision reference evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardReference {
    derivative_radius: f64,
    derivative_points: usize,
}

impl StandardReference {
    /// Default contour radius for derivatives.
    pub const DEFAULT_DERIVATIVE_RADIUS: f64 = 0.05;
    /// Default number of contour nodes for derivatives.
    pub const DEFAULT_DERIVATIVE_POINTS: usize = 32;

    /// Create an evaluator with the default derivative contour.
    pub fn new() -> Self {
        Self {
            derivative_radius: Self::DEFAULT_DERIVATIVE_RADIUS,
            derivative_points: Self::DEFAULT_DERIVATIVE_POINTS,
        }
    }

    /// Create an evaluator with a custom derivative contour.
    pub fn with_contour(radius: f64, points: usize) -> Result<Self, ReferenceError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ReferenceError::InvalidParameter(format!(
                "derivative radius must be positive and finite, got {radius}"
            )));
        }
        if points < 8 {
            return Err(ReferenceError::InvalidParameter(format!(
                "derivative contour needs at least 8 points, got {points}"
            )));
        }
        Ok(Self {
            derivative_radius: radius,
            derivative_points: points,
        })
    }

    /// Build from the `[reference]` configuration table.
    pub fn from_config(config: &ReferenceConfig) -> Result<Self, ReferenceError> {
        Self::with_contour(config.derivative_radius, config.derivative_points)
    }

    /// Contour radius used for derivatives.
    pub fn derivative_radius(&self) -> f64 {
        self.derivative_radius
    }

    /// Number of contour nodes used for derivatives.
    pub fn derivative_points(&self) -> usize {
        self.derivative_points
    }
}

impl Default for StandardReference {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceEvaluator for StandardReference {
    fn zeta(&self, s: Complex64) -> Result<Complex64, ReferenceError> {
        euler_maclaurin::zeta(s)
    }

    fn zeta_derivative(
        &self,
        s: Complex64,
        order: DerivativeOrder,
    ) -> Result<Complex64, ReferenceError> {
        let r = self.derivative_radius;
        if (s - 1.0).norm() <= 2.0 * r {
            return Err(ReferenceError::Pole { function: "zeta", at: s });
        }

        // ζ⁽ᵏ⁾(s) = k!/(2πi) ∮ ζ(z)/(z − s)^(k+1) dz on |z − s| = r.
        let k = order.as_u32();
        let m = self.derivative_points;
        let mut acc = Complex64::new(0.0, 0.0);
        for j in 0..m {
            let angle = 2.0 * PI * j as f64 / m as f64;
            let node = Complex64::from_polar(1.0, angle);
            let value = euler_maclaurin::zeta(s + node * r)?;
            acc += value * Complex64::from_polar(1.0, -(k as f64) * angle);
        }
        let factorial = if k == 1 { 1.0 } else { 2.0 };
        let value = acc * (factorial / (m as f64 * r.powi(k as i32)));
        tracing::trace!(%s, order = k, nodes = m, radius = r, "zeta derivative contour");

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ReferenceError::NonFinite {
                function: "zeta_derivative",
                at: s,
            })
        }
    }

    fn gamma(&self, s: Complex64) -> Result<Complex64, ReferenceError> {
        lanczos::gamma(s)
    }

    fn ln_gamma(&self, s: Complex64) -> Result<Complex64, ReferenceError> {
        lanczos::ln_gamma(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Complex64, expected: Complex64, tol: f64) {
        let err = (actual - expected).norm() / expected.norm().max(1e-300);
        assert!(
            err < tol,
            "expected {expected}, got {actual} (relative error {err:e})"
        );
    }

    #[test]
    fn test_default_contour() {
        let reference = StandardReference::default();
        assert_eq!(reference.derivative_radius(), 0.05);
        assert_eq!(reference.derivative_points(), 32);
    }

    #[test]
    fn test_with_contour_rejects_bad_parameters() {
        assert!(StandardReference::with_contour(0.0, 32).is_err());
        assert!(StandardReference::with_contour(f64::NAN, 32).is_err());
        assert!(StandardReference::with_contour(0.05, 4).is_err());
        assert!(StandardReference::with_contour(0.1, 64).is_ok());
    }

    #[test]
    fn test_from_config() {
        let config = ReferenceConfig {
            derivative_radius: 0.1,
            derivative_points: 48,
        };
        let reference = StandardReference::from_config(&config).unwrap();
        assert_eq!(reference.derivative_radius(), 0.1);
        assert_eq!(reference.derivative_points(), 48);
    }

    #[test]
    fn test_first_derivative_matches_known_value() {
        // ζ'(2) = −0.937548254315843...
        let reference = StandardReference::new();
        let d = reference
            .zeta_derivative(Complex64::new(2.0, 0.0), DerivativeOrder::First)
            .unwrap();
        assert_close(d, Complex64::new(-0.937_548_254_315_843_8, 0.0), 1e-10);
    }

    #[test]
    fn test_second_derivative_matches_known_value() {
        // ζ''(2) = 1.98928023429890...
        let reference = StandardReference::new();
        let d = reference
            .zeta_derivative(Complex64::new(2.0, 0.0), DerivativeOrder::Second)
            .unwrap();
        assert_close(d, Complex64::new(1.989_280_234_298_9, 0.0), 1e-9);
    }

    #[test]
    fn test_derivative_agrees_with_difference_quotient() {
        let reference = StandardReference::new();
        let s = Complex64::new(0.5, 20.0);
        let h = 1e-5;
        let forward = reference.zeta(s + h).unwrap();
        let backward = reference.zeta(s - h).unwrap();
        let quotient = (forward - backward) / (2.0 * h);
        let d = reference
            .zeta_derivative(s, DerivativeOrder::First)
            .unwrap();
        assert_close(d, quotient, 1e-7);
    }

    #[test]
    fn test_derivative_near_pole_is_rejected() {
        let reference = StandardReference::new();
        let result = reference.zeta_derivative(Complex64::new(1.05, 0.0), DerivativeOrder::First);
        assert!(matches!(result, Err(ReferenceError::Pole { .. })));
    }

    #[test]
    fn test_complex_arg_is_principal() {
        let reference = StandardReference::new();
        assert_eq!(reference.complex_arg(Complex64::new(-1.0, 0.0)), PI);
        assert!(reference.complex_arg(Complex64::new(-1.0, -1e-300)) < 0.0);
        assert_eq!(reference.complex_arg(Complex64::new(0.0, 2.0)), PI / 2.0);
    }
}
