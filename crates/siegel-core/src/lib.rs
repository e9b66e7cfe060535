#![deny(unsafe_code)]

//! Riemann–Siegel evaluation of the Riemann zeta function.
//!
//! Computes the Riemann–Siegel theta function θ(t), the Hardy Z-function
//! Z(t) and ζ(s) in the critical strip. ζ is rebuilt from Z on the critical
//! line and extended off it by conjugate reflection, the functional equation
//! and a Taylor step. Inputs where the formula is not accurate are delegated
//! to a [`ReferenceEvaluator`], which also supplies gamma values and ζ
//! derivatives.
//!
//! ```no_run
//! use siegel_core::{Complex64, RiemannSiegel};
//!
//! let engine = RiemannSiegel::new();
//! let z = engine.z(1000.0, None)?;
//! let zeta = engine.zeta(Complex64::new(0.5, 14.134_725), None)?;
//! # Ok::<(), siegel_core::SiegelError>(())
//! ```

/// Compile-time build metadata (version, git hash, profile).
pub mod build_info;
/// The shared evaluation context.
pub mod engine;
/// Error types.
pub mod error;
/// Magnitude and phase sampling over a rectangle.
pub mod grid;
/// Reference evaluator trait and the standard backend.
pub mod reference;
/// Comparison sweeps against the reference evaluator.
pub mod sweep;
/// The Riemann–Siegel theta function.
pub mod theta;
/// Height thresholds that switch between evaluation strategies.
pub mod thresholds;
/// ζ(s) reconstruction.
pub mod zeta;
/// The Z-function.
pub mod zfunc;

pub use engine::{EngineOptions, RiemannSiegel};
pub use error::{ReferenceError, Result, SiegelError};
pub use grid::{GridCell, GridSource, GridSpec, ZetaGrid};
pub use num_complex::Complex64;
pub use reference::{DerivativeOrder, ReferenceEvaluator, StandardReference};
pub use sweep::{Comparison, SweepSummary, linspace};
pub use theta::theta_asymptotic;
pub use zeta::{Evaluation, Regime, in_siegel_region};
pub use zfunc::{CorrectionOrder, ZValue, optimal_terms};

/// θ(t) with the standard reference and default options.
pub fn theta(t: f64) -> Result<f64> {
    RiemannSiegel::new().theta(t)
}

/// Z(t) with the standard reference and default options.
pub fn z(t: f64, terms: Option<usize>) -> Result<ZValue> {
    RiemannSiegel::new().z(t, terms)
}

/// ζ(s) with the standard reference and default options.
pub fn riemann_siegel_zeta(s: Complex64, terms: Option<usize>) -> Result<Complex64> {
    RiemannSiegel::new().zeta(s, terms)
}
