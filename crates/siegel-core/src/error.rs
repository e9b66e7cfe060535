//! Error types shared by the evaluation engines.

use num_complex::Complex64;

/// Failures reported by a [`ReferenceEvaluator`](crate::reference::ReferenceEvaluator).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReferenceError {
    #[error("{function} has a pole at {at}")]
    Pole { function: &'static str, at: Complex64 },

    #[error("{function} produced a non-finite value at {at}")]
    NonFinite { function: &'static str, at: Complex64 },

    #[error("invalid reference parameter: {0}")]
    InvalidParameter(String),
}

/// Failures of the Riemann–Siegel engines.
///
/// Leaving the formula's accuracy region is not an error: those inputs are
/// redirected to the reference evaluator and reported through
/// [`Regime::Reference`](crate::zeta::Regime::Reference).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SiegelError {
    #[error("non-finite {quantity} while evaluating at {at}")]
    NumericInstability { quantity: &'static str, at: Complex64 },

    #[error("reference evaluator failed: {0}")]
    Reference(#[from] ReferenceError),

    #[error("recursion depth {depth} exceeded while evaluating zeta({at})")]
    RecursionLimit { depth: u8, at: Complex64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = SiegelError> = std::result::Result<T, E>;

/// Reject a non-finite real intermediate.
pub(crate) fn finite_real(value: f64, quantity: &'static str, at: Complex64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SiegelError::NumericInstability { quantity, at })
    }
}

/// Reject a non-finite complex intermediate.
pub(crate) fn finite_complex(
    value: Complex64,
    quantity: &'static str,
    at: Complex64,
) -> Result<Complex64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SiegelError::NumericInstability { quantity, at })
    }
}
