//! Reconstruction of ζ(s) from the Z-function.
//!
//! On the critical line the value is Z(t)·(cos θ(t) + i·sin θ(t)), or the
//! conjugate rotation Z(t)·e^(−iθ(t)) when
//! [`EngineOptions::conjugate_phase`](crate::EngineOptions) is set. Away from
//! it:
//!
//! - t < 0 is reflected through conjugate symmetry, ζ(s̄) = conj ζ(s);
//! - σ < ½ goes through the functional equation ζ(s) = χ(s)·ζ(1 − s);
//! - ½ < σ ≤ 1 adds a second-order Taylor step from the critical line,
//!   with derivatives taken from the reference evaluator.
//!
//! Inputs with |t| < 14 or |σ − ½| > ½ are outside the formula's accuracy
//! region and are handed to the reference evaluator unchanged.

use num_complex::Complex64;
use serde::Serialize;

use crate::engine::RiemannSiegel;
use crate::error::{Result, SiegelError, finite_complex};
use crate::reference::{DerivativeOrder, ReferenceEvaluator, ln_chi_elementary};
use crate::thresholds::{CRITICAL_BAND, SMALL_HEIGHT};

/// Which computation produced a ζ value.
///
/// Conjugate reflection is transparent: a value obtained by reflecting into
/// the upper half-plane reports the regime of the reflected evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Regime {
    /// Delegated to the reference evaluator.
    Reference,
    /// Z(t) rotated by θ(t) on σ = ½.
    CriticalLine,
    /// Critical-line value plus a second-order Taylor step in σ.
    TaylorOffset,
    /// χ(s)·ζ(1 − s) for σ < ½.
    FunctionalEquation,
}

/// A ζ value together with the regime that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub value: Complex64,
    pub regime: Regime,
}

/// Whether the Riemann–Siegel reconstruction handles `s` itself.
pub fn in_siegel_region(s: Complex64) -> bool {
    s.im.abs() >= SMALL_HEIGHT && (s.re - 0.5).abs() <= CRITICAL_BAND
}

impl<R: ReferenceEvaluator> RiemannSiegel<R> {
    /// ζ(s) by the Riemann–Siegel formula, with reference fallback.
    pub fn zeta(&self, s: Complex64, terms: Option<usize>) -> Result<Complex64> {
        self.evaluate(s, terms).map(|e| e.value)
    }

    /// ζ(s) together with the regime that produced it.
    pub fn evaluate(&self, s: Complex64, terms: Option<usize>) -> Result<Evaluation> {
        if !s.is_finite() {
            return Err(SiegelError::InvalidArgument(format!(
                "zeta requires a finite argument, got {s}"
            )));
        }
        let evaluation = self.evaluate_at_depth(s, terms, 0)?;
        finite_complex(evaluation.value, "zeta", s)?;
        Ok(evaluation)
    }

    /// χ(s) = 2^s·π^(s−1)·sin(πs/2)·Γ(1 − s).
    ///
    /// The product is formed as the exponential of a sum of logarithms, so
    /// large heights where sin overflows and Γ underflows stay finite.
    pub fn chi(&self, s: Complex64) -> Result<Complex64> {
        let ln_gamma = self.reference().ln_gamma(1.0 - s)?;
        let value = (ln_chi_elementary(s) + ln_gamma).exp();
        finite_complex(value, "chi", s)
    }

    fn evaluate_at_depth(&self, s: Complex64, terms: Option<usize>, depth: u8) -> Result<Evaluation> {
        if depth > self.options().max_recursion_depth {
            return Err(SiegelError::RecursionLimit { depth, at: s });
        }
        let (sigma, t) = (s.re, s.im);

        if !in_siegel_region(s) {
            tracing::debug!(%s, "outside Riemann-Siegel region, using reference zeta");
            let value = self.reference().zeta(s)?;
            return Ok(Evaluation {
                value,
                regime: Regime::Reference,
            });
        }

        if t < 0.0 {
            let reflected = self.evaluate_at_depth(s.conj(), terms, depth + 1)?;
            return Ok(Evaluation {
                value: reflected.value.conj(),
                regime: reflected.regime,
            });
        }

        if sigma < 0.5 {
            let chi = self.chi(s)?;
            let mirrored = self.evaluate_at_depth(1.0 - s, terms, depth + 1)?;
            tracing::debug!(%s, %chi, "functional equation");
            return Ok(Evaluation {
                value: chi * mirrored.value,
                regime: Regime::FunctionalEquation,
            });
        }

        let (z, theta) = self.z_with_theta(t, terms)?;
        let rotation = if self.options().conjugate_phase {
            Complex64::new(theta.cos(), -theta.sin())
        } else {
            Complex64::new(theta.cos(), theta.sin())
        };
        let critical = rotation * z.value;

        if sigma == 0.5 {
            return Ok(Evaluation {
                value: critical,
                regime: Regime::CriticalLine,
            });
        }

        let on_line = Complex64::new(0.5, t);
        let first = self
            .reference()
            .zeta_derivative(on_line, DerivativeOrder::First)?;
        let second = self
            .reference()
            .zeta_derivative(on_line, DerivativeOrder::Second)?;
        let dx = sigma - 0.5;
        tracing::debug!(%s, dx, "Taylor step off the critical line");
        Ok(Evaluation {
            value: critical + first * dx + second * (0.5 * dx * dx),
            regime: Regime::TaylorOffset,
        })
    }
}
