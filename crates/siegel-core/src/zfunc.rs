//! The Riemann–Siegel Z-function.
//!
//! Z(t) = 2·Σ_{n≤N} n^(−½) cos(θ(t) − t ln n) + R(t), where the remainder
//! R(t) is built from up to four correction orders. Higher orders are only
//! evaluated once every lower height threshold is exceeded.

use std::f64::consts::PI;

use num_complex::Complex64;
use serde::Serialize;

use crate::engine::RiemannSiegel;
use crate::error::{Result, SiegelError, finite_real};
use crate::reference::ReferenceEvaluator;
use crate::thresholds::{
    FOURTH_ORDER_HEIGHT, JITTER_AMPLITUDE, MAX_MAIN_SUM_TERMS, SECOND_ORDER_HEIGHT,
    THIRD_ORDER_HEIGHT, near_integer,
};

/// Result of a Z-function evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZValue {
    /// Z(t).
    pub value: f64,
    /// Main-sum summands n^(−½)·e^(i(θ − t ln n)) for n = 1..=N.
    pub terms: Vec<Complex64>,
}

/// Highest remainder correction applied at a given height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum CorrectionOrder {
    First,
    Second,
    Third,
    Fourth,
}

impl CorrectionOrder {
    /// The correction order used by [`RiemannSiegel::z`] at height `t`.
    pub fn for_height(t: f64) -> Self {
        if t > SECOND_ORDER_HEIGHT {
            if t > THIRD_ORDER_HEIGHT {
                if t > FOURTH_ORDER_HEIGHT {
                    return Self::Fourth;
                }
                return Self::Third;
            }
            return Self::Second;
        }
        Self::First
    }
}

/// ⌊√(t/2π)⌋, the main-sum length balancing sum cost against remainder size.
pub fn optimal_terms(t: f64) -> usize {
    (t / (2.0 * PI)).sqrt().floor() as usize
}

/// (−1)^k
fn alternating(k: i64) -> f64 {
    if k.rem_euclid(2) == 0 { 1.0 } else { -1.0 }
}

/// Remainder R(t) for a main sum of `n` terms, before any jitter.
///
/// The correction terms applied are exactly those up to
/// [`CorrectionOrder::for_height`].
fn remainder(t: f64, n: usize) -> f64 {
    let order = CorrectionOrder::for_height(t);
    let n_signed = n as i64;
    let p = 2.0 * PI * (n as f64) * (n as f64) / t;
    let frac = p - p.floor();

    let scale = (2.0 * PI / t).powf(0.25);
    let inverse_scale = (2.0 * PI / t).powf(-0.25);

    let phi = 2.0 * PI * (frac * frac - frac - 0.125);
    let mut r = alternating(n_signed - 1) * scale * phi.cos();

    if order >= CorrectionOrder::Second {
        let phi2 = 2.0 * PI * (frac * frac - frac + 0.375);
        let d2 = -0.125 / t;
        r += d2 * alternating(n_signed) * inverse_scale * phi2.cos();

        if order >= CorrectionOrder::Third {
            let d3 = (3.0 - 8.0 * frac) / (16.0 * t);
            r += d3 * alternating(n_signed - 1) * scale * phi.sin();

            if order >= CorrectionOrder::Fourth {
                let d4 = (27.0 - 32.0 * frac * frac) / (384.0 * t);
                r += d4 * alternating(n_signed) * inverse_scale * phi2.cos();
            }
        }
    }
    r
}

impl<R: ReferenceEvaluator> RiemannSiegel<R> {
    /// Z(t) for finite t > 0, with the individual main-sum terms.
    ///
    /// `terms` overrides the main-sum length; otherwise the engine default
    /// or [`optimal_terms`] is used.
    pub fn z(&self, t: f64, terms: Option<usize>) -> Result<ZValue> {
        self.z_with_theta(t, terms).map(|(z, _)| z)
    }

    /// Z(t) together with the θ(t) used for its phases.
    pub(crate) fn z_with_theta(&self, t: f64, terms: Option<usize>) -> Result<(ZValue, f64)> {
        if !t.is_finite() || t <= 0.0 {
            return Err(SiegelError::InvalidArgument(format!(
                "Z requires a finite positive height, got {t}"
            )));
        }
        let at = Complex64::new(0.5, t);
        let n = terms
            .or(self.options().default_terms)
            .unwrap_or_else(|| optimal_terms(t));
        if n > MAX_MAIN_SUM_TERMS {
            return Err(SiegelError::InvalidArgument(format!(
                "main sum of {n} terms at t = {t} exceeds the limit of {MAX_MAIN_SUM_TERMS}"
            )));
        }
        let theta = self.theta(t)?;

        let mut main_sum = 0.0;
        let mut summands = Vec::with_capacity(n);
        for k in 1..=n {
            let k = k as f64;
            let phase = theta - t * k.ln();
            let term = Complex64::new(phase.cos(), phase.sin()) / k.sqrt();
            main_sum += term.re;
            summands.push(term);
        }

        let mut r = remainder(t, n);
        if self.options().near_integer_jitter && near_integer(t) {
            r *= 1.0 + JITTER_AMPLITUDE * (2.0 * PI * t).cos();
        }

        let value = finite_real(2.0 * main_sum + r, "Z", at)?;
        tracing::trace!(
            t,
            terms = n,
            order = ?CorrectionOrder::for_height(t),
            value,
            "Z evaluated"
        );
        Ok((
            ZValue {
                value,
                terms: summands,
            },
            theta,
        ))
    }
}
