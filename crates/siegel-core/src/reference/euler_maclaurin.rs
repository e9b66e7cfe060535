//! ζ(s) by Euler–Maclaurin summation.
//!
//! ζ(s) = Σ_{n<N} n^(−s) + N^(1−s)/(s − 1) + N^(−s)/2
//!        + Σ_k B_{2k}/(2k)! · s(s+1)…(s+2k−2) · N^(−s−2k+1)

use std::f64::consts::PI;

use num_complex::Complex64;

use super::lanczos;
use crate::error::ReferenceError;

/// B_{2k} / (2k)! for k = 1..=13.
const BERNOULLI_OVER_FACTORIAL: [f64; 13] = [
    8.333_333_333_333_333e-2,
    -1.388_888_888_888_889e-3,
    3.306_878_306_878_307e-5,
    -8.267_195_767_195_768e-7,
    2.087_675_698_786_81e-8,
    -5.284_190_138_687_493e-10,
    1.338_253_653_068_468e-11,
    -3.389_680_296_322_583e-13,
    8.586_062_056_277_845e-15,
    -2.174_868_698_558_062e-16,
    5.509_002_828_360_23e-18,
    -1.395_446_468_581_252_5e-19,
    3.534_707_039_629_467e-21,
];

/// Direct terms kept below the cutoff N, on top of the height-dependent part.
const BASE_TERMS: usize = 20;

/// Heights beyond which the direct sum would exceed this many terms are
/// rejected.
const MAX_CUTOFF: f64 = (1u64 << 26) as f64;

/// Relative size below which the Bernoulli tail is truncated.
const TAIL_EPSILON: f64 = 1e-17;

pub(crate) fn zeta(s: Complex64) -> Result<Complex64, ReferenceError> {
    if s == Complex64::new(1.0, 0.0) {
        return Err(ReferenceError::Pole {
            function: "zeta",
            at: s,
        });
    }
    if s.im.abs() / PI > MAX_CUTOFF {
        return Err(ReferenceError::InvalidParameter(format!(
            "zeta height {} is beyond the summation range",
            s.im
        )));
    }

    let value = if s.re < 0.0 {
        // ζ(s) = χ(s)·ζ(1 − s), with χ formed in log space
        let reflected = 1.0 - s;
        (super::ln_chi_elementary(s) + lanczos::ln_gamma(reflected)?).exp() * summation(reflected)
    } else {
        summation(s)
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ReferenceError::NonFinite {
            function: "zeta",
            at: s,
        })
    }
}

/// Euler–Maclaurin evaluation, accurate for Re s ≥ 0.
fn summation(s: Complex64) -> Complex64 {
    let cutoff = (s.im.abs() / PI) as usize + BASE_TERMS;
    let n = cutoff as f64;

    let mut acc = Complex64::new(0.0, 0.0);
    for k in 1..cutoff {
        acc += (-s).expf(k as f64);
    }

    let n_pow = (-s).expf(n);
    acc += n_pow * n / (s - 1.0) + n_pow * 0.5;

    // term_k = s(s+1)…(s+2k−2) · N^(−s−2k+1)
    let mut term = s * n_pow / n;
    for (k, &coeff) in BERNOULLI_OVER_FACTORIAL.iter().enumerate() {
        let correction = term * coeff;
        acc += correction;
        if correction.norm() < TAIL_EPSILON * acc.norm() {
            break;
        }
        let rising = 2.0 * k as f64;
        term = term * (s + rising + 1.0) * (s + rising + 2.0) / (n * n);
    }
    acc
}
