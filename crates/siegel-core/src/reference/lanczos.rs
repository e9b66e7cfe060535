//! Complex gamma function via the Lanczos approximation.
//!
//! Both Γ and ln Γ are provided. At heights of a few hundred Γ(σ + it)
//! underflows while ln Γ stays well scaled, so products of gamma with
//! exponentially large factors are formed in log space.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::error::ReferenceError;

// ---------------------------------------------------------------------------
// Lanczos approximation constants (g = 7, n = 9)
// Coefficients from Paul Godfrey / Boost / CPython.
// ---------------------------------------------------------------------------

const LANCZOS_G: f64 = 7.0;

const LANCZOS_COEFFS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// Evaluate the Lanczos series Ag(z) = c0 + c1/(z+1) + c2/(z+2) + ...
#[inline]
fn lanczos_sum(z: Complex64) -> Complex64 {
    let mut sum = Complex64::new(LANCZOS_COEFFS[0], 0.0);
    for (i, &c) in LANCZOS_COEFFS[1..].iter().enumerate() {
        sum += c / (z + (i + 1) as f64);
    }
    sum
}

fn is_pole(s: Complex64) -> bool {
    s.im == 0.0 && s.re <= 0.0 && s.re.fract() == 0.0
}

/// Γ(s) for complex `s`.
///
/// Uses the reflection formula Γ(s) = π / (sin(πs)·Γ(1 − s)) for Re s < ½.
pub(crate) fn gamma(s: Complex64) -> Result<Complex64, ReferenceError> {
    if is_pole(s) {
        return Err(ReferenceError::Pole {
            function: "gamma",
            at: s,
        });
    }

    let value = if s.re < 0.5 {
        PI / ((s * PI).sin() * gamma_right(1.0 - s))
    } else {
        gamma_right(s)
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ReferenceError::NonFinite {
            function: "gamma",
            at: s,
        })
    }
}

/// A logarithm of Γ(s). Not the principal branch: only exp(ln_gamma(s))
/// is meaningful.
pub(crate) fn ln_gamma(s: Complex64) -> Result<Complex64, ReferenceError> {
    if is_pole(s) {
        return Err(ReferenceError::Pole {
            function: "gamma",
            at: s,
        });
    }

    let value = if s.re < 0.5 {
        PI.ln() - ln_sin(s * PI) - ln_gamma_right(1.0 - s)
    } else {
        ln_gamma_right(s)
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ReferenceError::NonFinite {
            function: "ln_gamma",
            at: s,
        })
    }
}

/// ln sin(z) without forming sin(z).
///
/// For Im z > 0, sin z = (i/2)·e^(−iz)·(1 − e^(2iz)) and |e^(2iz)| < 1.
/// The lower half-plane follows by conjugation.
pub(crate) fn ln_sin(z: Complex64) -> Complex64 {
    if z.im > 0.0 {
        let i = Complex64::i();
        -i * z + (i * 0.5).ln() + (1.0 - (i * z * 2.0).exp()).ln()
    } else if z.im < 0.0 {
        ln_sin(z.conj()).conj()
    } else {
        z.sin().ln()
    }
}

/// Lanczos evaluation, valid for Re s ≥ ½.
fn gamma_right(s: Complex64) -> Complex64 {
    ln_gamma_right(s).exp()
}

/// ln Γ(s) = ½ ln 2π + (z + ½) ln(z + g + ½) − (z + g + ½) + ln Ag(z), z = s − 1.
fn ln_gamma_right(s: Complex64) -> Complex64 {
    let z = s - 1.0;
    let t = z + LANCZOS_G + 0.5;
    0.5 * (2.0 * PI).ln() + (z + 0.5) * t.ln() - t + lanczos_sum(z).ln()
}
