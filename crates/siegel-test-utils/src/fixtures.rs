//! Known values and sample points shared by the engine test suites.

use siegel_core::Complex64;

/// Ordinates of the first nontrivial zeros of ζ on the critical line.
pub const KNOWN_ZEROS: [f64; 5] = [
    14.134_725_141_734_693,
    21.022_039_638_771_555,
    25.010_857_580_145_688,
    30.424_876_125_859_513,
    32.935_061_587_739_19,
];

/// Points off the critical line where ζ(s) = χ(s)·ζ(1 − s) is checked.
pub fn functional_equation_points() -> Vec<Complex64> {
    vec![
        Complex64::new(0.25, 15.0),
        Complex64::new(0.75, 20.0),
        Complex64::new(0.1, 25.0),
    ]
}

/// Upper half-plane points whose conjugates are checked for symmetry.
pub fn reflection_points() -> Vec<Complex64> {
    vec![
        Complex64::new(0.5, 15.0),
        Complex64::new(0.75, 20.0),
        Complex64::new(0.25, 25.0),
        Complex64::new(0.5, 100.0),
    ]
}

/// Heights on σ = ½ where the reconstruction is compared with the reference.
pub const AGREEMENT_HEIGHTS: [f64; 3] = [30.0, 40.0, 50.0];

/// |a − b| / |b|, or |a| when `b` is zero.
pub fn relative_error(a: Complex64, b: Complex64) -> f64 {
    let scale = b.norm();
    if scale == 0.0 {
        a.norm()
    } else {
        (a - b).norm() / scale
    }
}
