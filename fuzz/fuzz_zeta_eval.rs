//! Fuzz target for ζ evaluation.
//!
//! Run with: cargo +nightly fuzz run fuzz_zeta_eval
//!
//! Interprets the input as (σ, t) pairs of little-endian f64. Evaluation may
//! fail but must never panic, and a successful result must be finite.

#![no_main]

use libfuzzer_sys::fuzz_target;
use siegel_core::{Complex64, RiemannSiegel};

fuzz_target!(|data: &[u8]| {
    let engine = RiemannSiegel::new();
    for chunk in data.chunks_exact(16).take(8) {
        let (re, im) = chunk.split_at(8);
        let sigma = f64::from_le_bytes(re.try_into().unwrap_or([0; 8]));
        let t = f64::from_le_bytes(im.try_into().unwrap_or([0; 8]));

        if let Ok(value) = engine.zeta(Complex64::new(sigma, t), None) {
            assert!(value.is_finite(), "zeta({sigma} + {t}i) = {value}");
        }
        if let Ok(theta) = engine.theta(t) {
            assert!(theta.is_finite());
        }
        if let Ok(z) = engine.z(t, None) {
            assert!(z.value.is_finite());
        }
    }
});
