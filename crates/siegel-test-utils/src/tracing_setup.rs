//! Tracing for tests.
//!
//! The engines log regime switches at `debug` and every Z evaluation at
//! `trace`. [`init_test_tracing`] routes those events to the test harness so
//! they show up next to a failing assertion.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_TEST_FILTER: &str = "warn,siegel_core=debug";

/// Install a subscriber writing to the test-harness writer.
///
/// Respects `RUST_LOG`. The subscriber is global, so only the first call in a
/// process takes effect and later ones are ignored.
///
/// ```ignore
/// #[test]
/// fn reflection() {
///     siegel_test_utils::tracing_setup::init_test_tracing();
///     let _ = RiemannSiegel::new().zeta(Complex64::new(0.5, -20.0), None);
/// }
/// ```
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER)),
        )
        .with_target(false)
        .with_test_writer()
        .try_init();
}
