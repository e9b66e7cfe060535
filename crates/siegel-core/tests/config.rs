//! Building engines from configuration files.

use siegel_core::{Complex64, GridSource, GridSpec, RiemannSiegel};
use siegel_test_utils::config::TestConfigBuilder;
use siegel_test_utils::temp_config::TempConfig;

#[tokio::test]
async fn test_engine_from_config_file() {
    siegel_test_utils::tracing_setup::init_test_tracing();
    let file = TempConfig::with_toml(
        r#"
[engine]
near_integer_jitter = true
conjugate_phase = true
terms = 4

[reference]
derivative_radius = 0.1
derivative_points = 64
"#,
    )
    .await;
    let config = file.load().await;
    let engine = RiemannSiegel::from_config(&config).unwrap();

    assert!(engine.options().near_integer_jitter);
    assert!(engine.options().conjugate_phase);
    assert_eq!(engine.options().default_terms, Some(4));
    assert_eq!(engine.reference().derivative_radius(), 0.1);
    assert_eq!(engine.z(500.0, None).unwrap().terms.len(), 4);
}

#[tokio::test]
async fn test_rewritten_config_is_picked_up() {
    let file = TempConfig::with_toml("[engine]\nmax_recursion_depth = 2\n").await;
    assert_eq!(file.load().await.engine.max_recursion_depth, 2);

    file.rewrite("[engine]\nmax_recursion_depth = 6\n").await;
    let engine = RiemannSiegel::from_config(&file.load().await).unwrap();
    assert_eq!(engine.options().max_recursion_depth, 6);
}

#[test]
fn test_shallow_recursion_limit_from_builder() {
    let config = TestConfigBuilder::new().max_recursion_depth(1).build();
    let engine = RiemannSiegel::from_config(&config).unwrap();
    // One reflection is allowed, the functional equation after it is not.
    assert!(engine.zeta(Complex64::new(0.5, -20.0), None).is_ok());
    assert!(engine.zeta(Complex64::new(0.25, -20.0), None).is_err());
}

#[test]
fn test_sweep_and_grid_from_builder() {
    let config = TestConfigBuilder::new()
        .sweep(20.0, 30.0, 6, 0.5)
        .grid((0.25, 0.75), (20.0, 22.0), 4)
        .build();
    let engine = RiemannSiegel::from_config(&config).unwrap();

    let comparisons = engine.sweep(&config.sweep).unwrap();
    assert_eq!(comparisons.len(), 6);
    assert_eq!(comparisons[5].t, 30.0);

    let spec = GridSpec::from_config(&config.grid).unwrap();
    let grid = engine.sample_grid(&spec, GridSource::RiemannSiegel);
    assert_eq!(grid.cells.len(), 16);
    assert_eq!(grid.failed_cells(), 0);
}

#[test]
fn test_conjugate_phase_from_builder() {
    let s = Complex64::new(0.5, 300.0);
    let classic = RiemannSiegel::from_config(&TestConfigBuilder::new().build()).unwrap();
    let config = TestConfigBuilder::new().conjugate_phase(true).build();
    let conjugate = RiemannSiegel::from_config(&config).unwrap();
    let a = classic.zeta(s, None).unwrap();
    let b = conjugate.zeta(s, None).unwrap();
    assert!((a - b.conj()).norm() < 1e-13, "{a} vs {b}");
}
