//! Configuration builders for tests.
//!
//! Use [`TestConfigBuilder`] to create customised [`AppConfig`] values without
//! repeating boilerplate across crate boundaries.

use siegel_config::AppConfig;

/// Fluent builder for [`AppConfig`] in tests.
///
/// # Example
///
/// ```ignore
/// let config = TestConfigBuilder::new()
///     .near_integer_jitter(true)
///     .terms(Some(8))
///     .build();
/// ```
pub struct TestConfigBuilder {
    config: AppConfig,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn near_integer_jitter(mut self, enabled: bool) -> Self {
        self.config.engine.near_integer_jitter = enabled;
        self
    }

    pub fn conjugate_phase(mut self, enabled: bool) -> Self {
        self.config.engine.conjugate_phase = enabled;
        self
    }

    pub fn max_recursion_depth(mut self, depth: u8) -> Self {
        self.config.engine.max_recursion_depth = depth;
        self
    }

    pub fn terms(mut self, terms: Option<usize>) -> Self {
        self.config.engine.terms = terms;
        self
    }

    pub fn derivative_contour(mut self, radius: f64, points: usize) -> Self {
        self.config.reference.derivative_radius = radius;
        self.config.reference.derivative_points = points;
        self
    }

    pub fn log_level(mut self, level: &str) -> Self {
        self.config.logging.level = level.to_string();
        self
    }

    pub fn sweep(mut self, t_start: f64, t_end: f64, points: usize, sigma: f64) -> Self {
        self.config.sweep.t_start = t_start;
        self.config.sweep.t_end = t_end;
        self.config.sweep.points = points;
        self.config.sweep.sigma = sigma;
        self
    }

    pub fn grid(mut self, re: (f64, f64), im: (f64, f64), resolution: usize) -> Self {
        self.config.grid.re_min = re.0;
        self.config.grid.re_max = re.1;
        self.config.grid.im_min = im.0;
        self.config.grid.im_max = im.1;
        self.config.grid.resolution = resolution;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
