#![deny(unsafe_code)]

//! Configuration loading and validation for the Siegel zeta engine.
//!
//! Loads TOML configuration files and validates them against expected ranges.
//! Provides the [`AppConfig`] type as the central configuration structure.
//! Numerical thresholds of the Riemann–Siegel formula are fixed constants in
//! `siegel-core` and are deliberately absent here.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Top-level application configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Riemann–Siegel engine options.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Standard reference evaluator tuning.
    #[serde(default)]
    pub reference: ReferenceConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Defaults for critical-line comparison sweeps.
    #[serde(default)]
    pub sweep: SweepConfig,

    /// Defaults for rectangular grid sampling.
    #[serde(default)]
    pub grid: GridConfig,
}

/// Riemann–Siegel engine options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Apply the near-integer 1e-5 sinusoidal adjustment to θ(t) and the
    /// Z remainder. Not part of the classical formula.
    #[serde(default)]
    pub near_integer_jitter: bool,

    /// Rebuild ζ(½ + it) as Z(t)·e^(−iθ(t)) instead of Z(t)·e^(iθ(t)).
    /// The default rotation yields the complex conjugate of ζ.
    #[serde(default)]
    pub conjugate_phase: bool,

    /// Upper bound on reflection / functional-equation recursion.
    #[serde(default = "default_max_recursion_depth")]
    pub max_recursion_depth: u8,

    /// Fixed main-sum length. `None` selects ⌊√(t/2π)⌋ per evaluation.
    #[serde(default)]
    pub terms: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            near_integer_jitter: false,
            conjugate_phase: false,
            max_recursion_depth: default_max_recursion_depth(),
            terms: None,
        }
    }
}

fn default_max_recursion_depth() -> u8 {
    4
}

/// Tuning for the double-precision reference evaluator.
///
/// Derivatives of ζ are taken with a Cauchy integral over a circle of
/// `derivative_radius` sampled at `derivative_points` nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// Radius of the derivative contour.
    #[serde(default = "default_derivative_radius")]
    pub derivative_radius: f64,

    /// Number of trapezoidal nodes on the derivative contour.
    #[serde(default = "default_derivative_points")]
    pub derivative_points: usize,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            derivative_radius: default_derivative_radius(),
            derivative_points: default_derivative_points(),
        }
    }
}

fn default_derivative_radius() -> f64 {
    0.05
}

fn default_derivative_points() -> usize {
    32
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Critical-line comparison sweep defaults.
///
/// ## TOML Example
///
/// ```toml
/// [sweep]
/// t_start = 100.0
/// t_end = 120.0
/// points = 1000
/// sigma = 0.5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// First height of the sweep.
    #[serde(default = "default_sweep_start")]
    pub t_start: f64,

    /// Last height of the sweep (inclusive).
    #[serde(default = "default_sweep_end")]
    pub t_end: f64,

    /// Number of evenly spaced heights.
    #[serde(default = "default_sweep_points")]
    pub points: usize,

    /// Real part used for every point of the sweep.
    #[serde(default = "default_sweep_sigma")]
    pub sigma: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            t_start: default_sweep_start(),
            t_end: default_sweep_end(),
            points: default_sweep_points(),
            sigma: default_sweep_sigma(),
        }
    }
}

fn default_sweep_start() -> f64 {
    100.0
}

fn default_sweep_end() -> f64 {
    120.0
}

fn default_sweep_points() -> usize {
    1000
}

fn default_sweep_sigma() -> f64 {
    0.5
}

/// Rectangular grid sampling defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_grid_re_min")]
    pub re_min: f64,

    #[serde(default = "default_grid_re_max")]
    pub re_max: f64,

    #[serde(default = "default_grid_im_min")]
    pub im_min: f64,

    #[serde(default = "default_grid_im_max")]
    pub im_max: f64,

    /// Points per axis.
    #[serde(default = "default_grid_resolution")]
    pub resolution: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            re_min: default_grid_re_min(),
            re_max: default_grid_re_max(),
            im_min: default_grid_im_min(),
            im_max: default_grid_im_max(),
            resolution: default_grid_resolution(),
        }
    }
}

fn default_grid_re_min() -> f64 {
    -2.0
}

fn default_grid_re_max() -> f64 {
    4.0
}

fn default_grid_im_min() -> f64 {
    -20.0
}

fn default_grid_im_max() -> f64 {
    20.0
}

fn default_grid_resolution() -> usize {
    200
}

impl AppConfig {
    /// Load configuration from a TOML file at the given path using async I/O.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path).await?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "Loaded config file");
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=16).contains(&self.engine.max_recursion_depth) {
            return Err(ConfigError::Validation(format!(
                "engine.max_recursion_depth must be in [1, 16], got {}",
                self.engine.max_recursion_depth
            )));
        }
        if self.engine.terms == Some(0) {
            return Err(ConfigError::Validation(
                "engine.terms must be at least 1 when set".to_string(),
            ));
        }

        // Validate reference evaluator tuning
        let radius = self.reference.derivative_radius;
        if !radius.is_finite() || radius <= 0.0 || radius > 0.25 {
            return Err(ConfigError::Validation(format!(
                "reference.derivative_radius must be in (0.0, 0.25], got {radius}"
            )));
        }
        if !(8..=1024).contains(&self.reference.derivative_points) {
            return Err(ConfigError::Validation(format!(
                "reference.derivative_points must be in [8, 1024], got {}",
                self.reference.derivative_points
            )));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got {:?}",
                valid_levels, self.logging.level
            )));
        }

        // Validate sweep defaults
        if !self.sweep.t_start.is_finite() || !self.sweep.t_end.is_finite() {
            return Err(ConfigError::Validation(
                "sweep.t_start and sweep.t_end must be finite".to_string(),
            ));
        }
        if self.sweep.t_start >= self.sweep.t_end {
            return Err(ConfigError::Validation(format!(
                "sweep.t_start ({}) must be below sweep.t_end ({})",
                self.sweep.t_start, self.sweep.t_end
            )));
        }
        if self.sweep.points < 2 {
            return Err(ConfigError::Validation(
                "sweep.points must be at least 2".to_string(),
            ));
        }
        if !self.sweep.sigma.is_finite() {
            return Err(ConfigError::Validation(
                "sweep.sigma must be finite".to_string(),
            ));
        }

        // Validate grid defaults
        let grid = &self.grid;
        if [grid.re_min, grid.re_max, grid.im_min, grid.im_max]
            .iter()
            .any(|v| !v.is_finite())
        {
            return Err(ConfigError::Validation(
                "grid bounds must be finite".to_string(),
            ));
        }
        if grid.re_min >= grid.re_max {
            return Err(ConfigError::Validation(format!(
                "grid.re_min ({}) must be below grid.re_max ({})",
                grid.re_min, grid.re_max
            )));
        }
        if grid.im_min >= grid.im_max {
            return Err(ConfigError::Validation(format!(
                "grid.im_min ({}) must be below grid.im_max ({})",
                grid.im_min, grid.im_max
            )));
        }
        if grid.resolution < 2 {
            return Err(ConfigError::Validation(
                "grid.resolution must be at least 2".to_string(),
            ));
        }

        Ok(())
    }
}
