//! Sampling |ζ| and arg ζ over a rectangle of the complex plane.
//!
//! Produces the data behind magnitude-surface and phase plots. Rendering is
//! left to consumers. Points where evaluation fails are kept as NaN so the
//! grid stays rectangular.

use num_complex::Complex64;
use serde::Serialize;
use siegel_config::GridConfig;

use crate::engine::RiemannSiegel;
use crate::error::{Result, SiegelError};
use crate::reference::ReferenceEvaluator;
use crate::sweep::linspace;

/// Which ζ implementation a grid is sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GridSource {
    #[default]
    Reference,
    RiemannSiegel,
}

/// Bounds and resolution of a sampling rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridSpec {
    pub re_min: f64,
    pub re_max: f64,
    pub im_min: f64,
    pub im_max: f64,
    /// Points per axis.
    pub resolution: usize,
}

impl GridSpec {
    /// Validate bounds and resolution.
    pub fn new(re: (f64, f64), im: (f64, f64), resolution: usize) -> Result<Self> {
        let spec = Self {
            re_min: re.0,
            re_max: re.1,
            im_min: im.0,
            im_max: im.1,
            resolution,
        };
        if [spec.re_min, spec.re_max, spec.im_min, spec.im_max]
            .iter()
            .any(|v| !v.is_finite())
        {
            return Err(SiegelError::InvalidArgument(
                "grid bounds must be finite".to_string(),
            ));
        }
        if spec.re_min >= spec.re_max || spec.im_min >= spec.im_max {
            return Err(SiegelError::InvalidArgument(format!(
                "grid bounds must be increasing, got re [{}, {}] im [{}, {}]",
                spec.re_min, spec.re_max, spec.im_min, spec.im_max
            )));
        }
        if resolution < 2 {
            return Err(SiegelError::InvalidArgument(format!(
                "grid resolution must be at least 2, got {resolution}"
            )));
        }
        Ok(spec)
    }

    /// Build from a `[grid]` configuration table.
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        Self::new(
            (config.re_min, config.re_max),
            (config.im_min, config.im_max),
            config.resolution,
        )
    }

    /// Real-axis sample positions.
    pub fn re_points(&self) -> Vec<f64> {
        linspace(self.re_min, self.re_max, self.resolution)
    }

    /// Imaginary-axis sample positions (one grid row each).
    pub fn im_points(&self) -> Vec<f64> {
        linspace(self.im_min, self.im_max, self.resolution)
    }
}

/// A single sampled point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridCell {
    pub re: f64,
    pub im: f64,
    /// |ζ(s)|, NaN if evaluation failed.
    pub magnitude: f64,
    /// arg ζ(s) in degrees, (−180, 180], NaN if evaluation failed.
    pub phase_degrees: f64,
}

impl GridCell {
    /// Whether the point evaluated successfully.
    pub fn is_valid(&self) -> bool {
        !self.magnitude.is_nan()
    }
}

/// Sampled rectangle, stored row-major (one row per imaginary value).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZetaGrid {
    pub spec: GridSpec,
    pub source: GridSource,
    pub cells: Vec<GridCell>,
}

impl ZetaGrid {
    /// Number of cells whose evaluation failed.
    pub fn failed_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_valid()).count()
    }

    /// Cell at row `row` (imaginary index) and column `col` (real index).
    pub fn get(&self, row: usize, col: usize) -> Option<&GridCell> {
        if row >= self.spec.resolution || col >= self.spec.resolution {
            return None;
        }
        self.cells.get(row * self.spec.resolution + col)
    }
}

impl<R: ReferenceEvaluator> RiemannSiegel<R> {
    /// Sample one row of constant imaginary part.
    pub fn sample_row(&self, spec: &GridSpec, im: f64, source: GridSource) -> Vec<GridCell> {
        spec.re_points()
            .into_iter()
            .map(|re| {
                let s = Complex64::new(re, im);
                let value = match source {
                    GridSource::Reference => self.reference().zeta(s).map_err(SiegelError::from),
                    GridSource::RiemannSiegel => self.zeta(s, None),
                };
                match value {
                    Ok(z) => GridCell {
                        re,
                        im,
                        magnitude: z.norm(),
                        phase_degrees: self.reference().complex_arg(z).to_degrees(),
                    },
                    Err(e) => {
                        tracing::warn!(%s, error = %e, "grid point failed, recording NaN");
                        GridCell {
                            re,
                            im,
                            magnitude: f64::NAN,
                            phase_degrees: f64::NAN,
                        }
                    }
                }
            })
            .collect()
    }

    /// Sample the whole rectangle sequentially.
    pub fn sample_grid(&self, spec: &GridSpec, source: GridSource) -> ZetaGrid {
        let cells = spec
            .im_points()
            .into_iter()
            .flat_map(|im| self.sample_row(spec, im, source))
            .collect();
        ZetaGrid {
            spec: *spec,
            source,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_spec_validation() {
        assert!(GridSpec::new((-2.0, 4.0), (-20.0, 20.0), 10).is_ok());
        assert!(GridSpec::new((4.0, -2.0), (-20.0, 20.0), 10).is_err());
        assert!(GridSpec::new((-2.0, 4.0), (5.0, 5.0), 10).is_err());
        assert!(GridSpec::new((-2.0, 4.0), (-20.0, 20.0), 1).is_err());
        assert!(GridSpec::new((f64::NAN, 4.0), (-20.0, 20.0), 10).is_err());
    }

    #[test]
    fn test_spec_from_default_config() {
        let spec = GridSpec::from_config(&GridConfig::default()).unwrap();
        assert_eq!(spec.re_min, -2.0);
        assert_eq!(spec.im_max, 20.0);
        assert_eq!(spec.resolution, 200);
    }

    #[test]
    fn test_grid_shape_and_layout() {
        let engine = RiemannSiegel::new();
        let spec = GridSpec::new((2.0, 3.0), (-1.0, 1.0), 3).unwrap();
        let grid = engine.sample_grid(&spec, GridSource::Reference);
        assert_eq!(grid.cells.len(), 9);
        assert_eq!(grid.failed_cells(), 0);

        let corner = grid.get(2, 0).unwrap();
        assert_eq!((corner.re, corner.im), (2.0, 1.0));
        assert!(grid.get(3, 0).is_none());

        // ζ(2.5) is real and positive.
        let middle = grid.get(1, 1).unwrap();
        assert_eq!(middle.im, 0.0);
        assert!(middle.phase_degrees.abs() < 1e-9);
    }

    #[test]
    fn test_pole_recorded_as_nan() {
        let engine = RiemannSiegel::new();
        // The middle cell is exactly s = 1.
        let spec = GridSpec::new((0.0, 2.0), (-1.0, 1.0), 3).unwrap();
        let grid = engine.sample_grid(&spec, GridSource::Reference);
        assert_eq!(grid.failed_cells(), 1);
        assert!(!grid.get(1, 1).unwrap().is_valid());
    }

    #[test]
    fn test_riemann_siegel_source_on_critical_strip() {
        let engine = RiemannSiegel::new();
        let spec = GridSpec::new((0.25, 0.75), (30.0, 31.0), 3).unwrap();
        let grid = engine.sample_grid(&spec, GridSource::RiemannSiegel);
        assert_eq!(grid.failed_cells(), 0);
        for cell in &grid.cells {
            assert!(cell.magnitude.is_finite());
            assert!(cell.phase_degrees > -180.0 && cell.phase_degrees <= 180.0);
        }
    }
}
