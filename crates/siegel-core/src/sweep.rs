//! Side-by-side comparison of the Riemann–Siegel reconstruction against the
//! reference evaluator along a vertical line.

use num_complex::Complex64;
use serde::Serialize;
use siegel_config::SweepConfig;

use crate::engine::RiemannSiegel;
use crate::error::{Result, SiegelError};
use crate::reference::ReferenceEvaluator;

/// `points` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            (0..points)
                .map(|i| {
                    if i == points - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// One point of a comparison sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    /// Height of the point.
    pub t: f64,
    /// Riemann–Siegel value.
    pub approx: Complex64,
    /// Reference value.
    pub reference: Complex64,
}

impl Comparison {
    pub fn abs_error(&self) -> f64 {
        (self.approx - self.reference).norm()
    }

    /// |approx − reference| / |reference|; infinite at an exact reference zero.
    pub fn relative_error(&self) -> f64 {
        let denominator = self.reference.norm();
        if denominator == 0.0 {
            f64::INFINITY
        } else {
            self.abs_error() / denominator
        }
    }

    /// |approx| / |reference|.
    pub fn magnitude_ratio(&self) -> f64 {
        self.approx.norm() / self.reference.norm()
    }
}

/// Aggregate error statistics over a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepSummary {
    pub points: usize,
    pub max_abs_error: f64,
    pub mean_abs_error: f64,
    pub max_relative_error: f64,
}

impl SweepSummary {
    /// Summarise a sweep. `None` for an empty sweep.
    pub fn from_comparisons(comparisons: &[Comparison]) -> Option<Self> {
        if comparisons.is_empty() {
            return None;
        }
        let mut max_abs_error = 0.0_f64;
        let mut total_abs_error = 0.0;
        let mut max_relative_error = 0.0_f64;
        for c in comparisons {
            let abs = c.abs_error();
            max_abs_error = max_abs_error.max(abs);
            total_abs_error += abs;
            max_relative_error = max_relative_error.max(c.relative_error());
        }
        Some(Self {
            points: comparisons.len(),
            max_abs_error,
            mean_abs_error: total_abs_error / comparisons.len() as f64,
            max_relative_error,
        })
    }
}

impl<R: ReferenceEvaluator> RiemannSiegel<R> {
    /// Evaluate both ζ implementations at σ + it for every `t`.
    pub fn compare_with_reference(&self, t_values: &[f64], sigma: f64) -> Result<Vec<Comparison>> {
        t_values
            .iter()
            .map(|&t| {
                let s = Complex64::new(sigma, t);
                Ok(Comparison {
                    t,
                    approx: self.zeta(s, None)?,
                    reference: self.reference().zeta(s)?,
                })
            })
            .collect()
    }

    /// Run the sweep described by a `[sweep]` configuration table.
    pub fn sweep(&self, config: &SweepConfig) -> Result<Vec<Comparison>> {
        if config.points < 2 || config.t_start >= config.t_end {
            return Err(SiegelError::InvalidArgument(format!(
                "sweep needs at least 2 points over an increasing range, got {} points on [{}, {}]",
                config.points, config.t_start, config.t_end
            )));
        }
        let t_values = linspace(config.t_start, config.t_end, config.points);
        tracing::info!(
            points = config.points,
            t_start = config.t_start,
            t_end = config.t_end,
            sigma = config.sigma,
            "Running comparison sweep"
        );
        self.compare_with_reference(&t_values, config.sigma)
    }
}
