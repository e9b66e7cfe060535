//! The evaluation context shared by the theta, Z and zeta engines.

use siegel_config::AppConfig;

use crate::error::{Result, SiegelError};
use crate::reference::{ReferenceEvaluator, StandardReference};

/// Behavioural switches for the Riemann–Siegel engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Apply the near-integer 1e-5 sinusoidal adjustment to θ(t) and the Z
    /// remainder. This is not part of the classical formula.
    pub near_integer_jitter: bool,

    /// Rotate Z(t) by e^(−iθ) on the critical line. Off by default, which
    /// keeps the classical Z(t)·e^(iθ) reconstruction.
    pub conjugate_phase: bool,

    /// Maximum reflection / functional-equation recursion depth.
    pub max_recursion_depth: u8,

    /// Fixed main-sum length used when a call does not pass one.
    pub default_terms: Option<usize>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            near_integer_jitter: false,
            conjugate_phase: false,
            max_recursion_depth: 4,
            default_terms: None,
        }
    }
}

impl EngineOptions {
    /// Enable or disable the near-integer jitter.
    pub fn with_jitter(mut self, enabled: bool) -> Self {
        self.near_integer_jitter = enabled;
        self
    }

    /// Select the e^(−iθ) critical-line rotation.
    pub fn with_conjugate_phase(mut self, enabled: bool) -> Self {
        self.conjugate_phase = enabled;
        self
    }

    /// Set the recursion bound.
    pub fn with_max_recursion_depth(mut self, depth: u8) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Set a fixed main-sum length.
    pub fn with_default_terms(mut self, terms: Option<usize>) -> Self {
        self.default_terms = terms;
        self
    }
}

/// Riemann–Siegel evaluator bound to a reference backend.
///
/// Holds no mutable state: every method takes `&self`, and an engine can be
/// shared across threads behind an `Arc` for batch evaluation.
#[derive(Debug, Clone, Default)]
pub struct RiemannSiegel<R = StandardReference> {
    reference: R,
    options: EngineOptions,
}

impl RiemannSiegel<StandardReference> {
    /// Engine with the standard reference and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine from a validated configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let reference = StandardReference::from_config(&config.reference)?;
        let options = EngineOptions {
            near_integer_jitter: config.engine.near_integer_jitter,
            conjugate_phase: config.engine.conjugate_phase,
            max_recursion_depth: config.engine.max_recursion_depth,
            default_terms: config.engine.terms,
        };
        Self::with_reference(reference, options)
    }
}

impl<R: ReferenceEvaluator> RiemannSiegel<R> {
    /// Engine over a caller-supplied reference evaluator.
    pub fn with_reference(reference: R, options: EngineOptions) -> Result<Self> {
        if options.max_recursion_depth == 0 {
            return Err(SiegelError::InvalidArgument(
                "max_recursion_depth must be at least 1".to_string(),
            ));
        }
        if options.default_terms == Some(0) {
            return Err(SiegelError::InvalidArgument(
                "default_terms must be at least 1 when set".to_string(),
            ));
        }
        Ok(Self { reference, options })
    }

    /// The reference evaluator backing this engine.
    pub fn reference(&self) -> &R {
        &self.reference
    }

    /// The engine options.
    pub fn options(&self) -> EngineOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_options() {
        let engine = RiemannSiegel::new();
        assert_eq!(engine.options(), EngineOptions::default());
        assert!(!engine.options().near_integer_jitter);
        assert!(!engine.options().conjugate_phase);
        assert_eq!(engine.options().max_recursion_depth, 4);
    }

    #[test]
    fn test_from_config() {
        let mut config = AppConfig::default();
        config.engine.near_integer_jitter = true;
        config.engine.conjugate_phase = true;
        config.engine.max_recursion_depth = 7;
        config.engine.terms = Some(9);
        config.reference.derivative_points = 64;

        let engine = RiemannSiegel::from_config(&config).unwrap();
        assert!(engine.options().near_integer_jitter);
        assert!(engine.options().conjugate_phase);
        assert_eq!(engine.options().max_recursion_depth, 7);
        assert_eq!(engine.options().default_terms, Some(9));
        assert_eq!(engine.reference().derivative_points(), 64);
    }

    #[test]
    fn test_rejects_zero_recursion_depth() {
        let options = EngineOptions::default().with_max_recursion_depth(0);
        let result = RiemannSiegel::with_reference(StandardReference::new(), options);
        assert!(matches!(result, Err(SiegelError::InvalidArgument(_))));
    }

    #[test]
    fn test_rejects_zero_default_terms() {
        let options = EngineOptions::default().with_default_terms(Some(0));
        assert!(RiemannSiegel::with_reference(StandardReference::new(), options).is_err());
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RiemannSiegel>();
    }
}
