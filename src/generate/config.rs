//! Generator configuration.

use crate::error::{GraphError, GraphResult};

/// Closed interval `[min, max]` from which edge weights are drawn uniformly.
///
/// # Examples
///
/// ```
/// use u_tsp::generate::WeightRange;
///
/// let range = WeightRange::new(10.0, 100.0);
/// assert!(range.validate().is_ok());
/// assert!(WeightRange::new(5.0, 1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightRange {
    /// Smallest weight that may be drawn. Must be positive.
    pub min: f64,
    /// Largest weight that may be drawn. Must be at least `min`.
    pub max: f64,
}

impl WeightRange {
    /// Creates the range `[min, max]`. Bounds are checked by
    /// [`validate`](Self::validate).
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Validates the bounds: both finite, `0 < min <= max`.
    pub fn validate(&self) -> GraphResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(GraphError::invalid(format!(
                "weight bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min <= 0.0 {
            return Err(GraphError::invalid(format!(
                "min_weight must be positive, got {}",
                self.min
            )));
        }
        if self.min > self.max {
            return Err(GraphError::invalid(format!(
                "min_weight {} exceeds max_weight {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        Self::new(10.0, 100.0)
    }
}

/// Configuration for [`HamiltonianGenerator`](super::HamiltonianGenerator).
///
/// # Examples
///
/// ```
/// use u_tsp::generate::{GeneratorConfig, WeightRange};
///
/// let config = GeneratorConfig::new(12, 0.8)
///     .with_weights(WeightRange::new(1.0, 50.0))
///     .with_max_attempts(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.target_edges(), 52);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of vertices.
    pub vertices: usize,

    /// Target fraction of the `n(n-1)/2` possible edges, in (0, 1].
    pub density: f64,

    /// Range for edge weights.
    pub weights: WeightRange,

    /// Number of draws before giving up with
    /// [`GraphError::GenerationTimeout`]. Must be at least 1.
    pub max_attempts: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vertices: 10,
            density: 0.9,
            weights: WeightRange::default(),
            max_attempts: 1000,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration for `vertices` vertices at the given target
    /// density, with default weights, retry budget, and no seed.
    pub fn new(vertices: usize, density: f64) -> Self {
        Self {
            vertices,
            density,
            ..Self::default()
        }
    }

    pub fn with_weights(mut self, weights: WeightRange) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of edges drawn per attempt: `floor(max_edges * density)`.
    pub fn target_edges(&self) -> usize {
        (crate::graph::max_edges(self.vertices) as f64 * self.density).floor() as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> GraphResult<()> {
        if !(self.density > 0.0 && self.density <= 1.0) {
            return Err(GraphError::invalid(format!(
                "density must be in (0, 1], got {}",
                self.density
            )));
        }
        self.weights.validate()?;
        if self.max_attempts == 0 {
            return Err(GraphError::invalid("max_attempts must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.vertices, 10);
        assert!((config.density - 0.9).abs() < 1e-12);
        assert_eq!(config.max_attempts, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_density() {
        for density in [0.0, -0.1, 1.01, f64::NAN] {
            let config = GeneratorConfig::new(8, density);
            assert!(config.validate().is_err(), "density {density} accepted");
        }
        assert!(GeneratorConfig::new(8, 1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_bad_weights() {
        let zero_min = GeneratorConfig::default().with_weights(WeightRange::new(0.0, 5.0));
        assert!(zero_min.validate().is_err());

        let inverted = GeneratorConfig::default().with_weights(WeightRange::new(9.0, 3.0));
        assert!(inverted.validate().is_err());

        let unbounded = GeneratorConfig::default().with_weights(WeightRange::new(1.0, f64::INFINITY));
        assert!(unbounded.validate().is_err());

        let point = GeneratorConfig::default().with_weights(WeightRange::new(4.0, 4.0));
        assert!(point.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_attempts() {
        let config = GeneratorConfig::default().with_max_attempts(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_target_edges_floor() {
        assert_eq!(GeneratorConfig::new(10, 0.5).target_edges(), 22);
        assert_eq!(GeneratorConfig::new(4, 1.0).target_edges(), 6);
        assert_eq!(GeneratorConfig::new(1, 1.0).target_edges(), 0);
    }
}
