//! Complete graphs with random weights.

use log::debug;
use rand::Rng;

use super::config::WeightRange;
use crate::error::GraphResult;
use crate::graph::Graph;
use crate::random::rng_from;

/// Generates complete graphs, the input expected by the direct-edge greedy
/// solver.
pub struct CompleteGraphGenerator;

impl CompleteGraphGenerator {
    /// Builds the complete graph on `n` vertices, weighting every pair
    /// uniformly from `weights`.
    ///
    /// Pairs are weighted in lexicographic order, so a fixed seed yields the
    /// same weights for every representation.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidArgument`](crate::error::GraphError::InvalidArgument)
    /// if `weights` is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::generate::{CompleteGraphGenerator, WeightRange};
    /// use u_tsp::graph::{AdjList, Graph};
    ///
    /// let g: AdjList = CompleteGraphGenerator::generate(5, &WeightRange::new(1.0, 9.0), Some(3)).unwrap();
    /// assert_eq!(g.edge_count(), 10);
    /// assert!((g.density() - 1.0).abs() < 1e-12);
    /// ```
    pub fn generate<G: Graph>(n: usize, weights: &WeightRange, seed: Option<u64>) -> GraphResult<G> {
        weights.validate()?;

        let mut rng = rng_from(seed);
        let mut graph = G::new(n);
        for u in 0..n {
            for v in u + 1..n {
                graph.add_edge(u, v, rng.random_range(weights.min..=weights.max))?;
            }
        }
        debug!("generated complete graph: {} edges", graph.edge_count());
        Ok(graph)
    }
}
