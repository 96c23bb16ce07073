//! Rejection-sampling Hamiltonian graph generator.
//!
//! # Algorithm
//!
//! 1. Clear the graph
//! 2. Draw `floor(max_edges * density)` distinct vertex pairs uniformly
//!    without replacement from all `n(n-1)/2` candidates
//! 3. Weight each drawn edge uniformly from `[min_weight, max_weight]`
//! 4. Accept if every vertex has degree >= n/2 and the graph is connected,
//!    otherwise go back to 1
//!
//! The loop stops with [`GraphError::GenerationTimeout`] after
//! `max_attempts` rejected draws.
//!
//! # Reference
//!
//! Dirac, G. A. (1952). "Some theorems on abstract graphs",
//! *Proceedings of the London Mathematical Society* s3-2(1), 69-81.

use log::{debug, info};
use rand::seq::index;
use rand::Rng;

use super::config::GeneratorConfig;
use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::random::rng_from;

/// A generated graph along with the number of draws it took.
#[derive(Debug, Clone)]
pub struct Generated<G> {
    /// The accepted graph.
    pub graph: G,
    /// Number of draws performed, including the accepted one.
    pub attempts: usize,
}

/// Generates random graphs that satisfy Dirac's sufficient condition for
/// Hamiltonicity.
pub struct HamiltonianGenerator;

impl HamiltonianGenerator {
    /// Runs the rejection-sampling loop.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidArgument`] if the configuration is invalid, or
    ///   if `target_edges` is too small for any draw to reach minimum degree
    ///   `n / 2`.
    /// - [`GraphError::GenerationTimeout`] if `max_attempts` draws were all
    ///   rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::generate::{GeneratorConfig, HamiltonianGenerator};
    /// use u_tsp::graph::{AdjMatrix, Graph};
    ///
    /// let config = GeneratorConfig::new(8, 0.9).with_seed(7);
    /// let generated = HamiltonianGenerator::generate::<AdjMatrix>(&config).unwrap();
    /// assert!(generated.graph.satisfies_dirac());
    /// assert!(generated.graph.is_connected());
    /// ```
    pub fn generate<G: Graph>(config: &GeneratorConfig) -> GraphResult<Generated<G>> {
        config.validate()?;

        let n = config.vertices;
        let target = config.target_edges();
        let required_degree = n.div_ceil(2);
        if 2 * target < n * required_degree {
            return Err(GraphError::invalid(format!(
                "density {} gives {target} edges on {n} vertices, too few for minimum degree {required_degree}",
                config.density
            )));
        }

        let candidates = candidate_pairs(n);
        let mut rng = rng_from(config.seed);
        let mut graph = G::new(n);

        for attempt in 1..=config.max_attempts {
            graph.clear();
            for i in index::sample(&mut rng, candidates.len(), target).into_iter() {
                let (u, v) = candidates[i];
                let w = rng.random_range(config.weights.min..=config.weights.max);
                graph.add_edge(u, v, w)?;
            }

            if graph.satisfies_dirac() && graph.is_connected() {
                info!("accepted Dirac graph on {n} vertices with {target} edges after {attempt} attempt(s)");
                return Ok(Generated {
                    graph,
                    attempts: attempt,
                });
            }
            debug!(
                "attempt {attempt} rejected: min degree {:?} < {required_degree}",
                graph.min_degree()
            );
        }

        Err(GraphError::GenerationTimeout {
            attempts: config.max_attempts,
        })
    }
}

/// All unordered pairs `(u, v)` with `u < v`, in lexicographic order.
fn candidate_pairs(n: usize) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|u| (u + 1..n).map(move |v| (u, v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::WeightRange;
    use crate::graph::{AdjList, AdjMatrix};
    use proptest::prelude::*;

    #[test]
    fn test_candidate_pairs() {
        assert_eq!(candidate_pairs(3), vec![(0, 1), (0, 2), (1, 2)]);
        assert!(candidate_pairs(1).is_empty());
    }

    #[test]
    fn test_generate_dense_graph() {
        let config = GeneratorConfig::new(20, 0.8)
            .with_weights(WeightRange::new(10.0, 100.0))
            .with_seed(42);
        let result = HamiltonianGenerator::generate::<AdjList>(&config).unwrap();
        let g = result.graph;

        assert_eq!(g.vertex_count(), 20);
        assert_eq!(g.edge_count(), config.target_edges());
        assert!(g.satisfies_dirac());
        assert!(g.is_connected());
        assert!(result.attempts >= 1);
        for (_, _, w) in g.edges() {
            assert!((10.0..=100.0).contains(&w), "weight {w} out of range");
        }
    }

    #[test]
    fn test_complete_density_accepts_first_draw() {
        let config = GeneratorConfig::new(6, 1.0).with_seed(1);
        let result = HamiltonianGenerator::generate::<AdjMatrix>(&config).unwrap();
        assert_eq!(result.attempts, 1);
        assert_eq!(result.graph.edge_count(), 15);
    }

    #[test]
    fn test_same_seed_same_graph_across_representations() {
        let config = GeneratorConfig::new(12, 0.7).with_seed(99);
        let a = HamiltonianGenerator::generate::<AdjMatrix>(&config).unwrap();
        let b = HamiltonianGenerator::generate::<AdjList>(&config).unwrap();
        assert_eq!(a.attempts, b.attempts);
        assert_eq!(a.graph.edges(), b.graph.edges());
    }

    #[test]
    fn test_infeasible_density_rejected_upfront() {
        // 10 vertices at 0.2 density gives 9 edges; Dirac needs 25.
        let config = GeneratorConfig::new(10, 0.2).with_seed(3);
        let err = HamiltonianGenerator::generate::<AdjList>(&config).unwrap_err();
        assert!(matches!(err, GraphError::InvalidArgument(_)));

        let single = GeneratorConfig::new(1, 1.0);
        assert!(HamiltonianGenerator::generate::<AdjList>(&single).is_err());
    }

    #[test]
    fn test_timeout_when_budget_exhausted() {
        // 8 vertices at density 0.58 draws exactly 16 edges, the bare minimum
        // for every vertex to reach degree 4. Only 4-regular draws pass.
        let config = GeneratorConfig::new(8, 0.58)
            .with_max_attempts(2)
            .with_seed(5);
        assert_eq!(config.target_edges(), 16);
        match HamiltonianGenerator::generate::<AdjMatrix>(&config) {
            Err(GraphError::GenerationTimeout { attempts }) => assert_eq!(attempts, 2),
            Ok(generated) => {
                assert!(generated.graph.satisfies_dirac());
                assert!(generated.attempts <= 2);
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_and_pair_graphs() {
        let empty = HamiltonianGenerator::generate::<AdjList>(&GeneratorConfig::new(0, 1.0)).unwrap();
        assert_eq!(empty.graph.vertex_count(), 0);

        let pair = HamiltonianGenerator::generate::<AdjList>(&GeneratorConfig::new(2, 1.0)).unwrap();
        assert!(pair.graph.has_edge(0, 1));
    }

    #[test]
    fn test_invalid_config_propagates() {
        let config = GeneratorConfig::new(6, 1.5);
        assert!(matches!(
            HamiltonianGenerator::generate::<AdjList>(&config),
            Err(GraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_half_density_is_always_infeasible() {
        // floor(n(n-1)/4) edges give a degree sum of at most n(n-1)/2, short
        // of the n * ceil(n/2) that minimum degree n/2 needs.
        for n in 4..30 {
            let config = GeneratorConfig::new(n, 0.5).with_seed(n as u64);
            assert!(2 * config.target_edges() < n * n.div_ceil(2));
            assert!(
                matches!(
                    HamiltonianGenerator::generate::<AdjList>(&config),
                    Err(GraphError::InvalidArgument(_))
                ),
                "n = {n} at density 0.5 was not rejected"
            );
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_output_satisfies_dirac(n in 4usize..24, density in 0.5f64..=1.0, seed in any::<u64>()) {
            let config = GeneratorConfig::new(n, density)
                .with_max_attempts(2_000)
                .with_seed(seed);
            match HamiltonianGenerator::generate::<AdjMatrix>(&config) {
                Ok(generated) => {
                    prop_assert!(generated.graph.satisfies_dirac());
                    prop_assert!(generated.graph.is_connected());
                    prop_assert!(2 * generated.graph.min_degree().unwrap() >= n);
                    prop_assert!(generated.attempts <= 2_000);
                }
                Err(GraphError::InvalidArgument(_)) => {
                    prop_assert!(2 * config.target_edges() < n * n.div_ceil(2));
                }
                // Edge budgets just above the Dirac minimum rarely pass a draw.
                Err(GraphError::GenerationTimeout { attempts }) => {
                    prop_assert_eq!(attempts, 2_000);
                    prop_assert!(2 * config.target_edges() >= n * n.div_ceil(2));
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }
    }
}
