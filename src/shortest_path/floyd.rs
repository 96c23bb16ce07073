//! Floyd–Warshall all-pairs shortest paths.
//!
//! # Algorithm
//!
//! 1. `d[i][i] = 0`, `d[i][j] = w(i, j)` for every edge, unreachable otherwise
//! 2. For each intermediate vertex `k`, for every pair `(i, j)`: if
//!    `d[i][k]` and `d[k][j]` are finite and their sum beats `d[i][j]`,
//!    take it
//!
//! A finite `d[i][j]` is only replaced when the new sum is smaller by more
//! than [`RELATIVE_TOLERANCE`] of its value. Summing the same path in a
//! different order can round one ulp lower, and accepting such gains would
//! let a second pass keep rewriting the matrix.
//!
//! Runs in O(n³) time and O(n²) memory.
//!
//! # Reference
//!
//! Floyd, R. W. (1962). "Algorithm 97: Shortest Path",
//! *Communications of the ACM* 5(6), 345.

use super::matrix::DistanceMatrix;
use crate::graph::Graph;

/// Smallest relative gain a relaxation must achieve to replace a finite
/// distance.
pub const RELATIVE_TOLERANCE: f64 = 1e-12;

/// Computes all-pairs shortest path distances.
pub struct FloydWarshall;

impl FloydWarshall {
    /// Builds the distance matrix of `graph`.
    pub fn compute<G: Graph>(graph: &G) -> DistanceMatrix {
        let n = graph.vertex_count();
        let mut dm = DistanceMatrix::unconnected(n);
        for (u, v, w) in graph.edges() {
            dm.data[u * n + v] = w;
            dm.data[v * n + u] = w;
            dm.next[u * n + v] = Some(v);
            dm.next[v * n + u] = Some(u);
        }
        Self::relax(&mut dm);
        dm
    }

    /// Runs every `k`-layer of relaxation over `dm` in place and returns the
    /// number of entries that improved.
    ///
    /// On a matrix produced by [`compute`](Self::compute) this returns 0 and
    /// changes nothing.
    pub fn relax(dm: &mut DistanceMatrix) -> usize {
        let n = dm.size;
        let mut updates = 0;

        for k in 0..n {
            for i in 0..n {
                let dik = dm.data[i * n + k];
                if !dik.is_finite() {
                    continue;
                }
                for j in 0..n {
                    let dkj = dm.data[k * n + j];
                    if !dkj.is_finite() {
                        continue;
                    }
                    let through_k = dik + dkj;
                    if improves(through_k, dm.data[i * n + j]) {
                        dm.data[i * n + j] = through_k;
                        dm.next[i * n + j] = dm.next[i * n + k];
                        updates += 1;
                    }
                }
            }
        }

        updates
    }
}

fn improves(candidate: f64, current: f64) -> bool {
    if current.is_finite() {
        candidate < current - current * RELATIVE_TOLERANCE
    } else {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{GeneratorConfig, HamiltonianGenerator, WeightRange};
    use crate::graph::{AdjList, AdjMatrix};
    use crate::shortest_path::UNREACHABLE;
    use proptest::prelude::*;

    fn detour_graph<G: Graph>() -> G {
        // Direct 0-3 edge is heavier than the 0-1-2-3 chain.
        let mut g = G::new(4);
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();
        g.add_edge(0, 3, 10.0).unwrap();
        g
    }

    #[test]
    fn test_prefers_cheaper_detour() {
        let dm = FloydWarshall::compute(&detour_graph::<AdjMatrix>());
        assert_eq!(dm.get(0, 3), 3.0);
        assert_eq!(dm.get(3, 0), 3.0);
        assert_eq!(dm.path(0, 3), Some(vec![0, 1, 2, 3]));
        assert_eq!(dm.path(3, 0), Some(vec![3, 2, 1, 0]));
        assert!(dm.is_complete());
    }

    #[test]
    fn test_representations_give_same_matrix() {
        let a = FloydWarshall::compute(&detour_graph::<AdjMatrix>());
        let b = FloydWarshall::compute(&detour_graph::<AdjList>());
        assert_eq!(a, b);
    }

    #[test]
    fn test_disconnected_components_stay_unreachable() {
        let mut g = AdjList::new(4);
        g.add_edge(0, 1, 2.0).unwrap();
        g.add_edge(2, 3, 2.0).unwrap();

        let dm = FloydWarshall::compute(&g);
        assert_eq!(dm.get(0, 1), 2.0);
        assert_eq!(dm.get(0, 2), UNREACHABLE);
        assert!(!dm.is_reachable(3, 1));
        assert!(!dm.is_complete());
        assert_eq!(dm.unreachable_pairs().len(), 8);
        assert_eq!(dm.path(0, 3), None);
    }

    #[test]
    fn test_relax_is_idempotent() {
        // Integral weights keep every path sum exact.
        let mut g = AdjMatrix::new(15);
        for u in 0..15 {
            for v in u + 1..15 {
                if (u + v) % 3 != 0 {
                    g.add_edge(u, v, ((u * 7 + v * 13) % 23 + 1) as f64).unwrap();
                }
            }
        }
        let dm = FloydWarshall::compute(&g);
        let mut again = dm.clone();
        assert_eq!(FloydWarshall::relax(&mut again), 0);
        assert_eq!(dm, again);
    }

    #[test]
    fn test_empty_graph() {
        let dm = FloydWarshall::compute(&AdjList::new(0));
        assert_eq!(dm.size(), 0);
        assert!(dm.is_complete());
    }

    #[test]
    fn test_relax_is_idempotent_on_real_weights() {
        for seed in 0..20 {
            let config = GeneratorConfig::new(40, 0.7)
                .with_weights(WeightRange::new(0.1, 100.0))
                .with_seed(seed);
            let g = HamiltonianGenerator::generate::<AdjMatrix>(&config)
                .unwrap()
                .graph;
            let dm = FloydWarshall::compute(&g);
            let mut again = dm.clone();
            assert_eq!(FloydWarshall::relax(&mut again), 0, "seed {seed}");
            assert_eq!(dm, again, "seed {seed}");
        }
    }

    #[test]
    fn test_rounding_noise_is_not_an_improvement() {
        let current = 37.25;
        assert!(!improves(current - current * f64::EPSILON, current));
        assert!(!improves(current, current));
        assert!(improves(current - 1e-6, current));
        assert!(improves(1e300, UNREACHABLE));
    }

    fn close(a: f64, b: f64) -> bool {
        a == b || (a - b).abs() <= 1e-9 * a.abs().max(b.abs())
    }

    fn random_graph() -> impl Strategy<Value = AdjList> {
        (1usize..10).prop_flat_map(|n| {
            let edge = (0..n, 0..n, 0.1f64..100.0);
            prop::collection::vec(edge, 0..30).prop_map(move |edges| {
                let mut g = AdjList::new(n);
                for (u, v, w) in edges {
                    if u != v {
                        g.add_edge(u, v, w).unwrap();
                    }
                }
                g
            })
        })
    }

    proptest! {
        #[test]
        fn prop_idempotent(g in random_graph()) {
            let dm = FloydWarshall::compute(&g);
            let mut again = dm.clone();
            prop_assert_eq!(FloydWarshall::relax(&mut again), 0);
            prop_assert_eq!(dm, again);
        }

        #[test]
        fn prop_triangle_inequality(g in random_graph()) {
            let dm = FloydWarshall::compute(&g);
            let n = dm.size();
            for i in 0..n {
                for j in 0..n {
                    for k in 0..n {
                        let via_k = dm.get(i, k) + dm.get(k, j);
                        prop_assert!(dm.get(i, j) <= via_k * (1.0 + 1e-9));
                    }
                }
            }
        }

        #[test]
        fn prop_paths_match_distances(g in random_graph()) {
            let dm = FloydWarshall::compute(&g);
            let n = dm.size();
            for i in 0..n {
                for j in 0..n {
                    prop_assert!(close(dm.get(i, j), dm.get(j, i)));
                    match dm.path(i, j) {
                        Some(path) => {
                            let length: f64 = path
                                .windows(2)
                                .map(|w| g.edge_weight(w[0], w[1]).unwrap())
                                .sum();
                            prop_assert!(close(length, dm.get(i, j)));
                        }
                        None => prop_assert!(!dm.is_reachable(i, j)),
                    }
                }
            }
        }
    }
}
