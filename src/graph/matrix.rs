//! Dense adjacency-matrix representation.

use std::fmt;

use super::{check_edge, fmt_summary, Graph};
use crate::error::GraphResult;

/// Marks an absent edge. Never a valid weight, unlike `0`.
const NO_EDGE: f64 = f64::INFINITY;

/// A graph stored as an n×n row-major weight matrix.
///
/// Absent edges (and the diagonal) hold `f64::INFINITY`. Per-vertex degrees
/// are maintained on insertion so [`Graph::degree`] is O(1).
///
/// # Examples
///
/// ```
/// use u_tsp::graph::{AdjMatrix, Graph};
///
/// let mut g = AdjMatrix::new(4);
/// g.add_edge(0, 3, 7.0).unwrap();
/// assert_eq!(g.weight(3, 0), Some(7.0));
/// assert_eq!(g.weight(0, 1), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjMatrix {
    n: usize,
    weights: Vec<f64>,
    degrees: Vec<usize>,
    edge_count: usize,
}

impl AdjMatrix {
    fn index(&self, u: usize, v: usize) -> usize {
        u * self.n + v
    }

    /// Raw row of weights for `u`, with `f64::INFINITY` for absent edges.
    ///
    /// # Panics
    ///
    /// Panics if `u` is out of range.
    pub fn row(&self, u: usize) -> &[f64] {
        &self.weights[u * self.n..(u + 1) * self.n]
    }
}

impl Graph for AdjMatrix {
    fn new(n: usize) -> Self {
        Self {
            n,
            weights: vec![NO_EDGE; n * n],
            degrees: vec![0; n],
            edge_count: 0,
        }
    }

    fn vertex_count(&self) -> usize {
        self.n
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn weight(&self, u: usize, v: usize) -> Option<f64> {
        if u >= self.n || v >= self.n {
            return None;
        }
        let w = self.weights[self.index(u, v)];
        w.is_finite().then_some(w)
    }

    fn add_edge(&mut self, u: usize, v: usize, weight: f64) -> GraphResult<()> {
        check_edge(self.n, u, v, weight)?;

        let uv = self.index(u, v);
        if !self.weights[uv].is_finite() {
            self.edge_count += 1;
            self.degrees[u] += 1;
            self.degrees[v] += 1;
        }
        let vu = self.index(v, u);
        self.weights[uv] = weight;
        self.weights[vu] = weight;
        Ok(())
    }

    fn neighbors(&self, v: usize) -> Vec<(usize, f64)> {
        self.row(v)
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_finite())
            .map(|(u, &w)| (u, w))
            .collect()
    }

    fn degree(&self, v: usize) -> usize {
        self.degrees[v]
    }

    fn clear(&mut self) {
        self.weights.fill(NO_EDGE);
        self.degrees.fill(0);
        self.edge_count = 0;
    }
}

impl fmt::Display for AdjMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_summary(self, f)
    }
}
