//! Weighted undirected graphs.
//!
//! The [`Graph`] trait is the contract every algorithm in this crate is
//! written against. Two representations implement it:
//!
//! - [`AdjMatrix`]: dense row-major weight matrix. O(n²) memory, O(1) edge
//!   lookup. Suited to dense graphs.
//! - [`AdjList`]: per-vertex ordered neighbor maps. Memory proportional to
//!   the edge count. Suited to sparse graphs.
//!
//! Vertices are the contiguous indices `0..n`. Edges are simple (no
//! self-loops, no multi-edges) and carry finite positive weights. A missing
//! edge has no weight at all; it is never reported as weight `0`.

mod list;
mod matrix;

pub use list::AdjList;
pub use matrix::AdjMatrix;

use std::collections::VecDeque;
use std::fmt;

use crate::error::{GraphError, GraphResult};

/// Contract shared by all graph representations.
///
/// Implementors provide storage and lookup; traversal, density, and the
/// Dirac check are derived from those.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::{AdjList, Graph};
///
/// let mut g = AdjList::new(3);
/// g.add_edge(0, 1, 2.5).unwrap();
/// g.add_edge(1, 2, 1.0).unwrap();
///
/// assert!(g.has_edge(1, 0));
/// assert_eq!(g.edge_weight(0, 1).unwrap(), 2.5);
/// assert!(g.edge_weight(0, 2).is_err());
/// assert!(g.is_connected());
/// ```
pub trait Graph: Clone + fmt::Debug + Send + Sync {
    /// Creates a graph with `n` isolated vertices.
    fn new(n: usize) -> Self;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of undirected edges.
    fn edge_count(&self) -> usize;

    /// Weight of edge `(u, v)`, or `None` if there is no such edge or
    /// either index is out of range.
    fn weight(&self, u: usize, v: usize) -> Option<f64>;

    /// Inserts edge `(u, v)` or overwrites its weight.
    ///
    /// Overwriting an existing edge leaves [`edge_count`](Graph::edge_count)
    /// unchanged.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidArgument`] if either vertex is out of range,
    /// `u == v`, or `weight` is not a finite positive number.
    fn add_edge(&mut self, u: usize, v: usize, weight: f64) -> GraphResult<()>;

    /// Neighbors of `v` with edge weights, in increasing vertex order.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of range.
    fn neighbors(&self, v: usize) -> Vec<(usize, f64)>;

    /// Number of distinct neighbors of `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of range.
    fn degree(&self, v: usize) -> usize;

    /// Removes every edge, keeping the vertex count.
    fn clear(&mut self);

    /// Whether edge `(u, v)` exists.
    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.weight(u, v).is_some()
    }

    /// Weight of edge `(u, v)`.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidArgument`] for out-of-range vertices and
    /// [`GraphError::NotFound`] when the edge does not exist.
    fn edge_weight(&self, u: usize, v: usize) -> GraphResult<f64> {
        check_vertex(self.vertex_count(), u)?;
        check_vertex(self.vertex_count(), v)?;
        self.weight(u, v).ok_or(GraphError::NotFound { u, v })
    }

    /// Every edge once as `(u, v, weight)` with `u < v`, in lexicographic order.
    fn edges(&self) -> Vec<(usize, usize, f64)> {
        let mut out = Vec::with_capacity(self.edge_count());
        for u in 0..self.vertex_count() {
            for (v, w) in self.neighbors(u) {
                if u < v {
                    out.push((u, v, w));
                }
            }
        }
        out
    }

    /// Breadth-first reachability from vertex 0.
    ///
    /// The empty graph is vacuously connected.
    fn is_connected(&self) -> bool {
        let n = self.vertex_count();
        if n == 0 {
            return true;
        }

        let mut visited = vec![false; n];
        let mut queue = VecDeque::from([0]);
        visited[0] = true;
        let mut reached = 1;

        while let Some(v) = queue.pop_front() {
            for (next, _) in self.neighbors(v) {
                if !visited[next] {
                    visited[next] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }

        reached == n
    }

    /// Fraction of the `n(n-1)/2` possible edges that are present.
    ///
    /// Returns 0 when `n < 2`.
    fn density(&self) -> f64 {
        let max = max_edges(self.vertex_count());
        if max == 0 {
            0.0
        } else {
            self.edge_count() as f64 / max as f64
        }
    }

    /// Smallest vertex degree, or `None` for the empty graph.
    fn min_degree(&self) -> Option<usize> {
        (0..self.vertex_count()).map(|v| self.degree(v)).min()
    }

    /// Dirac's condition: every vertex has degree at least `n / 2`.
    ///
    /// Together with `n >= 3` this is sufficient for a Hamiltonian cycle.
    fn satisfies_dirac(&self) -> bool {
        let n = self.vertex_count();
        (0..n).all(|v| 2 * self.degree(v) >= n)
    }
}

/// Maximum number of edges in a simple graph on `n` vertices.
pub fn max_edges(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

pub(crate) fn check_vertex(n: usize, v: usize) -> GraphResult<()> {
    if v >= n {
        return Err(GraphError::invalid(format!(
            "vertex {v} out of range for graph with {n} vertices"
        )));
    }
    Ok(())
}

pub(crate) fn check_edge(n: usize, u: usize, v: usize, weight: f64) -> GraphResult<()> {
    check_vertex(n, u)?;
    check_vertex(n, v)?;
    if u == v {
        return Err(GraphError::invalid(format!("self-loop at vertex {u}")));
    }
    if !weight.is_finite() || weight <= 0.0 {
        return Err(GraphError::invalid(format!(
            "edge weight must be finite and positive, got {weight}"
        )));
    }
    Ok(())
}

pub(crate) fn fmt_summary<G: Graph>(graph: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
        f,
        "graph with {} vertices, {} edges, density: {:.2}%",
        graph.vertex_count(),
        graph.edge_count(),
        graph.density() * 100.0
    )
}
