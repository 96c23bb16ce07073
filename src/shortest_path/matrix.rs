//! Dense shortest-path distance matrix.

/// Distance between vertices with no connecting path.
///
/// Infinity absorbs any finite addition, so it can never be mistaken for a
/// real distance after relaxation.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// An n×n matrix of shortest-path distances stored in row-major order,
/// together with a successor table for path reconstruction.
///
/// Produced by [`FloydWarshall::compute`](super::FloydWarshall::compute).
///
/// # Examples
///
/// ```
/// use u_tsp::graph::{AdjList, Graph};
/// use u_tsp::shortest_path::FloydWarshall;
///
/// let mut g = AdjList::new(3);
/// g.add_edge(0, 1, 2.0).unwrap();
/// g.add_edge(1, 2, 3.0).unwrap();
///
/// let dm = FloydWarshall::compute(&g);
/// assert_eq!(dm.get(0, 2), 5.0);
/// assert_eq!(dm.path(0, 2), Some(vec![0, 1, 2]));
/// assert!(dm.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    pub(super) data: Vec<f64>,
    pub(super) next: Vec<Option<usize>>,
    pub(super) size: usize,
}

impl DistanceMatrix {
    /// Creates the initial matrix: zero diagonal, everything else unreachable.
    pub(super) fn unconnected(size: usize) -> Self {
        let mut data = vec![UNREACHABLE; size * size];
        let mut next = vec![None; size * size];
        for i in 0..size {
            data[i * size + i] = 0.0;
            next[i * size + i] = Some(i);
        }
        Self { data, next, size }
    }

    /// Shortest distance from `from` to `to`, or [`UNREACHABLE`].
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Row of distances from `from` to every vertex.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether some path connects `from` to `to`.
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_finite()
    }

    /// Whether every vertex pair is connected, i.e. the transitive closure
    /// is complete.
    pub fn is_complete(&self) -> bool {
        self.data.iter().all(|d| d.is_finite())
    }

    /// Ordered pairs `(i, j)` with no connecting path.
    pub fn unreachable_pairs(&self) -> Vec<(usize, usize)> {
        let n = self.size;
        (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .filter(|&(i, j)| !self.is_reachable(i, j))
            .collect()
    }

    /// Vertices along a shortest path from `from` to `to`, both included.
    ///
    /// Returns `None` if either index is out of bounds or `to` is unreachable.
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        if from >= self.size || to >= self.size || !self.is_reachable(from, to) {
            return None;
        }

        let mut path = vec![from];
        let mut current = from;
        while current != to {
            current = self.next[current * self.size + to]?;
            path.push(current);
        }
        Some(path)
    }
}
