//! Tours and the cost abstraction the greedy core runs on.

use crate::graph::Graph;
use crate::shortest_path::DistanceMatrix;

/// A closed tour `[s, v1, ..., s]` and its total length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Visiting order, starting and ending at the same vertex.
    pub tour: Vec<usize>,
    /// Sum of leg lengths, closing leg included.
    pub distance: f64,
}

impl Route {
    /// The start (and end) vertex.
    pub fn start(&self) -> Option<usize> {
        self.tour.first().copied()
    }

    /// Number of distinct vertices visited.
    pub fn len(&self) -> usize {
        self.tour.len().saturating_sub(1)
    }

    /// Whether the route visits no vertex.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consecutive `(from, to)` legs, closing leg included.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.tour.windows(2).map(|w| (w[0], w[1]))
    }

    /// Whether this is a closed tour over exactly the vertices `0..n`.
    pub fn is_valid_tour(&self, n: usize) -> bool {
        if self.tour.len() != n + 1 || self.tour.first() != self.tour.last() {
            return false;
        }
        let mut seen = vec![false; n];
        for &v in &self.tour[..n] {
            if v >= n || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }
}

/// Pairwise travel costs consulted by the nearest-neighbor scan.
pub trait TourCost {
    /// Number of vertices.
    fn size(&self) -> usize;

    /// Cost of travelling `from -> to`, or `None` if impossible.
    fn cost(&self, from: usize, to: usize) -> Option<f64>;
}

impl TourCost for DistanceMatrix {
    fn size(&self) -> usize {
        DistanceMatrix::size(self)
    }

    fn cost(&self, from: usize, to: usize) -> Option<f64> {
        let d = self.get(from, to);
        d.is_finite().then_some(d)
    }
}

/// Adapts a graph's direct edge weights as tour costs.
#[derive(Debug, Clone, Copy)]
pub struct DirectWeights<'a, G>(pub &'a G);

impl<G: Graph> TourCost for DirectWeights<'_, G> {
    fn size(&self) -> usize {
        self.0.vertex_count()
    }

    fn cost(&self, from: usize, to: usize) -> Option<f64> {
        self.0.weight(from, to)
    }
}
