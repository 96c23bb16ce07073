//! Sparse adjacency-list representation.

use std::collections::BTreeMap;
use std::fmt;

use super::{check_edge, fmt_summary, Graph};
use crate::error::GraphResult;

/// A graph stored as one ordered `neighbor -> weight` map per vertex.
///
/// Ordered maps keep neighbor iteration in increasing vertex order, which the
/// traversal and tie-breaking code relies on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjList {
    adjacency: Vec<BTreeMap<usize, f64>>,
    edge_count: usize,
}

impl Graph for AdjList {
    fn new(n: usize) -> Self {
        Self {
            adjacency: vec![BTreeMap::new(); n],
            edge_count: 0,
        }
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn weight(&self, u: usize, v: usize) -> Option<f64> {
        self.adjacency.get(u)?.get(&v).copied()
    }

    fn add_edge(&mut self, u: usize, v: usize, weight: f64) -> GraphResult<()> {
        check_edge(self.vertex_count(), u, v, weight)?;

        if self.adjacency[u].insert(v, weight).is_none() {
            self.edge_count += 1;
        }
        self.adjacency[v].insert(u, weight);
        Ok(())
    }

    fn neighbors(&self, v: usize) -> Vec<(usize, f64)> {
        self.adjacency[v].iter().map(|(&u, &w)| (u, w)).collect()
    }

    fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    fn clear(&mut self) {
        self.adjacency.iter_mut().for_each(|m| m.clear());
        self.edge_count = 0;
    }
}

impl fmt::Display for AdjList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_summary(self, f)
    }
}
