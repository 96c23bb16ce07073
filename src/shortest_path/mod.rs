//! All-pairs shortest paths.
//!
//! [`FloydWarshall`] turns a [`Graph`](crate::graph::Graph) snapshot into a
//! [`DistanceMatrix`]. The matrix is never updated incrementally: if the
//! graph changes, compute a new one.

mod floyd;
mod matrix;

pub use floyd::{FloydWarshall, RELATIVE_TOLERANCE};
pub use matrix::{DistanceMatrix, UNREACHABLE};
