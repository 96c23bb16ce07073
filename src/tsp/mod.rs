//! Greedy TSP tour construction.
//!
//! Every strategy shares one nearest-neighbor core: from the current vertex,
//! scan candidates in increasing index order and step to the first unvisited
//! one with a strictly smaller cost, then close the tour back to the start.
//!
//! - [`TspRunner::shortest_path`]: costs are Floyd–Warshall shortest-path
//!   distances, so non-adjacent vertices can follow each other.
//! - [`TspRunner::direct`]: costs are raw edge weights of a complete graph.
//! - [`TspRunner::multi_start`]: [`TspRunner::direct`] from every vertex,
//!   keeping the shortest tour.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//!   for the Traveling Salesman Problem", *SIAM J. Comput.* 6(3), 563-581.

mod config;
mod nearest;
mod runner;
mod types;

pub use config::TspConfig;
pub use nearest::nearest_neighbor;
pub use runner::{MultiStartResult, TspRunner};
pub use types::{DirectWeights, Route, TourCost};
