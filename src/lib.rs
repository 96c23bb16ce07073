//! Greedy TSP heuristics over randomly generated Hamiltonian graphs.
//!
//! Provides:
//!
//! - **Graphs**: a single [`graph::Graph`] contract with two interchangeable
//!   representations, a dense adjacency matrix and a sparse adjacency list.
//! - **Generation**: random graphs guaranteed to satisfy Dirac's condition
//!   (minimum degree >= n/2), and complete graphs with random weights.
//! - **Shortest paths**: Floyd–Warshall all-pairs distances with path
//!   reconstruction.
//! - **TSP**: nearest-neighbor tour construction over shortest-path distances
//!   or direct edge weights, with a multi-start sweep.
//!
//! # Example
//!
//! ```
//! use u_tsp::generate::{GeneratorConfig, HamiltonianGenerator, WeightRange};
//! use u_tsp::graph::AdjMatrix;
//! use u_tsp::tsp::{TspConfig, TspRunner};
//!
//! let config = GeneratorConfig::new(10, 0.9)
//!     .with_weights(WeightRange::new(10.0, 100.0))
//!     .with_seed(42);
//! let graph = HamiltonianGenerator::generate::<AdjMatrix>(&config)?.graph;
//!
//! let route = TspRunner::shortest_path(&graph, &TspConfig::default())?;
//! assert!(route.is_valid_tour(10));
//! # Ok::<(), u_tsp::GraphError>(())
//! ```
//!
//! # Architecture
//!
//! All algorithms are generic over `G: Graph`, so the representation is a
//! type parameter chosen by the caller. Nothing here plots, prints, or
//! aggregates statistics; those concerns belong to consumers.

pub mod error;
pub mod generate;
pub mod graph;
pub mod random;
pub mod shortest_path;
pub mod tsp;

pub use error::{GraphError, GraphResult};
