//! Random graph generation.
//!
//! - [`HamiltonianGenerator`]: rejection sampling until the draw satisfies
//!   Dirac's condition (minimum degree >= n/2) and is connected, which
//!   guarantees a Hamiltonian cycle for n >= 3. Bounded by
//!   [`GeneratorConfig::max_attempts`].
//! - [`CompleteGraphGenerator`]: complete graph with uniform random weights.

mod complete;
mod config;
mod runner;

pub use complete::CompleteGraphGenerator;
pub use config::{GeneratorConfig, WeightRange};
pub use runner::{Generated, HamiltonianGenerator};
