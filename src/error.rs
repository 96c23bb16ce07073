//! Error types shared by every module of the crate.

use thiserror::Error;

/// Result type alias for graph and solver operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Failure kinds reported by graph construction, generation, and solving.
///
/// No operation recovers silently: construction and generation failures
/// abort the whole call rather than returning a partial graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A parameter was out of its valid domain (vertex index, density,
    /// weight bounds, self-loop, start vertex, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Lookup of an edge that does not exist.
    #[error("no edge between {u} and {v}")]
    NotFound {
        /// First endpoint.
        u: usize,
        /// Second endpoint.
        v: usize,
    },

    /// A tour was requested on a graph whose transitive closure is incomplete.
    #[error("graph is disconnected: {unreachable} vertex pair(s) have no connecting path")]
    Disconnected {
        /// Number of ordered vertex pairs with no path between them.
        unreachable: usize,
    },

    /// The rejection-sampling generator exhausted its retry budget.
    #[error("no graph satisfying Dirac's condition after {attempts} attempt(s)")]
    GenerationTimeout {
        /// Number of draws performed before giving up.
        attempts: usize,
    },
}

impl GraphError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GraphError::InvalidArgument(msg.into())
    }
}
