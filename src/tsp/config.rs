//! Solver configuration.

/// Configuration for [`TspRunner`](super::TspRunner).
///
/// # Examples
///
/// ```
/// use u_tsp::tsp::TspConfig;
///
/// let config = TspConfig::default().with_start(3).with_parallel(true);
/// assert_eq!(config.start, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TspConfig {
    /// Start vertex for single-start strategies.
    pub start: usize,

    /// Whether the multi-start sweep evaluates start vertices in parallel
    /// using rayon. Only honored with the `parallel` feature enabled.
    pub parallel: bool,
}

impl TspConfig {
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
