use std::fmt;

/// Errors reported by [`search`](crate::search) and [`MultiPath`](crate::MultiPath) queries.
///
/// Neither is retryable: the graph the caller described has no answer to
/// the question asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError<T> {
    /// The frontier was exhausted without popping an accepted vertex.
    NoPath,
    /// The vertex was never reached by the search.
    Unreached(T),
}

impl<T: fmt::Debug> fmt::Display for SearchError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPath => f.write_str("no path found"),
            Self::Unreached(v) => write!(f, "vertex {v:?} was not reached"),
        }
    }
}

impl<T: fmt::Debug> std::error::Error for SearchError<T> {}
