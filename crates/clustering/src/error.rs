/// Errors that can occur during clustering.
///
/// The taxonomy is closed on purpose: callers either rejected the request
/// before any computation started (`InvalidInput`) or the computation itself
/// could not produce a partition (`Computation`). The HTTP layer maps the
/// former to a client error and the latter to a server error.
#[derive(Debug, Clone)]
pub enum ClusterError {
    InvalidInput(String),
    Computation(String),
}

impl std::fmt::Display for ClusterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(s) => write!(f, "invalid input: {}", s),
            Self::Computation(s) => write!(f, "clustering failed: {}", s),
        }
    }
}

impl std::error::Error for ClusterError {}
