//! # Host Errors

use thiserror::Error;

/// Errors raised while walking a scene or writing it out.
#[derive(Debug, Error)]
pub enum HostError {
    /// The walk created more locations than the configured limit.
    #[error("Scene exceeds {0} locations")]
    TooManyLocations(usize),

    /// Encoding the op arguments failed.
    #[error(transparent)]
    OpArgs(#[from] cubemaker_op::OpArgsError),

    /// Serializing the scene failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command line flag was missing its value or could not be parsed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for host operations.
pub type HostResult<T> = Result<T, HostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(HostError::TooManyLocations(10).to_string().contains("10"));
    }
}
