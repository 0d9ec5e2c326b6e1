//! # Attribute Errors
//!
//! Error types for strict attribute access. Lenient reads never produce these;
//! they fall back to the caller's default instead.

use thiserror::Error;

/// Errors reported by the strict attribute APIs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttrError {
    /// The dotted path is empty or has an empty component.
    #[error("Invalid attribute path: '{0}'")]
    InvalidPath(String),

    /// Nothing is stored at the path.
    #[error("No attribute at '{0}'")]
    Missing(String),

    /// A value exists but has another type.
    #[error("Attribute '{path}' is {found}, expected {expected}")]
    TypeMismatch {
        /// Path that was read
        path: String,
        /// Requested type name
        expected: &'static str,
        /// Stored type name
        found: &'static str,
    },
}

/// Result type alias for strict attribute access.
pub type AttrResult<T> = Result<T, AttrError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AttrError::TypeMismatch {
            path: "leaf.index".to_string(),
            expected: "int",
            found: "double",
        };
        let message = err.to_string();
        assert!(message.contains("leaf.index"));
        assert!(message.contains("expected int"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AttrError>();
    }
}
