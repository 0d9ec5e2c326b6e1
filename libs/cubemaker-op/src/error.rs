//! # Op Argument Errors
//!
//! Errors raised while turning node parameters into op arguments. Cooking
//! itself never fails; see [`crate::ErrorReporter`].

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while encoding op arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpArgsError {
    /// The location is not `/root` or below it.
    #[error("Location is not under /root: '{0}'")]
    NotUnderRoot(String),

    /// The location has an empty element, as in `/root//geo`.
    #[error("Location has an empty element: '{0}'")]
    EmptyElement(String),

    /// Node parameters failed validation.
    #[error("Invalid node parameters: {0}")]
    Config(#[from] ConfigError),
}
