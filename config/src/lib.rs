//! # Config Crate
//!
//! Centralized configuration constants for the CubeMaker scene generator.
//! Argument keys, attribute names, node parameter defaults and layout factors
//! are defined here so the op, the host and the tests agree on one value.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CHILD_KEY, GENERATE_KEY, LEAF_KEY, CUBE_NAME_PREFIX};
//!
//! assert_eq!(CHILD_KEY, "c");
//! assert_eq!(GENERATE_KEY, "a");
//! assert_eq!(LEAF_KEY, "leaf");
//! assert_eq!(format!("{CUBE_NAME_PREFIX}{}", 3), "cube_3");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host-Agnostic**: No host ABI specifics
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
