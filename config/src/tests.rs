//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// KEY TESTS
// =============================================================================

#[test]
fn test_argument_keys_are_distinct() {
    assert_ne!(CHILD_KEY, GENERATE_KEY);
    assert_ne!(CHILD_KEY, LEAF_KEY);
    assert_ne!(GENERATE_KEY, LEAF_KEY);
}

#[test]
fn test_argument_keys_have_no_delimiter() {
    // Keys are used as dotted-path components
    for key in [CHILD_KEY, GENERATE_KEY, LEAF_KEY, LEAF_INDEX_KEY, LEAF_ROTATION_KEY] {
        assert!(!key.contains('.'), "{key} must not contain '.'");
    }
}

// =============================================================================
// LAYOUT TESTS
// =============================================================================

#[test]
fn test_layout_factors_are_positive() {
    assert!(TRANSLATE_SPACING > 0.0);
    assert!(SCALE_STEP > 0.0);
    assert!(CUBE_HALF_EXTENT > 0.0);
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// LOCATION TESTS
// =============================================================================

#[test]
fn test_default_location_is_under_root() {
    assert!(is_under_root(DEFAULT_LOCATION));
}

#[test]
fn test_is_under_root_rejects_relative_paths() {
    assert!(!is_under_root("root/world"));
    assert!(!is_under_root(""));
}
