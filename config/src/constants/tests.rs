//! Tests for the node parameter snapshot.

use super::*;

/// Ensures default parameters match the registered node template.
#[test]
fn test_default_params_are_valid() {
    let params = NodeParams::default();
    assert!(is_under_root(&params.location));
    assert_eq!(params.number_of_cubes, DEFAULT_NUMBER_OF_CUBES);
    assert!(!params.rotate_cubes);
    assert_eq!(params.max_rotation, 0.0);
}

/// Validates the constructor rejects invalid values.
#[test]
fn test_new_validates_inputs() {
    assert_eq!(
        NodeParams::new("/world/geo", 1, false, 0.0).unwrap_err(),
        ConfigError::InvalidLocation("/world/geo".to_string())
    );
    assert!(matches!(
        NodeParams::new("/root", 1, true, f64::NAN).unwrap_err(),
        ConfigError::InvalidRotation(_)
    ));
}

#[test]
fn test_new_accepts_bare_root() {
    let params = NodeParams::new("/root", 0, false, 0.0).unwrap();
    assert_eq!(params.location, "/root");
}

#[test]
fn test_error_messages_name_the_value() {
    let err = ConfigError::InvalidLocation("geo".to_string());
    assert!(err.to_string().contains("geo"));
}

#[test]
fn test_new_rejects_counts_above_scene_limit() {
    let too_many = MAX_SCENE_LOCATIONS as i64 + 1;
    assert_eq!(
        NodeParams::new("/root", too_many, false, 0.0).unwrap_err(),
        ConfigError::TooManyCubes(too_many)
    );
    assert!(NodeParams::new("/root", MAX_SCENE_LOCATIONS as i64, false, 0.0).is_ok());
    assert!(ConfigError::TooManyCubes(too_many).to_string().contains("1000001"));
}
