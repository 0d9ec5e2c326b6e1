//! Centralized configuration values shared across the CubeMaker crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use thiserror::Error;

// =============================================================================
// OP IDENTITY
// =============================================================================

/// Name under which the op is registered with a host.
///
/// # Examples
/// ```
/// use config::constants::OP_NAME;
/// assert_eq!(OP_NAME, "CubeMaker");
/// ```
pub const OP_NAME: &str = "CubeMaker";

/// Major version reported at registration.
pub const OP_VERSION_MAJOR: u32 = 0;

/// Minor version reported at registration.
pub const OP_VERSION_MINOR: u32 = 1;

// =============================================================================
// ARGUMENT KEYS
// =============================================================================

/// Key of the group holding the single next path element while descending.
///
/// # Examples
/// ```
/// use config::constants::CHILD_KEY;
/// let path = format!("{CHILD_KEY}.world.{CHILD_KEY}.geo");
/// assert_eq!(path, "c.world.c.geo");
/// ```
pub const CHILD_KEY: &str = "c";

/// Key of the group holding the generation parameters.
pub const GENERATE_KEY: &str = "a";

/// Key of the group carried by every generated cube location.
pub const LEAF_KEY: &str = "leaf";

/// Integer child of the generate group: how many cubes to create.
pub const NUMBER_OF_CUBES_KEY: &str = "numberOfCubes";

/// Double child of the generate group: exclusive upper bound of the rotation.
pub const MAX_ROTATION_KEY: &str = "maxRotation";

/// Integer child of the leaf group.
pub const LEAF_INDEX_KEY: &str = "index";

/// Double child of the leaf group, in degrees.
pub const LEAF_ROTATION_KEY: &str = "rotation";

// =============================================================================
// OUTPUT ATTRIBUTES
// =============================================================================

/// Attribute name of the cube mesh on a leaf location.
pub const GEOMETRY_ATTR: &str = "geometry";

/// Attribute name of the transform on a leaf location.
pub const XFORM_ATTR: &str = "xform";

/// Attribute name of the location type.
pub const TYPE_ATTR: &str = "type";

/// Location type written on every leaf.
///
/// # Examples
/// ```
/// use config::constants::POLYMESH_TYPE;
/// assert_eq!(POLYMESH_TYPE, "polymesh");
/// ```
pub const POLYMESH_TYPE: &str = "polymesh";

/// Prefix of generated child names; the cube index is appended.
pub const CUBE_NAME_PREFIX: &str = "cube_";

/// Message reported when a `c` group does not hold exactly one child.
pub const UNSUPPORTED_CONVENTION_MESSAGE: &str = "Unsupported attributes convention.";

// =============================================================================
// LOCATIONS
// =============================================================================

/// Path of the implicit root location. Never named in the encoded arguments.
///
/// # Examples
/// ```
/// use config::constants::ROOT_LOCATION;
/// assert!("/root/world".starts_with(ROOT_LOCATION));
/// ```
pub const ROOT_LOCATION: &str = "/root";

/// Separator between location path elements.
pub const LOCATION_SEPARATOR: char = '/';

/// Maximum number of locations a host walk creates before giving up.
///
/// # Examples
/// ```
/// use config::constants::{MAX_SCENE_LOCATIONS, DEFAULT_NUMBER_OF_CUBES};
/// assert!(MAX_SCENE_LOCATIONS > DEFAULT_NUMBER_OF_CUBES as usize);
/// ```
pub const MAX_SCENE_LOCATIONS: usize = 1_000_000;

// =============================================================================
// LAYOUT FACTORS
// =============================================================================

/// Spacing factor of the translate formula `f * (index + 2) * index`.
///
/// # Examples
/// ```
/// use config::constants::TRANSLATE_SPACING;
/// let index = 1.0;
/// assert_eq!(TRANSLATE_SPACING * (index + 2.0) * index, 0.75);
/// ```
pub const TRANSLATE_SPACING: f64 = 0.25;

/// Scale step of the scale formula `(index + 1) * f`.
pub const SCALE_STEP: f64 = 0.5;

/// Half the edge length of the unit cube.
pub const CUBE_HALF_EXTENT: f32 = 0.5;

/// Numerical tolerance used when comparing layout values in tests and helpers.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-9;

// =============================================================================
// NODE PARAMETERS
// =============================================================================

/// Default location under which cubes are created.
pub const DEFAULT_LOCATION: &str = "/root/world/geo/cubeMaker";

/// Default number of cubes.
pub const DEFAULT_NUMBER_OF_CUBES: i64 = 20;

/// Default state of the rotation toggle.
pub const DEFAULT_ROTATE_CUBES: bool = false;

/// Default maximum rotation, in degrees.
pub const DEFAULT_MAX_ROTATION: f64 = 0.0;

/// Immutable snapshot of the CubeMaker node parameters a host turns into op
/// arguments.
///
/// # Examples
/// ```
/// use config::constants::NodeParams;
/// let params = NodeParams::default();
/// assert_eq!(params.location, "/root/world/geo/cubeMaker");
/// assert_eq!(params.number_of_cubes, 20);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NodeParams {
    /// Absolute location path, starting with `/root`.
    pub location: String,
    /// Number of cubes to create. Zero or negative creates none.
    /// At most [`MAX_SCENE_LOCATIONS`].
    pub number_of_cubes: i64,
    /// Whether `max_rotation` is forwarded to the op.
    pub rotate_cubes: bool,
    /// Exclusive upper bound of the per-cube rotation, in degrees.
    pub max_rotation: f64,
}

impl NodeParams {
    /// Builds parameters, rejecting locations outside of `/root` and counts
    /// above [`MAX_SCENE_LOCATIONS`].
    ///
    /// # Examples
    /// ```
    /// use config::constants::NodeParams;
    /// let params = NodeParams::new("/root/world", 3, true, 90.0).expect("valid params");
    /// assert_eq!(params.number_of_cubes, 3);
    /// assert!(NodeParams::new("world", 3, false, 0.0).is_err());
    /// ```
    pub fn new(
        location: impl Into<String>,
        number_of_cubes: i64,
        rotate_cubes: bool,
        max_rotation: f64,
    ) -> Result<Self, ConfigError> {
        let location = location.into();
        if !is_under_root(&location) {
            return Err(ConfigError::InvalidLocation(location));
        }
        if number_of_cubes > MAX_SCENE_LOCATIONS as i64 {
            return Err(ConfigError::TooManyCubes(number_of_cubes));
        }
        if !max_rotation.is_finite() {
            return Err(ConfigError::InvalidRotation(max_rotation));
        }
        Ok(Self {
            location,
            number_of_cubes,
            rotate_cubes,
            max_rotation,
        })
    }
}

impl Default for NodeParams {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            number_of_cubes: DEFAULT_NUMBER_OF_CUBES,
            rotate_cubes: DEFAULT_ROTATE_CUBES,
            max_rotation: DEFAULT_MAX_ROTATION,
        }
    }
}

/// Returns true for `/root` and any path nested below it.
///
/// # Examples
/// ```
/// use config::constants::is_under_root;
/// assert!(is_under_root("/root"));
/// assert!(is_under_root("/root/world"));
/// assert!(!is_under_root("/rootless"));
/// ```
pub fn is_under_root(location: &str) -> bool {
    match location.strip_prefix(ROOT_LOCATION) {
        Some(rest) => rest.is_empty() || rest.starts_with(LOCATION_SEPARATOR),
        None => false,
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when the location is not `/root` or below it.
    #[error("location must start with /root: {0}")]
    InvalidLocation(String),
    /// Raised when the maximum rotation is NaN or infinite.
    #[error("max_rotation must be finite: {0}")]
    InvalidRotation(f64),
    /// Raised when more cubes are requested than a scene may hold.
    #[error("number_of_cubes exceeds {}: {0}", MAX_SCENE_LOCATIONS)]
    TooManyCubes(i64),
}

#[cfg(test)]
mod tests;
