//! Transform helpers for cube leaves.
//!
//! A [`Transform`] is the typed form of an `xform` attribute group. Cubes are
//! laid out along +X with growing spacing and scale so neighbours never
//! overlap.

use config::constants::{SCALE_STEP, TRANSLATE_SPACING};
use glam::{DMat4, DVec3};
use scene_attr::{Group, GroupBuilder, Value};

const TRANSLATE: &str = "translate";
const ROTATE_X: &str = "rotateX";
const ROTATE_Y: &str = "rotateY";
const ROTATE_Z: &str = "rotateZ";
const SCALE: &str = "scale";

/// Angle in degrees around an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    pub angle: f64,
    pub axis: DVec3,
}

impl AxisAngle {
    pub fn new(angle: f64, axis: DVec3) -> Self {
        Self { angle, axis }
    }

    fn to_value(self) -> Value {
        Value::doubles(vec![self.angle, self.axis.x, self.axis.y, self.axis.z], 4)
    }

    fn from_value(value: Option<&Value>, fallback: AxisAngle) -> AxisAngle {
        match value.and_then(Value::as_doubles).map(|t| t.values()) {
            Some(&[angle, x, y, z, ..]) => AxisAngle::new(angle, DVec3::new(x, y, z)),
            _ => fallback,
        }
    }

    fn matrix(self) -> DMat4 {
        let axis = self.axis.normalize_or_zero();
        if axis == DVec3::ZERO {
            return DMat4::IDENTITY;
        }
        DMat4::from_axis_angle(axis, self.angle.to_radians())
    }
}

/// Typed cube transform.
///
/// # Examples
/// ```
/// use cubemaker_op::Transform;
///
/// let t = Transform::for_cube(1, 30.0);
/// assert_eq!(t.translate.x, 0.75);
/// assert_eq!(t.scale.x, 1.0);
/// assert_eq!(t.rotate_x.angle, 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: DVec3,
    pub rotate_x: AxisAngle,
    pub rotate_y: AxisAngle,
    pub rotate_z: AxisAngle,
    pub scale: DVec3,
}

impl Transform {
    /// Transform of the `index`-th cube, rotated `rotation` degrees about X.
    pub fn for_cube(index: i64, rotation: f64) -> Self {
        let i = index as f64;
        Self {
            translate: DVec3::new(TRANSLATE_SPACING * (i + 2.0) * i, 0.0, 0.0),
            rotate_x: AxisAngle::new(rotation, DVec3::X),
            scale: DVec3::splat((i + 1.0) * SCALE_STEP),
            ..Self::default()
        }
    }

    /// Builds the `xform` group. The group does not inherit: it replaces any
    /// transform of an ancestor location instead of merging with it.
    pub fn to_attr(&self) -> Group {
        let mut gb = GroupBuilder::new();
        gb.set(TRANSLATE, Value::doubles(self.translate.to_array().to_vec(), 3));
        gb.set(ROTATE_X, self.rotate_x.to_value());
        gb.set(ROTATE_Y, self.rotate_y.to_value());
        gb.set(ROTATE_Z, self.rotate_z.to_value());
        gb.set(SCALE, Value::doubles(self.scale.to_array().to_vec(), 3));
        gb.set_group_inherit(false);
        gb.build()
    }

    /// Reads an `xform` group back. Missing or malformed parts keep their
    /// identity value.
    pub fn from_attr(group: &Group) -> Self {
        let identity = Self::default();
        let vec3 = |name: &str, fallback: DVec3| match group
            .child(name)
            .and_then(Value::as_doubles)
            .map(|t| t.values())
        {
            Some(&[x, y, z, ..]) => DVec3::new(x, y, z),
            _ => fallback,
        };
        Self {
            translate: vec3(TRANSLATE, identity.translate),
            rotate_x: AxisAngle::from_value(group.child(ROTATE_X), identity.rotate_x),
            rotate_y: AxisAngle::from_value(group.child(ROTATE_Y), identity.rotate_y),
            rotate_z: AxisAngle::from_value(group.child(ROTATE_Z), identity.rotate_z),
            scale: vec3(SCALE, identity.scale),
        }
    }

    /// Local-to-parent matrix: translate, then rotate X, Y, Z, then scale.
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_translation(self.translate)
            * self.rotate_x.matrix()
            * self.rotate_y.matrix()
            * self.rotate_z.matrix()
            * DMat4::from_scale(self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate: DVec3::ZERO,
            rotate_x: AxisAngle::new(0.0, DVec3::X),
            rotate_y: AxisAngle::new(0.0, DVec3::Y),
            rotate_z: AxisAngle::new(0.0, DVec3::Z),
            scale: DVec3::ONE,
        }
    }
}

/// Returns the `xform` attribute of the `index`-th cube.
pub fn build_transform(index: i64, rotation: f64) -> Group {
    Transform::for_cube(index, rotation).to_attr()
}
