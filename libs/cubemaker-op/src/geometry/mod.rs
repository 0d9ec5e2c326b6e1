//! Unit cube mesh descriptor.
//!
//! The descriptor is the same for every leaf, so it is built once per process
//! and shared afterwards.

use std::sync::OnceLock;

use config::constants::CUBE_HALF_EXTENT;
use scene_attr::{Group, GroupBuilder, Value};

const H: f32 = CUBE_HALF_EXTENT;

/// Corner positions, three floats per point.
pub const CUBE_POINTS: [f32; 24] = [
    -H, -H, H, //
    H, -H, H, //
    -H, H, H, //
    H, H, H, //
    -H, H, -H, //
    H, H, -H, //
    -H, -H, -H, //
    H, -H, -H, //
];

/// Four point indices per face. Faces wind clockwise when seen from outside.
pub const CUBE_VERTEX_LIST: [i64; 24] = [
    2, 3, 1, 0, // +z
    4, 5, 3, 2, // +y
    6, 7, 5, 4, // -z
    0, 1, 7, 6, // -y
    3, 5, 7, 1, // +x
    4, 2, 0, 6, // -x
];

/// Offsets into [`CUBE_VERTEX_LIST`] delimiting the faces.
pub const CUBE_START_INDEX: [i64; 7] = [0, 4, 8, 12, 16, 20, 24];

/// Returns the `geometry` attribute of a cube leaf:
///
/// ```text
/// point.P           float, tuple size 3
/// poly.vertexList   int
/// poly.startIndex   int
/// ```
pub fn build_geometry() -> Group {
    static GEOMETRY: OnceLock<Group> = OnceLock::new();
    GEOMETRY.get_or_init(make_geometry).clone()
}

fn make_geometry() -> Group {
    let mut gb = GroupBuilder::new();
    gb.set("point.P", Value::floats(CUBE_POINTS.to_vec(), 3));
    gb.set("poly.vertexList", Value::ints(CUBE_VERTEX_LIST.to_vec(), 1));
    gb.set("poly.startIndex", Value::ints(CUBE_START_INDEX.to_vec(), 1));
    gb.build()
}
