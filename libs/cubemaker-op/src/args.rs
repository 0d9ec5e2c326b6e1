//! Op argument encoding.
//!
//! A node turns its `location` parameter into nested groups interleaved with
//! `c` keys, with the generation parameters under `a` at the end:
//!
//! ```text
//! /root/world/geo/cubeMaker  →  c.world.c.geo.c.cubeMaker.a.numberOfCubes
//! ```
//!
//! `/root` itself is implicit. Cooking the encoded arguments from the root
//! recreates the location one element per cook.

use config::constants::{
    is_under_root, NodeParams, CHILD_KEY, GENERATE_KEY, LOCATION_SEPARATOR, MAX_ROTATION_KEY,
    NUMBER_OF_CUBES_KEY, ROOT_LOCATION,
};
use scene_attr::{delimiter_encode, Group, GroupBuilder, Value};

use crate::error::OpArgsError;

/// Splits a location below `/root` into delimiter-encoded path elements.
///
/// A trailing separator is ignored.
///
/// # Examples
/// ```
/// use cubemaker_op::encode_location;
///
/// let elements = encode_location("/root/world/geo").unwrap();
/// assert_eq!(elements, ["world", "geo"]);
/// assert!(encode_location("/root").unwrap().is_empty());
/// ```
pub fn encode_location(location: &str) -> Result<Vec<String>, OpArgsError> {
    if !is_under_root(location) {
        return Err(OpArgsError::NotUnderRoot(location.to_string()));
    }
    let rest = &location[ROOT_LOCATION.len()..];
    let rest = rest.strip_prefix(LOCATION_SEPARATOR).unwrap_or(rest);
    let rest = rest.strip_suffix(LOCATION_SEPARATOR).unwrap_or(rest);
    if rest.is_empty() {
        return Ok(Vec::new());
    }

    rest.split(LOCATION_SEPARATOR)
        .map(|element| {
            if element.is_empty() {
                Err(OpArgsError::EmptyElement(location.to_string()))
            } else {
                Ok(delimiter_encode(element))
            }
        })
        .collect()
}

/// Builds the op arguments for a CubeMaker node.
///
/// `maxRotation` is only written when `rotate_cubes` is set.
pub fn build_op_args(params: &NodeParams) -> Result<Group, OpArgsError> {
    let params = NodeParams::new(
        params.location.as_str(),
        params.number_of_cubes,
        params.rotate_cubes,
        params.max_rotation,
    )?;

    let mut prefix = String::new();
    for element in encode_location(&params.location)? {
        prefix.push_str(CHILD_KEY);
        prefix.push('.');
        prefix.push_str(&element);
        prefix.push('.');
    }
    prefix.push_str(GENERATE_KEY);

    let mut gb = GroupBuilder::new();
    gb.try_set(
        &format!("{prefix}.{NUMBER_OF_CUBES_KEY}"),
        Value::int(params.number_of_cubes),
    )
    .map_err(|_| OpArgsError::EmptyElement(params.location.clone()))?;
    if params.rotate_cubes {
        gb.set(
            &format!("{prefix}.{MAX_ROTATION_KEY}"),
            Value::double(params.max_rotation),
        );
    }
    Ok(gb.build())
}
