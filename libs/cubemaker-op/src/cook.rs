//! # Cook Dispatcher
//!
//! Per-location state machine. The op arguments of a location decide what
//! the cook does, checked in this order, first match wins:
//!
//! ```text
//! c     exactly one child  → create that child, forward its group
//!       otherwise          → report error, terminate branch
//! a     numberOfCubes > 0  → create cube_0 .. cube_{n-1} with leaf args
//! leaf                     → set geometry / xform / type, terminate branch
//! ```
//!
//! At the root the op always stops the host's implicit traversal, as every
//! child it wants is created explicitly.

use config::constants::{
    CHILD_KEY, CUBE_NAME_PREFIX, GENERATE_KEY, GEOMETRY_ATTR, LEAF_INDEX_KEY, LEAF_KEY,
    LEAF_ROTATION_KEY, MAX_ROTATION_KEY, NUMBER_OF_CUBES_KEY, OP_NAME, OP_VERSION_MAJOR,
    OP_VERSION_MINOR, POLYMESH_TYPE, TYPE_ATTR, UNSUPPORTED_CONVENTION_MESSAGE, XFORM_ATTR,
};
use log::{debug, warn};
use scene_attr::{delimiter_decode, Group, GroupBuilder, Value};

use crate::geometry::build_geometry;
use crate::op::{
    CookContext, CookOutput, ErrorReporter, LocationRequest, Op, PluginInfo, ThreadMode,
};
use crate::transform::build_transform;

/// Which branch of the dispatcher a location's arguments select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookState {
    Descend,
    Generate,
    Leaf,
    Idle,
}

impl CookState {
    /// Classifies op arguments. Keys whose value is not a group are ignored.
    pub fn of(args: Option<&Group>) -> Self {
        args.and_then(select).map_or(CookState::Idle, |(state, _)| state)
    }
}

/// First of `c`, `a`, `leaf` holding a group, with that group.
fn select(args: &Group) -> Option<(CookState, &Group)> {
    [
        (CookState::Descend, CHILD_KEY),
        (CookState::Generate, GENERATE_KEY),
        (CookState::Leaf, LEAF_KEY),
    ]
    .into_iter()
    .find_map(|(state, key)| args.get_group(key).map(|group| (state, group)))
}

/// Cooks may run concurrently: nothing is shared between invocations.
pub fn setup() -> ThreadMode {
    ThreadMode::Concurrent
}

/// Cooks one location.
pub fn cook(request: &LocationRequest, errors: &dyn ErrorReporter) -> CookOutput {
    let mut ctx = CookContext::default();

    if request.at_root {
        ctx.stop_child_traversal();
    }

    let Some(args) = request.args.as_ref() else {
        return ctx.finish();
    };

    match select(args) {
        Some((CookState::Descend, c)) => descend(&mut ctx, &request.location, c, errors),
        Some((CookState::Generate, a)) => {
            generate(&mut ctx, &request.location, a, request.child_limit)
        }
        Some((CookState::Leaf, leaf)) => populate_leaf(&mut ctx, &request.location, leaf),
        Some((CookState::Idle, _)) | None => {}
    }

    ctx.finish()
}

fn descend(ctx: &mut CookContext, location: &str, c: &Group, errors: &dyn ErrorReporter) {
    let single = match (c.len(), c.child_name(0), c.child_by_index(0)) {
        (1, Some(name), Some(value)) => Some((name, value)),
        _ => None,
    };
    let Some((encoded, value)) = single else {
        debug!("{location}: '{CHILD_KEY}' group has {} children", c.len());
        errors.report_error(location, UNSUPPORTED_CONVENTION_MESSAGE);
        ctx.stop_child_traversal();
        return;
    };

    let name = delimiter_decode(encoded);
    debug!("{location}: descending into '{name}'");
    let child_args = value.as_group().cloned().unwrap_or_default();
    ctx.create_child(name, child_args);
}

fn generate(ctx: &mut CookContext, location: &str, a: &Group, child_limit: usize) {
    let number_of_cubes = a.int_or(NUMBER_OF_CUBES_KEY, 0);
    if number_of_cubes <= 0 {
        debug!("{location}: no cubes requested ({number_of_cubes})");
        return;
    }
    // One past the host's limit is enough for it to see the overflow
    let created = i64::try_from(child_limit)
        .map_or(number_of_cubes, |limit| number_of_cubes.min(limit.saturating_add(1)));
    if created < number_of_cubes {
        warn!("{location}: {number_of_cubes} cubes exceed the host limit of {child_limit}");
    }

    let max_rotation = a.double_or(MAX_ROTATION_KEY, 0.0);
    debug!("{location}: creating {number_of_cubes} cubes, max rotation {max_rotation}");
    for i in 0..created {
        // The divisor is the count, so the last cube stays below max_rotation
        let rotation = max_rotation * i as f64 / number_of_cubes as f64;
        ctx.create_child(format!("{CUBE_NAME_PREFIX}{i}"), leaf_args(i, rotation));
    }
}

/// Op arguments of a generated cube location.
pub fn leaf_args(index: i64, rotation: f64) -> Group {
    let mut gb = GroupBuilder::new();
    gb.set(&format!("{LEAF_KEY}.{LEAF_INDEX_KEY}"), Value::int(index));
    gb.set(&format!("{LEAF_KEY}.{LEAF_ROTATION_KEY}"), Value::double(rotation));
    gb.build()
}

fn populate_leaf(ctx: &mut CookContext, location: &str, leaf: &Group) {
    let index = leaf.int_or(LEAF_INDEX_KEY, 0);
    let rotation = leaf.double_or(LEAF_ROTATION_KEY, 0.0);
    debug!("{location}: cube {index}, rotation {rotation}");

    ctx.set_attr(GEOMETRY_ATTR, build_geometry());
    ctx.set_attr(XFORM_ATTR, build_transform(index, rotation));
    ctx.set_attr(TYPE_ATTR, POLYMESH_TYPE);
    ctx.stop_child_traversal();
}

/// The CubeMaker op bound to the [`Op`] host contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubeMakerOp;

impl Op for CubeMakerOp {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: OP_NAME,
            major: OP_VERSION_MAJOR,
            minor: OP_VERSION_MINOR,
        }
    }

    fn setup(&self) -> ThreadMode {
        setup()
    }

    fn cook(&self, request: &LocationRequest, errors: &dyn ErrorReporter) -> CookOutput {
        cook(request, errors)
    }
}
