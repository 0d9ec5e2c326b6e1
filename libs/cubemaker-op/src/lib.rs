//! # CubeMaker Op
//!
//! A scene graph generator op that creates a row of `polymesh` cubes below a
//! configured location.
//!
//! ## Architecture
//!
//! ```text
//! NodeParams ──build_op_args──▶ Group (c.world.c.geo.a.numberOfCubes)
//!                                  │
//!       host ──LocationRequest──▶ cook ──▶ CookOutput
//!                                  │        ├─ children (ChildCreationCommand)
//!                                  │        ├─ attributes (geometry, xform, type)
//!                                  │        └─ stop_child_traversal
//!                                  └─ ErrorReporter (malformed `c` groups)
//! ```
//!
//! The host calls [`cook`] once per location and schedules a new invocation
//! for every child command it receives. No state is kept between calls.
//!
//! ## Example
//!
//! ```rust
//! use config::constants::NodeParams;
//! use cubemaker_op::{build_op_args, cook, LocationRequest, LogReporter};
//!
//! let params = NodeParams::new("/root/world", 2, false, 0.0).unwrap();
//! let args = build_op_args(&params).unwrap();
//!
//! let output = cook(&LocationRequest::root(args), &LogReporter);
//! assert_eq!(output.children[0].name, "world");
//! assert!(output.stop_child_traversal);
//! ```

pub mod args;
pub mod cook;
pub mod error;
pub mod geometry;
pub mod op;
pub mod transform;

pub use args::{build_op_args, encode_location};
pub use cook::{cook, setup, CookState, CubeMakerOp};
pub use error::OpArgsError;
pub use geometry::build_geometry;
pub use op::{
    ChildCreationCommand, CollectingReporter, CookOutput, ErrorReport, ErrorReporter,
    LocationRequest, LogReporter, Op, PluginInfo, ThreadMode,
};
pub use transform::{build_transform, Transform};
