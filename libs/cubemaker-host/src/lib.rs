//! # CubeMaker Host
//!
//! A minimal host for scene generator ops: it plays the role of the
//! tree-walking runtime, cooking `/root` first and then every location a
//! cook asks for.
//!
//! ## Example
//!
//! ```rust
//! use config::constants::NodeParams;
//! use cubemaker_host::SceneWalker;
//! use cubemaker_op::{build_op_args, CubeMakerOp};
//!
//! let params = NodeParams::new("/root/world", 2, false, 0.0).unwrap();
//! let scene = SceneWalker::new(CubeMakerOp)
//!     .walk(build_op_args(&params).unwrap())
//!     .unwrap();
//! assert!(scene.get("/root/world/cube_1").is_some());
//! ```

pub mod cli;
pub mod error;
pub mod scene;
pub mod walker;

pub use cli::CliArgs;
pub use error::{HostError, HostResult};
pub use scene::{Scene, SceneLocation};
pub use walker::SceneWalker;
