//! # Scene Attr
//!
//! Immutable, hierarchical, typed attribute values used for every input and
//! output of a scene location generator.
//!
//! ## Model
//!
//! ```text
//! Value ─┬─ Int(Tuple<i64>)
//!        ├─ Float(Tuple<f32>)
//!        ├─ Double(Tuple<f64>)
//!        ├─ String
//!        └─ Group ── ordered (name → Value), inherit flag
//! ```
//!
//! Values are assembled once through a [`GroupBuilder`] and never mutated
//! afterwards. Storage is reference counted, so cloning a value is cheap and
//! a value may be shared between threads.
//!
//! ## Example
//!
//! ```rust
//! use scene_attr::{GroupBuilder, Value};
//!
//! let mut gb = GroupBuilder::new();
//! gb.set("leaf.index", Value::int(2));
//! gb.set("leaf.rotation", Value::double(45.0));
//! let args = gb.build();
//!
//! assert_eq!(args.read("leaf.index", 0_i64, false), Some(2));
//! // Missing or mistyped values fall back to the default when not strict
//! assert_eq!(args.read("leaf.scale", 1.0_f64, false), Some(1.0));
//! assert_eq!(args.read::<f64>("leaf.index", 0.0, true), None);
//! ```

pub mod builder;
pub mod delimiter;
pub mod error;
pub mod group;
pub mod value;

pub use builder::GroupBuilder;
pub use delimiter::{delimiter_decode, delimiter_encode};
pub use error::{AttrError, AttrResult};
pub use group::Group;
pub use value::{FromValue, Tuple, Value};
