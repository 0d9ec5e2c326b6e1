//! Named, ordered attribute groups.
//!
//! A [`Group`] maps unique child names to values and keeps insertion order.
//! Dotted paths address nested children: `"leaf.index"` is the `index` child
//! of the `leaf` child. Names that contain `.` are stored delimiter-encoded
//! (see [`crate::delimiter`]).

use std::sync::Arc;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::error::{AttrError, AttrResult};
use crate::value::{FromValue, Value};

pub(crate) const PATH_SEPARATOR: char = '.';

/// Immutable ordered mapping from name to [`Value`].
///
/// The inherit flag tells a consumer whether the group merges with a value
/// inherited from an ancestor location (`true`, the default) or replaces it
/// (`false`).
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    children: Arc<[(String, Value)]>,
    inherit: bool,
}

impl Group {
    pub(crate) fn from_parts(children: Vec<(String, Value)>, inherit: bool) -> Self {
        Self {
            children: children.into(),
            inherit,
        }
    }

    /// Empty group with the inherit flag set.
    pub fn empty() -> Self {
        Self::from_parts(Vec::new(), true)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn inherit(&self) -> bool {
        self.inherit
    }

    /// Name of the `index`-th direct child, as stored (encoded).
    pub fn child_name(&self, index: usize) -> Option<&str> {
        self.children.get(index).map(|(name, _)| name.as_str())
    }

    pub fn child_by_index(&self, index: usize) -> Option<&Value> {
        self.children.get(index).map(|(_, value)| value)
    }

    /// Direct child lookup, without path splitting.
    pub fn child(&self, name: &str) -> Option<&Value> {
        self.children
            .iter()
            .find(|(child_name, _)| child_name == name)
            .map(|(_, value)| value)
    }

    /// Iterates over direct children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.children.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Looks up a value by dotted path. Returns `None` when any component is
    /// missing or an intermediate component is not a group.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split(PATH_SEPARATOR);
        let first = segments.next()?;
        let mut current = self.child(first)?;
        for segment in segments {
            current = current.as_group()?.child(segment)?;
        }
        Some(current)
    }

    /// Looks up a group by dotted path.
    pub fn get_group(&self, path: &str) -> Option<&Group> {
        self.get(path).and_then(Value::as_group)
    }

    /// Typed read with a caller-supplied default.
    ///
    /// When the path is missing or holds another type, returns
    /// `Some(default)` if `strict` is false and `None` if it is true.
    pub fn read<T: FromValue>(&self, path: &str, default: T, strict: bool) -> Option<T> {
        match self.get(path).and_then(T::from_value) {
            Some(value) => Some(value),
            None if strict => None,
            None => Some(default),
        }
    }

    /// Lenient integer read.
    pub fn int_or(&self, path: &str, default: i64) -> i64 {
        self.get(path).and_then(i64::from_value).unwrap_or(default)
    }

    /// Lenient double read.
    pub fn double_or(&self, path: &str, default: f64) -> f64 {
        self.get(path).and_then(f64::from_value).unwrap_or(default)
    }

    /// Strict read that explains why a value could not be produced.
    pub fn try_read<T: FromValue>(&self, path: &str) -> AttrResult<T> {
        let value = self
            .get(path)
            .ok_or_else(|| AttrError::Missing(path.to_string()))?;
        T::from_value(value).ok_or_else(|| AttrError::TypeMismatch {
            path: path.to_string(),
            expected: T::TYPE_NAME,
            found: value.type_name(),
        })
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::empty()
    }
}

struct Children<'a>(&'a [(String, Value)]);

impl Serialize for Children<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for Group {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Group", 2)?;
        state.serialize_field("inherit", &self.inherit)?;
        state.serialize_field("children", &Children(&self.children))?;
        state.end()
    }
}

// =============================================================================
// TESTS
// =============================================================================
