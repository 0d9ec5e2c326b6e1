//! Accumulating builder for [`Group`] values.
//!
//! Setting a dotted path creates the intermediate groups it names. Setting an
//! existing path replaces the stored value. [`GroupBuilder::merge`] deep-merges
//! a finished group into the builder instead of replacing.

use log::warn;

use crate::error::{AttrError, AttrResult};
use crate::group::{Group, PATH_SEPARATOR};
use crate::value::Value;

#[derive(Debug, Clone)]
enum Entry {
    Value(Value),
    Group(GroupBuilder),
}

/// Builder accumulating children before producing an immutable [`Group`].
#[derive(Debug, Clone)]
pub struct GroupBuilder {
    entries: Vec<(String, Entry)>,
    inherit: bool,
}

impl GroupBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            inherit: true,
        }
    }

    /// Starts from the children and inherit flag of an existing group.
    pub fn from_group(group: &Group) -> Self {
        Self {
            entries: group
                .iter()
                .map(|(name, value)| (name.to_string(), Entry::Value(value.clone())))
                .collect(),
            inherit: group.inherit(),
        }
    }

    /// Stores `value` at `path`. Invalid paths are logged and ignored.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> &mut Self {
        if let Err(err) = self.try_set(path, value) {
            warn!("ignoring attribute set: {err}");
        }
        self
    }

    /// Stores `value` at `path`, rejecting empty paths and empty components.
    pub fn try_set(&mut self, path: &str, value: impl Into<Value>) -> AttrResult<&mut Self> {
        let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(AttrError::InvalidPath(path.to_string()));
        }
        self.set_segments(&segments, value.into());
        Ok(self)
    }

    fn set_segments(&mut self, segments: &[&str], value: Value) {
        match segments {
            [] => {}
            [name] => self.put(name, Entry::Value(value)),
            [head, rest @ ..] => {
                self.with_branch(head, |nested| nested.set_segments(rest, value))
            }
        }
    }

    fn put(&mut self, name: &str, entry: Entry) {
        match self.entries.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, slot)) => *slot = entry,
            None => self.entries.push((name.to_string(), entry)),
        }
    }

    /// Runs `edit` on the nested builder named `name`, converting a stored
    /// group or replacing a stored non-group value first.
    fn with_branch(&mut self, name: &str, edit: impl FnOnce(&mut GroupBuilder)) {
        let position = match self.entries.iter().position(|(existing, _)| existing == name) {
            Some(position) => position,
            None => {
                self.entries.push((name.to_string(), Entry::Group(GroupBuilder::new())));
                self.entries.len() - 1
            }
        };

        let slot = &mut self.entries[position].1;
        let mut nested = match std::mem::replace(slot, Entry::Group(GroupBuilder::new())) {
            Entry::Group(builder) => builder,
            Entry::Value(value) => value
                .as_group()
                .map_or_else(GroupBuilder::new, GroupBuilder::from_group),
        };
        edit(&mut nested);
        *slot = Entry::Group(nested);
    }

    /// Deep-merges `group` into the builder. Nested groups present on both
    /// sides are merged recursively; any other child replaces what is stored.
    pub fn merge(&mut self, group: &Group) -> &mut Self {
        for (name, value) in group.iter() {
            match value {
                Value::Group(nested) if self.holds_group(name) => {
                    self.with_branch(name, |builder| {
                        builder.merge(nested);
                    });
                }
                other => self.put(name, Entry::Value(other.clone())),
            }
        }
        self
    }

    fn holds_group(&self, name: &str) -> bool {
        self.entries.iter().any(|(existing, entry)| {
            existing == name
                && match entry {
                    Entry::Group(_) => true,
                    Entry::Value(value) => value.as_group().is_some(),
                }
        })
    }

    /// Sets the inherit flag of the group being built.
    pub fn set_group_inherit(&mut self, inherit: bool) -> &mut Self {
        self.inherit = inherit;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finalizes the immutable group.
    pub fn build(self) -> Group {
        let children = self
            .entries
            .into_iter()
            .map(|(name, entry)| {
                let value = match entry {
                    Entry::Value(value) => value,
                    Entry::Group(builder) => Value::Group(builder.build()),
                };
                (name, value)
            })
            .collect();
        Group::from_parts(children, self.inherit)
    }
}

impl Default for GroupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_creates_intermediate_groups() {
        let mut gb = GroupBuilder::new();
        gb.set("c.world.c.geo.a.numberOfCubes", Value::int(3));
        let args = gb.build();
        assert_eq!(args.len(), 1);
        assert_eq!(args.int_or("c.world.c.geo.a.numberOfCubes", 0), 3);
    }

    #[test]
    fn test_sibling_paths_share_parent() {
        let mut gb = GroupBuilder::new();
        gb.set("leaf.index", Value::int(1));
        gb.set("leaf.rotation", Value::double(30.0));
        let args = gb.build();
        assert_eq!(args.len(), 1);
        assert_eq!(args.get_group("leaf").map(Group::len), Some(2));
    }

    #[test]
    fn test_set_replaces_existing_value() {
        let mut gb = GroupBuilder::new();
        gb.set("index", Value::int(1));
        gb.set("index", Value::int(2));
        let args = gb.build();
        assert_eq!(args.len(), 1);
        assert_eq!(args.int_or("index", 0), 2);
    }

    #[test]
    fn test_set_through_stored_group_merges() {
        let mut inner = GroupBuilder::new();
        inner.set("index", Value::int(1));

        let mut gb = GroupBuilder::new();
        gb.set("leaf", inner.build());
        gb.set("leaf.rotation", Value::double(5.0));
        let args = gb.build();
        assert_eq!(args.int_or("leaf.index", 0), 1);
        assert_eq!(args.double_or("leaf.rotation", 0.0), 5.0);
    }

    #[test]
    fn test_set_through_scalar_replaces_it() {
        let mut gb = GroupBuilder::new();
        gb.set("leaf", Value::int(1));
        gb.set("leaf.index", Value::int(2));
        let args = gb.build();
        assert_eq!(args.int_or("leaf.index", 0), 2);
    }

    #[test]
    fn test_invalid_paths_are_ignored() {
        let mut gb = GroupBuilder::new();
        gb.set("", Value::int(1));
        gb.set("a..b", Value::int(1));
        gb.set(".a", Value::int(1));
        assert!(gb.is_empty());
        assert_eq!(
            GroupBuilder::new().try_set("a.", Value::int(1)).err(),
            Some(AttrError::InvalidPath("a.".to_string()))
        );
    }

    #[test]
    fn test_merge_is_deep() {
        let mut base = GroupBuilder::new();
        base.set("a.numberOfCubes", Value::int(3));
        base.set("a.maxRotation", Value::double(10.0));

        let mut update = GroupBuilder::new();
        update.set("a.maxRotation", Value::double(90.0));
        update.set("extra", Value::string("x"));

        base.merge(&update.build());
        let args = base.build();
        assert_eq!(args.int_or("a.numberOfCubes", 0), 3);
        assert_eq!(args.double_or("a.maxRotation", 0.0), 90.0);
        assert!(args.get("extra").is_some());
    }

    #[test]
    fn test_merge_into_stored_group_keeps_order_and_inherit() {
        let mut leaf = GroupBuilder::new();
        leaf.set("index", Value::int(1));
        leaf.set("rotation", Value::double(5.0));
        leaf.set_group_inherit(false);

        let mut base = GroupBuilder::from_group(&{
            let mut gb = GroupBuilder::new();
            gb.set("leaf", leaf.build());
            gb.build()
        });
        let mut update = GroupBuilder::new();
        update.set("leaf.rotation", Value::double(45.0));
        base.merge(&update.build());

        let args = base.build();
        let merged = args.get_group("leaf").unwrap();
        assert!(!merged.inherit());
        assert_eq!(merged.child_name(0), Some("index"));
        assert_eq!(merged.double_or("rotation", 0.0), 45.0);
    }

    #[test]
    fn test_inherit_flag() {
        let mut gb = GroupBuilder::new();
        assert!(gb.clone().build().inherit());
        gb.set_group_inherit(false);
        assert!(!gb.build().inherit());
    }
}
