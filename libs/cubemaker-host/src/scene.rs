//! Generated scene as seen by the host.

use std::collections::BTreeMap;

use config::constants::{POLYMESH_TYPE, TYPE_ATTR};
use scene_attr::Group;
use serde::Serialize;

use crate::error::HostResult;

/// One cooked location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLocation {
    /// Attributes set by the cook.
    pub attributes: Group,
    /// Child names, in creation order.
    pub children: Vec<String>,
    /// Whether the cook stopped implicit traversal below this location.
    pub stop_child_traversal: bool,
    /// Messages reported through the error channel for this location.
    pub errors: Vec<String>,
}

/// All cooked locations, keyed by full path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    locations: BTreeMap<String, SceneLocation>,
}

impl Scene {
    pub(crate) fn insert(&mut self, path: String, location: SceneLocation) {
        self.locations.insert(path, location);
    }

    pub(crate) fn push_error(&mut self, path: &str, message: String) {
        if let Some(location) = self.locations.get_mut(path) {
            location.errors.push(message);
        }
    }

    pub fn get(&self, path: &str) -> Option<&SceneLocation> {
        self.locations.get(path)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Paths in lexical order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }

    /// Locations whose `type` attribute is `polymesh`.
    pub fn meshes(&self) -> impl Iterator<Item = (&str, &SceneLocation)> {
        self.locations
            .iter()
            .filter(|(_, location)| {
                location.attributes.read(TYPE_ATTR, String::new(), true).as_deref()
                    == Some(POLYMESH_TYPE)
            })
            .map(|(path, location)| (path.as_str(), location))
    }

    /// Total number of error reports.
    pub fn error_count(&self) -> usize {
        self.locations.values().map(|l| l.errors.len()).sum()
    }

    pub fn to_json(&self) -> HostResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
