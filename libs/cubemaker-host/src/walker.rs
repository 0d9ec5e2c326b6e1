//! Breadth-first scene walker.
//!
//! Starting at `/root`, every location is cooked once and every child command
//! becomes a location of the next level. Levels are cooked either one
//! location at a time or with rayon; results are recorded in request order
//! either way, so both walks build the same [`Scene`].

use config::constants::MAX_SCENE_LOCATIONS;
use cubemaker_op::{CollectingReporter, CookOutput, LocationRequest, Op, ThreadMode};
use log::{debug, warn};
use rayon::prelude::*;
use scene_attr::Group;

use crate::error::{HostError, HostResult};
use crate::scene::{Scene, SceneLocation};

/// Drives an [`Op`] over a whole scene.
#[derive(Debug, Clone)]
pub struct SceneWalker<O> {
    op: O,
    location_limit: usize,
}

impl<O: Op> SceneWalker<O> {
    pub fn new(op: O) -> Self {
        Self {
            op,
            location_limit: MAX_SCENE_LOCATIONS,
        }
    }

    /// Fails the walk once more than `limit` locations were created.
    pub fn with_location_limit(mut self, limit: usize) -> Self {
        self.location_limit = limit;
        self
    }

    /// Cooks every location on the calling thread.
    pub fn walk(&self, args: Group) -> HostResult<Scene> {
        self.run(args, false)
    }

    /// Cooks each level in parallel when the op declares concurrent cooks,
    /// and sequentially otherwise.
    pub fn walk_parallel(&self, args: Group) -> HostResult<Scene> {
        let parallel = match self.op.setup() {
            ThreadMode::Concurrent => true,
            ThreadMode::GlobalUnsafe => {
                warn!("{} is not concurrent, walking sequentially", self.op.info().name);
                false
            }
        };
        self.run(args, parallel)
    }

    fn run(&self, args: Group, parallel: bool) -> HostResult<Scene> {
        let reporter = CollectingReporter::new();
        let mut scene = Scene::default();
        let mut level = vec![LocationRequest::root(args)];
        let mut created = level.len();
        let mut depth = 0;
        if created > self.location_limit {
            return Err(HostError::TooManyLocations(self.location_limit));
        }

        while !level.is_empty() {
            let remaining = self.location_limit - created;
            for request in &mut level {
                request.child_limit = remaining;
            }
            debug!("cooking {} locations at depth {depth}", level.len());

            let outputs: Vec<CookOutput> = if parallel {
                level
                    .par_iter()
                    .map(|request| self.op.cook(request, &reporter))
                    .collect()
            } else {
                level
                    .iter()
                    .map(|request| self.op.cook(request, &reporter))
                    .collect()
            };

            let mut next = Vec::new();
            for (request, output) in level.into_iter().zip(outputs) {
                created += output.children.len();
                if created > self.location_limit {
                    return Err(HostError::TooManyLocations(self.location_limit));
                }
                let children = output.children.iter().map(|c| c.name.clone()).collect();
                for command in output.children {
                    let path = format!("{}/{}", request.location, command.name);
                    next.push(LocationRequest::child(path, command.args));
                }
                scene.insert(
                    request.location,
                    SceneLocation {
                        attributes: output.attributes,
                        children,
                        stop_child_traversal: output.stop_child_traversal,
                        errors: Vec::new(),
                    },
                );
            }
            level = next;
            depth += 1;
        }

        for report in reporter.into_reports() {
            scene.push_error(&report.location, report.message);
        }
        Ok(scene)
    }
}
