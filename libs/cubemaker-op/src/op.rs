//! Host callback contract.
//!
//! A host drives an op through two calls: [`Op::setup`] once, to learn whether
//! cooks may run concurrently, and [`Op::cook`] once per location. Everything a
//! cook produces is returned in a [`CookOutput`]; the only side channel is the
//! [`ErrorReporter`].

use std::sync::Mutex;

use config::constants::ROOT_LOCATION;
use log::error;
use scene_attr::{Group, GroupBuilder, Value};

/// Threading mode declared by an op at setup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadMode {
    /// Cooks for different locations may run at the same time.
    Concurrent,
    /// The host must serialize every cook of this op.
    GlobalUnsafe,
}

/// Registration data a plugin ABI adapter publishes for an op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub major: u32,
    pub minor: u32,
}

/// Input of one cook invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRequest {
    /// Full path of the location being cooked, used for error reports.
    pub location: String,
    /// True only for the absolute root of the generated tree.
    pub at_root: bool,
    /// Op arguments for this location. `None` when absent or not a group.
    pub args: Option<Group>,
    /// Most children the host will accept from this cook. A cook asked for
    /// more creates one past the limit and no further.
    pub child_limit: usize,
}

impl LocationRequest {
    /// Request for the implicit root location.
    pub fn root(args: Group) -> Self {
        Self {
            location: ROOT_LOCATION.to_string(),
            at_root: true,
            args: Some(args),
            child_limit: usize::MAX,
        }
    }

    /// Request for a location created by a previous cook.
    pub fn child(location: impl Into<String>, args: Group) -> Self {
        Self {
            location: location.into(),
            at_root: false,
            args: Some(args),
            child_limit: usize::MAX,
        }
    }

    pub fn with_child_limit(mut self, limit: usize) -> Self {
        self.child_limit = limit;
        self
    }
}

/// Asks the host to create a child location below the cooked one.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildCreationCommand {
    /// A single path element, already delimiter-decoded.
    pub name: String,
    /// Op arguments the child will be cooked with.
    pub args: Group,
}

/// Everything one cook invocation hands back to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct CookOutput {
    /// Children to create, in order.
    pub children: Vec<ChildCreationCommand>,
    /// Attributes set on the cooked location.
    pub attributes: Group,
    /// Whether the host should skip its implicit traversal below this location.
    pub stop_child_traversal: bool,
}

impl CookOutput {
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.attributes.is_empty()
    }
}

impl Default for CookOutput {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            attributes: Group::empty(),
            stop_child_traversal: false,
        }
    }
}

/// Accumulates the effects of a cook in the order the host interface would
/// receive them.
#[derive(Debug, Default)]
pub(crate) struct CookContext {
    children: Vec<ChildCreationCommand>,
    attributes: GroupBuilder,
    stop_child_traversal: bool,
}

impl CookContext {
    pub(crate) fn create_child(&mut self, name: impl Into<String>, args: Group) {
        self.children.push(ChildCreationCommand {
            name: name.into(),
            args,
        });
    }

    pub(crate) fn set_attr(&mut self, name: &str, value: impl Into<Value>) {
        self.attributes.set(name, value);
    }

    pub(crate) fn stop_child_traversal(&mut self) {
        self.stop_child_traversal = true;
    }

    pub(crate) fn finish(self) -> CookOutput {
        CookOutput {
            children: self.children,
            attributes: self.attributes.build(),
            stop_child_traversal: self.stop_child_traversal,
        }
    }
}

/// Error channel provided by the host.
pub trait ErrorReporter: Send + Sync {
    fn report_error(&self, location: &str, message: &str);
}

/// Reports errors through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report_error(&self, location: &str, message: &str) {
        error!("{location}: {message}");
    }
}

/// One error received by a [`CollectingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub location: String,
    pub message: String,
}

/// Keeps every report in memory, for hosts that attach errors to locations.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    reports: Mutex<Vec<ErrorReport>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the reports received so far.
    pub fn reports(&self) -> Vec<ErrorReport> {
        match self.reports.lock() {
            Ok(reports) => reports.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn into_reports(self) -> Vec<ErrorReport> {
        match self.reports.into_inner() {
            Ok(reports) => reports,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl ErrorReporter for CollectingReporter {
    fn report_error(&self, location: &str, message: &str) {
        let report = ErrorReport {
            location: location.to_string(),
            message: message.to_string(),
        };
        match self.reports.lock() {
            Ok(mut reports) => reports.push(report),
            Err(poisoned) => poisoned.into_inner().push(report),
        }
    }
}

/// A scene generator op as seen by a host.
pub trait Op: Send + Sync {
    /// Registration data.
    fn info(&self) -> PluginInfo;

    /// Called once before any cook.
    fn setup(&self) -> ThreadMode;

    /// Called once per location.
    fn cook(&self, request: &LocationRequest, errors: &dyn ErrorReporter) -> CookOutput;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_collects_in_order() {
        let mut ctx = CookContext::default();
        ctx.create_child("b", Group::empty());
        ctx.create_child("a", Group::empty());
        ctx.set_attr("type", "polymesh");
        let output = ctx.finish();
        let names: Vec<_> = output.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(output.attributes.read("type", String::new(), true), Some("polymesh".to_string()));
        assert!(!output.stop_child_traversal);
    }

    #[test]
    fn test_default_output_is_empty() {
        assert!(CookOutput::default().is_empty());
    }

    #[test]
    fn test_collecting_reporter_keeps_reports() {
        let reporter = CollectingReporter::new();
        reporter.report_error("/root/a", "first");
        reporter.report_error("/root/b", "second");
        let reports = reporter.into_reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].location, "/root/b");
    }

    #[test]
    fn test_root_request() {
        let request = LocationRequest::root(Group::empty());
        assert!(request.at_root);
        assert_eq!(request.location, "/root");
    }
}
