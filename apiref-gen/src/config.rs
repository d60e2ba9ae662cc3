//! Generation settings.

use std::collections::BTreeSet;

use apiref_core::Indent;

/// What to do when an endpoint's response type cannot be described.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole run; no partial catalog is returned.
    #[default]
    Abort,
    /// Drop the endpoint, log a warning and keep walking.
    SkipEndpoint,
}

/// Settings for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint names whose own entry is suppressed. Their subcommands are
    /// still walked.
    pub ignore: BTreeSet<String>,
    /// Indentation of rendered response schemas.
    pub indent: Indent,
    /// Nesting depth at which composite types render as a placeholder.
    pub max_depth: usize,
    /// Response description failure handling.
    pub on_error: FailurePolicy,
}

impl Config {
    /// Failsafe depth for types that contain themselves.
    pub const DEFAULT_MAX_DEPTH: usize = 20;

    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the endpoint with this exact name.
    pub fn ignore(mut self, name: impl Into<String>) -> Self {
        self.ignore.insert(name.into());
        self
    }

    pub fn ignore_all<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn on_error(mut self, policy: FailurePolicy) -> Self {
        self.on_error = policy;
        self
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.contains(name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore: BTreeSet::new(),
            indent: Indent::SCHEMA,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            on_error: FailurePolicy::Abort,
        }
    }
}
