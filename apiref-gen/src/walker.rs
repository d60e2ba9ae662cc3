//! Command tree traversal.
//!
//! The [`Walker`] descends a command tree depth-first and emits one
//! [`Endpoint`] per executable, non-ignored command. Grouping and ignored
//! nodes produce no entry of their own, but their subcommands are always
//! walked. The result is sorted by name once, at the top.
//!
//! # Example
//!
//! ```
//! use apiref_core::{Api, Command};
//! use apiref_gen::{Config, all_endpoints};
//!
//! let root = Command::group()
//!     .subcommand("id", Command::handler().tagline("Show node id"))
//!     .subcommand("add", Command::handler().tagline("Add a file"));
//! let api = Api::new("/api/v1", root);
//!
//! let names: Vec<_> = all_endpoints(&api, &Config::default())
//!     .unwrap()
//!     .into_iter()
//!     .map(|e| e.name)
//!     .collect();
//! assert_eq!(names, ["/api/v1/add", "/api/v1/id"]);
//! ```

use apiref_core::{Api, Command, DefaultValue, OptionSpec, PositionalSpec};
use tracing::{debug, trace, warn};

use crate::{Argument, Config, Describer, Endpoint, Error, FailurePolicy, Result};

/// Collects endpoints from a command tree.
#[derive(Debug, Clone)]
pub struct Walker<'a> {
    describer: &'a Describer<'a>,
    config: &'a Config,
}

impl<'a> Walker<'a> {
    pub fn new(describer: &'a Describer<'a>, config: &'a Config) -> Self {
        Self { describer, config }
    }

    /// Gather the endpoints of `cmd` and all its descendants, sorted by name.
    ///
    /// `prefix` is the name of `cmd` itself; descendants are named
    /// `prefix/segment/...`.
    pub fn endpoints(&self, prefix: &str, cmd: &Command) -> Result<Vec<Endpoint>> {
        let mut endpoints = Vec::new();
        self.collect(prefix, cmd, &mut endpoints)?;
        endpoints.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(endpoints)
    }

    fn collect(&self, name: &str, cmd: &Command, out: &mut Vec<Endpoint>) -> Result<()> {
        if !cmd.has_handler {
            debug!(endpoint = name, "no handler, documenting subcommands only");
        } else if self.config.is_ignored(name) {
            debug!(endpoint = name, "ignored, documenting subcommands only");
        } else if let Some(endpoint) = self.endpoint(name, cmd)? {
            trace!(endpoint = name, "collected");
            out.push(endpoint);
        }

        for (segment, child) in &cmd.subcommands {
            self.collect(&format!("{}/{}", name, segment), child, out)?;
        }
        Ok(())
    }

    /// Build the endpoint for one command, or `None` if it was skipped.
    fn endpoint(&self, name: &str, cmd: &Command) -> Result<Option<Endpoint>> {
        let response = match self.describer.describe_response(cmd.response.as_ref()) {
            Ok(response) => response,
            Err(source) => match self.config.on_error {
                FailurePolicy::Abort => {
                    return Err(Error::Describe {
                        endpoint: name.to_string(),
                        source,
                    });
                }
                FailurePolicy::SkipEndpoint => {
                    warn!(endpoint = name, error = %source, "skipping endpoint");
                    return Ok(None);
                }
            },
        };

        Ok(Some(Endpoint {
            name: name.to_string(),
            description: cmd.tagline.clone(),
            arguments: cmd.arguments.iter().map(positional).collect(),
            options: cmd.options.iter().map(option).collect(),
            response,
        }))
    }
}

fn positional(arg: &PositionalSpec) -> Argument {
    Argument {
        name: arg.name.clone(),
        description: arg.description.clone(),
        ty: arg.kind.as_str().to_string(),
        required: arg.required,
        default: String::new(),
    }
}

fn option(opt: &OptionSpec) -> Argument {
    Argument {
        name: opt.canonical_name().to_string(),
        description: opt.description.clone(),
        ty: opt.ty.as_str().to_string(),
        required: false,
        default: render_default(opt.default.as_ref()),
    }
}

/// Missing defaults and null defaults both render as an empty string.
fn render_default(default: Option<&DefaultValue>) -> String {
    match default.map(DefaultValue::render) {
        Some(rendered) if rendered != DefaultValue::NIL => rendered,
        _ => String::new(),
    }
}

/// Gather every endpoint of `api`, sorted by name.
pub fn all_endpoints(api: &Api, config: &Config) -> Result<Vec<Endpoint>> {
    let describer = Describer::for_api(api, config);
    Walker::new(&describer, config).endpoints(&api.prefix, &api.root)
}
