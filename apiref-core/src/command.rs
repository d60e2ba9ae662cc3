//! Command-definition graph.
//!
//! A [`Command`] is one node of the tree an RPC node serves. Nodes without a
//! handler are pure namespaces; their subcommands are still reachable.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::TypeRef;

/// A command or namespace node.
#[derive(Debug, Clone, Default)]
pub struct Command {
    /// Whether the command has an executable handler.
    pub has_handler: bool,
    /// Short help text.
    pub tagline: String,
    /// Positional arguments in declaration order.
    pub arguments: Vec<PositionalSpec>,
    /// Options in declaration order.
    pub options: Vec<OptionSpec>,
    /// Declared response payload type (None for plain-text responses).
    pub response: Option<TypeRef>,
    /// Subcommands keyed by path segment.
    pub subcommands: IndexMap<String, Command>,
}

impl Command {
    /// Create an executable command.
    pub fn handler() -> Self {
        Self {
            has_handler: true,
            ..Self::default()
        }
    }

    /// Create a namespace node without a handler.
    pub fn group() -> Self {
        Self::default()
    }

    pub fn tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    pub fn argument(mut self, arg: PositionalSpec) -> Self {
        self.arguments.push(arg);
        self
    }

    pub fn option(mut self, opt: OptionSpec) -> Self {
        self.options.push(opt);
        self
    }

    pub fn response(mut self, ty: TypeRef) -> Self {
        self.response = Some(ty);
        self
    }

    pub fn subcommand(mut self, name: impl Into<String>, cmd: Command) -> Self {
        self.subcommands.insert(name.into(), cmd);
        self
    }

    /// Returns true if this command has subcommands.
    pub fn has_subcommands(&self) -> bool {
        !self.subcommands.is_empty()
    }

    /// Look up a descendant by slash-separated path relative to this node.
    pub fn find(&self, path: &str) -> Option<&Command> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |cmd, segment| cmd.subcommands.get(segment))
    }
}

/// Kind of a positional argument.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    #[default]
    String,
    File,
}

impl ArgKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgKind::String => "string",
            ArgKind::File => "file",
        }
    }
}

/// A positional argument.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalSpec {
    pub name: String,
    pub description: String,
    pub required: bool,
    pub kind: ArgKind,
}

impl PositionalSpec {
    /// A string argument.
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            required: false,
            kind: ArgKind::String,
        }
    }

    /// A file-upload argument.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            kind: ArgKind::File,
            ..Self::string(name)
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Declared value type of an option.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    #[default]
    Bool,
    Int,
    Uint,
    Int64,
    Uint64,
    #[serde(alias = "float")]
    Float64,
    String,
    #[serde(alias = "strings")]
    Array,
}

impl OptionType {
    /// The type's own textual name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Bool => "bool",
            OptionType::Int => "int",
            OptionType::Uint => "uint",
            OptionType::Int64 => "int64",
            OptionType::Uint64 => "uint64",
            OptionType::Float64 => "float64",
            OptionType::String => "string",
            OptionType::Array => "array",
        }
    }
}

/// A named option (flag).
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    /// Canonical name first, then aliases.
    pub names: Vec<String>,
    pub description: String,
    pub ty: OptionType,
    pub default: Option<DefaultValue>,
}

impl OptionSpec {
    pub fn new(name: impl Into<String>, ty: OptionType) -> Self {
        Self {
            names: vec![name.into()],
            description: String::new(),
            ty,
            default: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.names.push(alias.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn default_value(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// The first declared name, or an empty string if none was declared.
    pub fn canonical_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }
}

/// Default value of an option.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// An explicit null default.
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Strings(Vec<String>),
}

impl DefaultValue {
    /// Literal a null default renders as.
    pub const NIL: &'static str = "<nil>";

    /// Stringify the value.
    pub fn render(&self) -> String {
        match self {
            Self::Null => Self::NIL.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Uint(u) => u.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => s.clone(),
            Self::Strings(items) => format!("[{}]", items.join(" ")),
        }
    }
}
