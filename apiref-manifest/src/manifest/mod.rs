//! Manifest types for api.toml files.

mod file;
mod parse;

use apiref_core::{Api, Command, Glossary, Indent, TypeTable};
use indexmap::IndexMap;
use serde::Deserialize;

pub use file::ApiToml;
pub use parse::parse_manifest;

use crate::{CommandDef, GlossaryEntry, TypeDef};

/// Root manifest for api.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generation settings
    #[serde(default)]
    pub docs: DocsSettings,

    /// Overrides added to (or replacing) the standard glossary
    #[serde(default)]
    pub glossary: IndexMap<String, GlossaryEntry>,

    /// Record types referenced by response types
    #[serde(default)]
    pub types: IndexMap<String, TypeDef>,

    /// Top-level commands, in declaration order
    #[serde(default)]
    pub commands: IndexMap<String, CommandDef>,
}

/// The `[docs]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct DocsSettings {
    /// Name of the root command; every endpoint name starts with it.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Title of the rendered reference document.
    #[serde(default = "default_title")]
    pub title: String,

    /// Endpoint names whose own entry is suppressed.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Spaces per schema indent level.
    pub indent: Option<u8>,

    /// Nesting depth at which composite types render as a placeholder.
    pub max_depth: Option<usize>,
}

fn default_prefix() -> String {
    "/api/v1".to_string()
}

fn default_title() -> String {
    "API Reference".to_string()
}

impl Default for DocsSettings {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            title: default_title(),
            ignore: Vec::new(),
            indent: None,
            max_depth: None,
        }
    }
}

impl DocsSettings {
    /// Schema indentation, if the manifest overrides it.
    pub fn indent(&self) -> Option<Indent> {
        self.indent.map(Indent::Spaces)
    }
}

impl Manifest {
    /// Check if a command exists (supports nested paths like "pin/add")
    pub fn has_command(&self, path: &str) -> bool {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let Some(first) = segments.next() else {
            return false;
        };
        let Some(mut current) = self.commands.get(first) else {
            return false;
        };
        for segment in segments {
            match current.commands.get(segment) {
                Some(cmd) => current = cmd,
                None => return false,
            }
        }
        true
    }

    /// The root of the declared command tree. The root itself has no handler.
    pub fn root(&self) -> Command {
        self.commands
            .iter()
            .fold(Command::group(), |root, (name, def)| {
                root.subcommand(name.clone(), def.to_command())
            })
    }

    /// Record definitions in declaration order.
    pub fn type_table(&self) -> TypeTable {
        self.types
            .iter()
            .fold(TypeTable::new(), |table, (name, def)| {
                table.with(def.to_record(name))
            })
    }

    /// The standard glossary plus this manifest's entries.
    pub fn glossary(&self) -> Glossary {
        let mut glossary = Glossary::standard();
        for (type_id, entry) in &self.glossary {
            glossary.insert(type_id.clone(), entry.to_override());
        }
        glossary
    }

    /// Bundle everything the generator needs.
    pub fn to_api(&self) -> Api {
        Api::new(self.docs.prefix.clone(), self.root())
            .with_types(self.type_table())
            .with_glossary(self.glossary())
    }
}
