//! Generation input bundle.

use crate::{Command, Glossary, TypeTable};

/// Everything a catalog is generated from.
#[derive(Debug, Clone)]
pub struct Api {
    /// Name prefix of the root command (e.g. `/api/v1`).
    pub prefix: String,
    /// Root of the command tree.
    pub root: Command,
    /// Record definitions referenced by response types.
    pub types: TypeTable,
    /// Type overrides.
    pub glossary: Glossary,
}

impl Api {
    /// Bundle a root command with the standard glossary and no records.
    pub fn new(prefix: impl Into<String>, root: Command) -> Self {
        Self {
            prefix: prefix.into(),
            root,
            types: TypeTable::new(),
            glossary: Glossary::standard(),
        }
    }

    pub fn with_types(mut self, types: TypeTable) -> Self {
        self.types = types;
        self
    }

    pub fn with_glossary(mut self, glossary: Glossary) -> Self {
        self.glossary = glossary;
        self
    }
}
