//! TOML manifest parsing and validation for apiref.
//!
//! An `api.toml` declares the command tree of an RPC node, the record types
//! its responses use, glossary overrides and generation settings.
//! [`Manifest::to_api`] turns it into the [`apiref_core::Api`] bundle the
//! generator consumes.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod command;
mod error;
mod manifest;
mod types;
mod validate;

pub use command::{ArgDef, CommandDef, OptionDef};
pub use error::{Error, Result, SourceContext};
pub use manifest::{ApiToml, DocsSettings, Manifest, parse_manifest};
pub use types::{FieldEntry, GlossaryEntry, TypeDef};
pub use validate::ParseContext;
