//! Core types for the apiref endpoint catalog generator.
//!
//! This crate holds the read-only inputs of a generation run:
//!
//! - [`Command`] - the command-definition graph an RPC node serves
//! - [`TypeRef`] / [`TypeTable`] - explicit descriptions of response payload types
//! - [`Glossary`] - fixed schemas for well-known domain value types
//! - [`Api`] - the bundle handed to the generator
//!
//! # Architecture
//!
//! ```text
//! api.toml → apiref-manifest (parsing) → apiref-core (Api) → apiref-gen (catalog)
//! ```
//!
//! Nothing in here performs I/O or holds global state.

mod api;
mod command;
mod glossary;
mod indent;
mod types;

pub use api::Api;
pub use command::{ArgKind, Command, DefaultValue, OptionSpec, OptionType, PositionalSpec};
pub use glossary::{Glossary, Override};
pub use indent::Indent;
pub use types::{FieldDef, ParseTypeError, Primitive, RecordDef, TypeRef, TypeTable};
