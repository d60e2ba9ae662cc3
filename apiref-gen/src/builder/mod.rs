//! Text generation building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented text
//! - [`CodeFragment`] - Intermediate representation for text pieces
//! - [`Renderable`] - Trait for types that can be converted to fragments

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
