//! Endpoint catalog generation.
//!
//! Walks an RPC node's command-definition tree and produces a flat, sorted
//! catalog of [`Endpoint`]s, each with its response payload rendered as a
//! schema. The catalog feeds API reference documents and conformance tests
//! that compare it against a checked-in copy.
//!
//! # Module Organization
//!
//! - [`walker`] - Command tree traversal ([`Walker`], [`all_endpoints`])
//! - [`describe`] - Response schema description ([`Describer`])
//! - [`builder`] - Indented text building blocks
//! - [`render`] - Markdown and listing documents
//! - [`diff`] - Catalog comparison
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod describe;
pub mod diff;
pub mod render;
pub mod walker;

mod config;
mod endpoint;
mod error;
mod schema;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{Config, FailurePolicy};
pub use describe::{DescribeError, Describer, PLAIN_TEXT_RESPONSE, TRUNCATED};
pub use diff::{CatalogDiff, EndpointChange, compare};
pub use endpoint::{Argument, Endpoint};
pub use error::{Error, Result};
pub use schema::Schema;
pub use walker::{Walker, all_endpoints};
