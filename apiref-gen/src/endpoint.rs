//! Catalog records.

use serde::{Deserialize, Serialize};

/// One documented API endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Endpoint {
    /// Slash-delimited path from the root (e.g. `/api/v1/add`).
    pub name: String,
    pub description: String,
    /// Positional arguments in declaration order.
    pub arguments: Vec<Argument>,
    /// Options in declaration order.
    pub options: Vec<Argument>,
    /// Rendered response schema, or the plain-text sentinel.
    pub response: String,
}

/// A positional argument or option of an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Argument {
    pub name: String,
    pub description: String,
    #[serde(rename = "Type")]
    pub ty: String,
    /// Positional arguments only; always false for options.
    #[serde(default)]
    pub required: bool,
    /// Options only; empty when there is no default or the default is null.
    #[serde(default)]
    pub default: String,
}
