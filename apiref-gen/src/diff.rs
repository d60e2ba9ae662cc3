//! Catalog comparison.
//!
//! Conformance tests check a generated catalog against a checked-in copy so
//! undocumented or changed API surface is caught. [`compare`] matches
//! endpoints by name and reports what was added, removed or changed.

use std::{collections::BTreeMap, fmt};

use crate::Endpoint;

/// An endpoint present in both catalogs whose record differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointChange {
    pub name: String,
    /// Names of the differing fields (`description`, `arguments`, `options`, `response`).
    pub fields: Vec<&'static str>,
}

/// Differences between an expected and an actual catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDiff {
    /// In the actual catalog only.
    pub added: Vec<String>,
    /// In the expected catalog only.
    pub removed: Vec<String>,
    pub changed: Vec<EndpointChange>,
}

impl CatalogDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Compare two catalogs by endpoint name.
pub fn compare(expected: &[Endpoint], actual: &[Endpoint]) -> CatalogDiff {
    let expected: BTreeMap<&str, &Endpoint> =
        expected.iter().map(|e| (e.name.as_str(), e)).collect();
    let actual: BTreeMap<&str, &Endpoint> = actual.iter().map(|e| (e.name.as_str(), e)).collect();

    let mut diff = CatalogDiff::default();

    for (name, old) in &expected {
        match actual.get(name) {
            None => diff.removed.push(name.to_string()),
            Some(new) => {
                let fields = changed_fields(old, new);
                if !fields.is_empty() {
                    diff.changed.push(EndpointChange {
                        name: name.to_string(),
                        fields,
                    });
                }
            }
        }
    }

    diff.added = actual
        .keys()
        .filter(|name| !expected.contains_key(*name))
        .map(|name| name.to_string())
        .collect();

    diff
}

fn changed_fields(old: &Endpoint, new: &Endpoint) -> Vec<&'static str> {
    let mut fields = Vec::new();
    if old.description != new.description {
        fields.push("description");
    }
    if old.arguments != new.arguments {
        fields.push("arguments");
    }
    if old.options != new.options {
        fields.push("options");
    }
    if old.response != new.response {
        fields.push("response");
    }
    fields
}

impl fmt::Display for CatalogDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "catalogs match");
        }
        let mut lines = Vec::new();
        for name in &self.added {
            lines.push(format!("+ {}", name));
        }
        for name in &self.removed {
            lines.push(format!("- {}", name));
        }
        for change in &self.changed {
            lines.push(format!("~ {} ({})", change.name, change.fields.join(", ")));
        }
        write!(f, "{}", lines.join("\n"))
    }
}
