//! Test utilities for catalog conformance.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use crate::{Endpoint, compare};

/// Assert that two catalogs are equal, listing the differing endpoints on failure.
pub fn assert_catalog_eq(expected: &[Endpoint], actual: &[Endpoint]) {
    let diff = compare(expected, actual);
    if !diff.is_empty() {
        panic!("Catalog mismatch:\n{}", diff);
    }
    if expected != actual {
        panic!("Catalog order mismatch: endpoints must be sorted by name");
    }
}

/// Parse a catalog fixture (JSON array of endpoints).
pub fn catalog_from_json(json: &str) -> Vec<Endpoint> {
    serde_json::from_str(json).expect("invalid catalog fixture")
}

/// Assert that every adjacent pair of endpoints is in name order.
pub fn assert_sorted(endpoints: &[Endpoint]) {
    for pair in endpoints.windows(2) {
        assert!(
            pair[0].name <= pair[1].name,
            "'{}' is listed before '{}'",
            pair[0].name,
            pair[1].name
        );
    }
}
