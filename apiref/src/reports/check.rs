//! Check command report data structures.

use std::path::PathBuf;

use apiref_gen::CatalogDiff;

use super::output::{Output, Report};

/// Result of comparing the generated catalog against a checked-in copy.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the expected catalog.
    pub expected_path: PathBuf,
    /// Number of endpoints in the generated catalog.
    pub endpoint_count: usize,
    pub diff: CatalogDiff,
}

impl CheckReport {
    /// Whether the catalogs match.
    pub fn is_clean(&self) -> bool {
        self.diff.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if self.is_clean() {
            out.preformatted(&format!(
                "✓ {} endpoint{} match {}",
                self.endpoint_count,
                if self.endpoint_count == 1 { "" } else { "s" },
                self.expected_path.display()
            ));
            return;
        }

        out.warning(&format!(
            "generated catalog differs from {}",
            self.expected_path.display()
        ));

        if !self.diff.added.is_empty() {
            out.section("Undocumented endpoints");
            for name in &self.diff.added {
                out.added_item(name);
            }
        }
        if !self.diff.removed.is_empty() {
            out.section("Missing endpoints");
            for name in &self.diff.removed {
                out.removed_item(name);
            }
        }
        if !self.diff.changed.is_empty() {
            out.section("Changed endpoints");
            for change in &self.diff.changed {
                out.changed_item(&format!("{} ({})", change.name, change.fields.join(", ")));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use apiref_gen::EndpointChange;

    use super::*;
    use crate::reports::testing::RecordingOutput;

    #[test]
    fn test_clean_report() {
        let report = CheckReport {
            expected_path: "catalog.json".into(),
            endpoint_count: 3,
            diff: CatalogDiff::default(),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(report.is_clean());
        assert_eq!(out.lines, ["✓ 3 endpoints match catalog.json"]);
    }

    #[test]
    fn test_drift_report() {
        let report = CheckReport {
            expected_path: "catalog.json".into(),
            endpoint_count: 2,
            diff: CatalogDiff {
                added: vec!["/api/v1/new".into()],
                removed: vec![],
                changed: vec![EndpointChange {
                    name: "/api/v1/add".into(),
                    fields: vec!["options", "response"],
                }],
            },
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(!report.is_clean());
        assert_eq!(
            out.lines,
            [
                "warning: generated catalog differs from catalog.json",
                "section: Undocumented endpoints",
                "+ /api/v1/new",
                "section: Changed endpoints",
                "~ /api/v1/add (options, response)",
            ]
        );
    }
}
