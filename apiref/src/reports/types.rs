//! Types command report data structures.

use super::output::{Output, Report};

/// A type and its rendered schema.
#[derive(Debug)]
pub struct TypeEntry {
    pub name: String,
    pub schema: String,
}

/// Glossary overrides and record types known to a manifest.
#[derive(Debug)]
pub struct TypesReport {
    pub overrides: Vec<TypeEntry>,
    pub records: Vec<TypeEntry>,
}

impl Report for TypesReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Types");
        out.newline();

        out.section("Glossary");
        render_entries(out, &self.overrides);

        out.newline();
        out.section("Records");
        if self.records.is_empty() {
            out.list_item("(none)");
        }
        render_entries(out, &self.records);
    }
}

fn render_entries(out: &mut dyn Output, entries: &[TypeEntry]) {
    for entry in entries {
        if entry.schema.contains('\n') {
            out.list_item(&entry.name);
            out.preformatted(&indent_block(&entry.schema, "    "));
        } else {
            out.list_item(&format!("{} = {}", entry.name, entry.schema));
        }
    }
}

fn indent_block(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}
