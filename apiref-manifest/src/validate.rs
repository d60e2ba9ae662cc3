//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the shared source plus the current path through the manifest
/// hierarchy, so recursive validation can describe where a problem is.
///
/// ```ignore
/// let ctx = ParseContext::new(src, "api.toml");
/// ctx.validate_command_name("pin")?;
///
/// let nested = ctx.push("pin");
/// nested.validate_command_name("add")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: Arc<SourceContext>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// The current path as a slash-separated command path.
    pub fn path_string(&self) -> String {
        self.path.join("/")
    }

    /// Describe `kind` at the current path, e.g. "option in 'pin/add'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.src(), name)
    }

    /// Validate a command name, which becomes one endpoint path segment.
    pub fn validate_command_name(&self, name: &str) -> Result<()> {
        if let Some(reason) = validate_segment(name) {
            return Err(self.source.invalid_name_error(
                name,
                self.context_for("command"),
                reason,
                self.find_span(name),
            ));
        }
        Ok(())
    }

    /// Validate the name of an argument, option or field.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(self.source.invalid_name_error(
                name,
                self.context_for(kind),
                "name cannot be empty",
                find_empty_name_span(self.src()),
            ));
        }
        Ok(())
    }

    /// Reject the second declaration of `name` among `names`.
    pub fn validate_unique<'n>(
        &self,
        names: impl IntoIterator<Item = &'n str>,
        kind: &str,
    ) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for name in names {
            if !seen.insert(name) {
                return Err(self.source.duplicate_name_error(
                    name,
                    self.context_for(kind),
                    find_duplicate_spans(self.src(), name),
                ));
            }
        }
        Ok(())
    }

    pub fn error(&self, message: impl Into<String>, near: Option<&str>) -> Box<crate::Error> {
        let span = near.and_then(|name| self.find_span(name));
        self.source.validation_error(message, span)
    }
}

/// Check that `name` can serve as one segment of an endpoint path.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_segment(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    if name.contains('/') {
        return Some("name cannot contain '/'; nest commands with [commands.<name>.commands.<sub>]");
    }
    if name.chars().any(char::is_whitespace) {
        return Some("name cannot contain whitespace");
    }
    None
}

/// Find the span of a name in the TOML source.
///
/// Looks for table headers (`.name]`, `.name.`) first, then quoted values
/// (`name = "value"`, `names = ["value"`).
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    for pattern in [format!(".{}]", name), format!(".{}.", name)] {
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    quoted_spans(src, name).into_iter().next()
}

fn find_empty_name_span(src: &str) -> Option<SourceSpan> {
    ["name = \"\"", "names = []", "names = [\"\"]"]
        .iter()
        .find_map(|pattern| src.find(pattern).map(|pos| SourceSpan::from((pos, pattern.len()))))
}

fn find_duplicate_spans(src: &str, name: &str) -> (Option<SourceSpan>, Option<SourceSpan>) {
    let spans = quoted_spans(src, name);
    (spans.first().copied(), spans.get(1).copied())
}

/// Every `"name"` occurring as a `name = ` value or a `names` element.
fn quoted_spans(src: &str, name: &str) -> Vec<SourceSpan> {
    let quoted = format!("\"{}\"", name);
    src.match_indices(&quoted)
        .map(|(pos, _)| pos)
        .filter(|&pos| {
            let before = src[..pos].trim_end();
            before.ends_with("name =")
                || before.ends_with("name=")
                || before.ends_with('[')
                || before.ends_with(',')
        })
        .map(|pos| SourceSpan::from((pos + 1, name.len())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_segments() {
        assert!(validate_segment("add").is_none());
        assert!(validate_segment("resolve-path").is_none());
        assert!(validate_segment("v0").is_none());
    }

    #[test]
    fn test_invalid_segments() {
        assert!(validate_segment("").is_some());
        assert!(validate_segment("pin/add").is_some());
        assert!(validate_segment("pin add").is_some());
    }

    #[test]
    fn test_find_name_span_table_header() {
        let src = "[commands.pin]\ntagline = \"test\"";
        let span = find_name_span(src, "pin").unwrap();
        assert_eq!(span.offset(), 10);
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn test_find_name_span_nested() {
        let src = "[commands.pin.commands.add]\ntagline = \"test\"";
        let span = find_name_span(src, "add").unwrap();
        assert_eq!(span.offset(), 23);
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn test_find_name_span_array_entry() {
        let src = "options = [ { names = [\"pin\", \"p\"], type = \"bool\" } ]";
        let span = find_name_span(src, "p").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "p");
        assert_eq!(span.offset(), 31);
    }

    #[test]
    fn test_find_name_span_not_in_description() {
        let src = "tagline = \"pin objects\"\ndescription = \"pin\"";
        assert!(find_name_span(src, "pin").is_none());
    }

    #[test]
    fn test_duplicate_spans() {
        let src = r#"fields = [
    { name = "Hash", type = "string" },
    { name = "Hash", type = "Cid" },
]"#;
        let (first, second) = find_duplicate_spans(src, "Hash");
        let (first, second) = (first.unwrap(), second.unwrap());
        assert!(first.offset() < second.offset());
        assert_eq!(&src[second.offset()..second.offset() + 4], "Hash");
    }

    #[test]
    fn test_parse_context_paths() {
        let ctx = ParseContext::new("", "api.toml");
        assert_eq!(ctx.context_for("command"), "command");

        let nested = ctx.push("pin").push("add");
        assert_eq!(nested.path_string(), "pin/add");
        assert_eq!(nested.context_for("option"), "option in 'pin/add'");
    }

    #[test]
    fn test_validate_unique() {
        let ctx = ParseContext::new("", "api.toml").push("AddEvent");
        assert!(ctx.validate_unique(["Name", "Hash"], "field").is_ok());

        let err = ctx.validate_unique(["Name", "Hash", "Name"], "field").unwrap_err();
        assert_eq!(err.to_string(), "duplicate field in 'AddEvent' 'Name'");
    }

    #[test]
    fn test_validate_command_name() {
        let ctx = ParseContext::new("[commands.\"pin/add\"]", "api.toml");
        let err = ctx.validate_command_name("pin/add").unwrap_err();
        assert!(err.to_string().contains("invalid command name 'pin/add'"));
    }
}
