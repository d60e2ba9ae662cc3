//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::Manifest;
use crate::{Error, Result, error::SourceContext, validate::ParseContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "api.toml")
    }
}

impl Manifest {
    /// Parse an api.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse manifest content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    let prefix = &manifest.docs.prefix;
    if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
        return Err(ctx.error(
            format!(
                "prefix '{}' must be empty or start with '/' and not end with '/'",
                prefix
            ),
            None,
        ));
    }
    if manifest.docs.indent == Some(0) {
        return Err(ctx.error("indent must be at least 1", None));
    }

    for (type_id, entry) in &manifest.glossary {
        entry.validate(type_id, &ctx.push(type_id))?;
    }

    for (name, def) in &manifest.types {
        def.validate(&ctx.push(name))?;
    }

    for (name, command) in &manifest.commands {
        ctx.validate_command_name(name)?;
        command.validate(&ctx.push(name))?;
    }
    Ok(())
}
