use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Error, Result};

/// An api.toml file with both raw content and parsed manifest.
pub struct ApiToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ApiToml {
    /// Open and parse an api.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_open_reads_and_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[commands.version]\ntagline = \"Show version\"\n").unwrap();

        let api_toml = ApiToml::open(file.path()).unwrap();
        assert_eq!(api_toml.path(), file.path());
        assert!(api_toml.content().contains("[commands.version]"));
        assert!(api_toml.manifest().has_command("version"));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ApiToml::open(dir.path().join("api.toml")).err().unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[commands.add]\nresponse = 3\n").unwrap();

        let err = ApiToml::open(file.path()).err().unwrap();
        let Error::Parse { src, .. } = *err else {
            panic!("expected a parse error");
        };
        assert_eq!(src.name(), file.path().display().to_string());
    }
}
