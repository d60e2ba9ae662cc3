mod check;
mod endpoints;
mod types;

use std::path::Path;

use apiref_core::Api;
use apiref_gen::{Config, DescribeError, Endpoint, FailurePolicy};
use apiref_manifest::{ApiToml, DocsSettings};
use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use endpoints::EndpointsCommand;
use types::TypesCommand;

/// Extension trait for exiting on manifest and generation errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for apiref_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for apiref_gen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for Result<T, DescribeError> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "apiref")]
#[command(version)]
#[command(about = "Generate endpoint catalogs from RPC command definitions")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> eyre::Result<()> {
        match &self.command {
            Commands::Endpoints(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Types(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the endpoint catalog
    Endpoints(EndpointsCommand),

    /// Compare the generated catalog against a checked-in copy
    Check(CheckCommand),

    /// List glossary overrides and record types with their schemas
    Types(TypesCommand),
}

/// Generation flags shared by `endpoints` and `check`.
#[derive(Args, Debug, Default)]
pub(crate) struct GenerateArgs {
    /// Suppress the endpoint with this exact name (repeatable)
    #[arg(long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Nesting depth at which response schemas are cut off
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Drop endpoints whose response cannot be described instead of failing
    #[arg(long)]
    pub skip_failures: bool,
}

impl GenerateArgs {
    /// Merge manifest `[docs]` settings with command-line overrides.
    pub fn config(&self, docs: &DocsSettings) -> Config {
        let mut config = Config::new()
            .ignore_all(docs.ignore.iter().cloned())
            .ignore_all(self.ignore.iter().cloned());
        if let Some(indent) = docs.indent() {
            config = config.indent(indent);
        }
        if let Some(max_depth) = self.max_depth.or(docs.max_depth) {
            config = config.max_depth(max_depth);
        }
        if self.skip_failures {
            config = config.on_error(FailurePolicy::SkipEndpoint);
        }
        config
    }
}

/// Open the manifest, exiting with a diagnostic if it is invalid.
pub(crate) fn open_manifest(path: &Path) -> (ApiToml, Api) {
    let api_toml = ApiToml::open(path).unwrap_or_exit();
    let api = api_toml.manifest().to_api();
    tracing::debug!(
        path = %api_toml.path().display(),
        commands = api.root.subcommands.len(),
        records = api.types.len(),
        "loaded manifest"
    );
    (api_toml, api)
}

/// Generate the catalog for `api`.
pub(crate) fn generate(api: &Api, config: &Config) -> Vec<Endpoint> {
    apiref_gen::all_endpoints(api, config).unwrap_or_exit()
}

#[cfg(test)]
mod tests {
    use apiref_core::Indent;

    use super::*;

    #[test]
    fn test_cli_overrides_manifest_settings() {
        let docs = DocsSettings {
            ignore: vec!["/api/v1/debug".into()],
            indent: Some(2),
            max_depth: Some(8),
            ..DocsSettings::default()
        };
        let args = GenerateArgs {
            ignore: vec!["/api/v1/log".into()],
            max_depth: Some(3),
            skip_failures: true,
        };

        let config = args.config(&docs);
        assert!(config.is_ignored("/api/v1/debug"));
        assert!(config.is_ignored("/api/v1/log"));
        assert_eq!(config.indent, Indent::Spaces(2));
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.on_error, FailurePolicy::SkipEndpoint);
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = GenerateArgs::default().config(&DocsSettings::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "apiref",
            "endpoints",
            "--format",
            "markdown",
            "--ignore",
            "/api/v1/a",
            "--ignore",
            "/api/v1/b",
            "--max-depth",
            "4",
        ])
        .unwrap();
        let Commands::Endpoints(cmd) = cli.command else {
            panic!("expected the endpoints command");
        };
        assert_eq!(cmd.generate.ignore, ["/api/v1/a", "/api/v1/b"]);
        assert_eq!(cmd.generate.max_depth, Some(4));
        assert_eq!(cmd.manifest, std::path::PathBuf::from("api.toml"));
    }
}
