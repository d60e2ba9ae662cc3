use std::path::PathBuf;

use apiref_gen::render;
use clap::{Args, ValueEnum};
use eyre::{Context, Result};

use super::{GenerateArgs, generate, open_manifest};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The catalog as a JSON array
    #[default]
    Json,
    /// An API reference document
    Markdown,
    /// One signature line per endpoint
    List,
}

#[derive(Args)]
pub struct EndpointsCommand {
    /// Path to api.toml (defaults to ./api.toml)
    #[arg(short, long, default_value = "api.toml")]
    pub manifest: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl EndpointsCommand {
    pub fn run(&self) -> Result<()> {
        let (api_toml, api) = open_manifest(&self.manifest);
        let docs = &api_toml.manifest().docs;
        let endpoints = generate(&api, &self.generate.config(docs));

        let output = match self.format {
            Format::Json => serde_json::to_string_pretty(&endpoints)
                .wrap_err("Failed to serialize the catalog")?,
            Format::Markdown => render::markdown(&endpoints, &docs.title),
            Format::List => render::listing(&endpoints),
        };
        println!("{}", output.trim_end());

        Ok(())
    }
}
