use std::path::PathBuf;

use apiref_core::TypeRef;
use apiref_gen::Describer;
use clap::Args;
use eyre::Result;

use super::{GenerateArgs, UnwrapOrExit, open_manifest};
use crate::reports::{Report, TerminalOutput, TypeEntry, TypesReport};

#[derive(Args)]
pub struct TypesCommand {
    /// Path to api.toml (defaults to ./api.toml)
    #[arg(short, long, default_value = "api.toml")]
    pub manifest: PathBuf,
}

impl TypesCommand {
    pub fn run(&self) -> Result<()> {
        let (api_toml, api) = open_manifest(&self.manifest);
        let config = GenerateArgs::default().config(&api_toml.manifest().docs);
        let describer = Describer::for_api(&api, &config);

        let describe = |name: &str| TypeEntry {
            name: name.to_string(),
            schema: describer.describe(&TypeRef::named(name)).unwrap_or_exit(),
        };

        let report = TypesReport {
            overrides: api.glossary.iter().map(|(id, _)| describe(id)).collect(),
            records: api.types.iter().map(|r| describe(&r.name)).collect(),
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
