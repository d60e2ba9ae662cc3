use std::path::PathBuf;

use apiref_gen::{Endpoint, compare};
use clap::Args;
use eyre::{Context, Result};

use super::{GenerateArgs, generate, open_manifest};
use crate::reports::{CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to api.toml (defaults to ./api.toml)
    #[arg(short, long, default_value = "api.toml")]
    pub manifest: PathBuf,

    /// Checked-in catalog (JSON) to compare against
    #[arg(short, long)]
    pub expected: PathBuf,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let content = std::fs::read_to_string(&self.expected)
            .wrap_err_with(|| format!("Failed to read {}", self.expected.display()))?;
        let expected: Vec<Endpoint> = serde_json::from_str(&content)
            .wrap_err_with(|| format!("{} is not a valid catalog", self.expected.display()))?;

        let (api_toml, api) = open_manifest(&self.manifest);
        let actual = generate(&api, &self.generate.config(&api_toml.manifest().docs));

        let report = CheckReport {
            expected_path: self.expected.clone(),
            endpoint_count: actual.len(),
            diff: compare(&expected, &actual),
        };
        report.render(&mut TerminalOutput::new());

        if !report.is_clean() {
            std::process::exit(1);
        }
        Ok(())
    }
}
