//! `formkit check`

use std::path::PathBuf;

use clap::Args;

use crate::Outcome;
use crate::config::Settings;
use crate::{input, output};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Rules file (`.toml` or JSON)
    #[arg(long, short)]
    pub rules: PathBuf,

    /// JSON object of field values; `-` reads stdin
    #[arg(long, short, default_value = "-")]
    pub values: PathBuf,
}

pub fn execute(args: &CheckArgs, settings: &Settings) -> anyhow::Result<Outcome> {
    let rules = input::load_rules(&args.rules)?;
    let values = input::load_values(&args.values)?;

    let result = rules.validate_json(&values);
    println!("{}", output::render_check(settings.output, &result)?);

    match result {
        Ok(()) => Ok(Outcome::Passed),
        Err(errors) => {
            tracing::info!(failed = errors.len(), "validation failed");
            Ok(Outcome::Failed)
        }
    }
}
