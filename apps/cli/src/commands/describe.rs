//! `formkit describe`

use std::path::PathBuf;

use clap::Args;

use crate::Outcome;
use crate::input;

#[derive(Debug, Args)]
pub struct DescribeArgs {
    /// Rules file (`.toml` or JSON)
    #[arg(long, short)]
    pub rules: PathBuf,
}

pub fn execute(args: &DescribeArgs) -> anyhow::Result<Outcome> {
    let rules = input::load_rules(&args.rules)?;
    println!("{}", serde_json::to_string_pretty(&rules.describe())?);
    Ok(Outcome::Passed)
}
