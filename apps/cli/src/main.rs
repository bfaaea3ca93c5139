//! formkit CLI - check form submissions against declarative rule files
//!
//! Exit codes:
//! - `0` every field passed
//! - `1` at least one field failed validation
//! - `2` the rules, values or settings could not be loaded

use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod input;
mod output;

use config::{GlobalArgs, Settings};

/// Validate form values against field rules
#[derive(Parser)]
#[command(name = "formkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON object of values against a rules file
    Check(commands::check::CheckArgs),

    /// Print the normalised rule descriptions as JSON
    Describe(commands::describe::DescribeArgs),
}

/// How a command finished when it did not hit an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Passed => Self::SUCCESS,
            Outcome::Failed => Self::from(1),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let settings = Settings::load(&cli.global)?;
    formkit_log::init(&settings.log)?;
    if let Some(filter) = &settings.ignored_filter {
        tracing::warn!(%filter, "ignoring malformed log filter from the environment");
    }
    tracing::debug!(?settings, "settings loaded");

    match cli.command {
        Commands::Check(args) => commands::check::execute(&args, &settings),
        Commands::Describe(args) => commands::describe::execute(&args),
    }
}
