//! Layered CLI settings: defaults, then `formkit.toml`, then `FORMKIT_`
//! environment variables, then command-line flags.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Settings file; a missing file is ignored
    #[arg(long, global = true, env = "FORMKIT_CONFIG", default_value = "formkit.toml")]
    pub config: PathBuf,

    /// Log filter directive, e.g. `debug` or `warn,formkit_validator=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log line format: pretty, compact or json
    #[arg(long, global = true)]
    pub log_format: Option<formkit_log::Format>,

    /// Result format on stdout
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,
}

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default)]
    pub log: formkit_log::Config,
    /// Malformed filter found in the environment and replaced by the default.
    #[serde(skip)]
    pub ignored_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            log: formkit_log::Config {
                level: "warn".to_owned(),
                ..formkit_log::Config::default()
            },
            ignored_filter: None,
        }
    }
}

impl Settings {
    /// Loads settings for `args` from the process environment.
    pub fn load(args: &GlobalArgs) -> anyhow::Result<Self> {
        Self::load_with(args, |key| std::env::var(key).ok())
    }

    /// Loads settings for `args`, reading log variables through `lookup`.
    pub fn load_with(
        args: &GlobalArgs,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let defaults = Self::default().with_log_env(&lookup);
        let ignored_filter = defaults.ignored_filter.clone();

        let mut settings: Self = Figment::from(Serialized::defaults(defaults))
            .merge(Toml::file(&args.config))
            .merge(Env::prefixed("FORMKIT_").only(&["output"]))
            .extract()
            .with_context(|| format!("failed to load settings from {}", args.config.display()))?;
        settings.ignored_filter = ignored_filter;

        if let Some(level) = &args.log_level {
            settings.log.level.clone_from(level);
        }
        if let Some(format) = args.log_format {
            settings.log.format = format;
        }
        if let Some(output) = args.output {
            settings.output = output;
        }

        Ok(settings)
    }

    /// Applies `FORMKIT_LOG`/`RUST_LOG` and `FORMKIT_LOG_FORMAT`. Without a
    /// filter variable the level stays quiet; a malformed one is set aside
    /// so a stray `RUST_LOG` cannot stop the tool.
    fn with_log_env(mut self, lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let from_env = formkit_log::Config::from_lookup(lookup);
        self.log.format = from_env.format;

        if lookup("FORMKIT_LOG").or_else(|| lookup("RUST_LOG")).is_some() {
            let candidate = formkit_log::Config {
                level: from_env.level.clone(),
                ..self.log.clone()
            };
            if formkit_log::LoggerBuilder::from_config(candidate).filter().is_ok() {
                self.log.level = from_env.level;
            } else {
                self.ignored_filter = Some(from_env.level);
            }
        }
        self
    }
}
