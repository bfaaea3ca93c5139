//! Logger builder implementation

// External dependencies
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Internal crates
use crate::config::{Config, Format};
use crate::core::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Parses the configured filter directive.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if the directive is malformed.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {e}", self.config.level)))
    }

    /// Build and install the global subscriber. Logs go to stderr so that
    /// command output on stdout stays machine-readable.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<()> {
        let filter = self.filter()?;
        let registry = Registry::default().with(filter);
        let ansi = self.config.ansi;
        let target = self.config.target;

        let result = match self.config.format {
            Format::Pretty => registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_ansi(ansi)
                        .with_target(target)
                        .with_writer(std::io::stderr),
                )
                .try_init(),
            Format::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_ansi(ansi)
                        .with_target(target)
                        .with_writer(std::io::stderr),
                )
                .try_init(),
            Format::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(target)
                        .with_writer(std::io::stderr),
                )
                .try_init(),
        };

        result.map_err(|e| LogError::Init(e.to_string()))
    }
}
