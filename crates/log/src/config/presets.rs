//! Configuration presets for common scenarios

use super::{Config, Format};

impl Config {
    /// Create configuration from environment variables.
    ///
    /// Reads the filter from `FORMKIT_LOG`, falling back to `RUST_LOG`, and
    /// the format from `FORMKIT_LOG_FORMAT`. Unknown formats keep the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup("FORMKIT_LOG").or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup("FORMKIT_LOG_FORMAT") {
            config.format = format.parse().unwrap_or_default();
        }

        config
    }

    /// Development configuration (pretty, debug level, colours).
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_owned(),
            format: Format::Pretty,
            ansi: true,
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level).
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_owned(),
            format: Format::Json,
            ansi: false,
            ..Self::default()
        }
    }
}
