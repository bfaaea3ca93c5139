//! # formkit-log
//!
//! Subscriber set-up for the formkit tools.
//!
//! ```no_run
//! use formkit_log::{Config, init};
//!
//! init(&Config::from_env())?;
//! tracing::info!("ready");
//! # Ok::<(), formkit_log::LogError>(())
//! ```

pub mod builder;
pub mod config;
pub mod core;

pub use builder::LoggerBuilder;
pub use config::{Config, Format};
pub use self::core::{LogError, LogResult};

/// Installs the global subscriber described by `config`.
///
/// # Errors
///
/// Returns [`LogError::Filter`] for a malformed filter and
/// [`LogError::Init`] if a subscriber is already installed.
pub fn init(config: &Config) -> LogResult<()> {
    LoggerBuilder::from_config(config.clone()).build()
}

/// Installs the development preset.
///
/// # Errors
///
/// See [`init`].
pub fn init_dev() -> LogResult<()> {
    init(&Config::development())
}
