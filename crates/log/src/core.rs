//! Logging errors

/// Errors raised while setting up logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter `{0}`")]
    Filter(String),

    /// An unknown output format was requested.
    #[error("unknown log format `{0}` (expected pretty, compact or json)")]
    Format(String),

    /// A global subscriber is already installed.
    #[error("logger already initialised: {0}")]
    Init(String),
}

/// Result alias for logging set-up.
pub type LogResult<T> = Result<T, LogError>;
