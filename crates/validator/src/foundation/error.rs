//! Error types
//!
//! Two failure classes exist and they never mix:
//!
//! - [`RuleError`] is returned while *building* a rule (bad regex, inverted
//!   bounds). It describes a configuration problem.
//! - [`ValidationError`] is returned while *checking* a value. It carries the
//!   user-facing message and nothing else.

use std::borrow::Cow;

use crate::rule::RuleKind;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A rejected value.
///
/// The message is the whole contract: it is what the form shows next to the
/// field. `Display` prints it verbatim.
///
/// Uses `Cow<'static, str>` so default messages cost no allocation.
///
/// # Examples
///
/// ```
/// use formkit_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("this field is required");
/// assert_eq!(error.to_string(), "this field is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: Cow<'static, str>,
}

impl ValidationError {
    /// Creates an error carrying `message`.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Creates a "wrong kind of value" error.
    pub fn type_mismatch(expected: &str, actual: impl std::fmt::Display) -> Self {
        Self::new(format!("expected {expected}, got {actual}"))
    }

    /// The user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error and returns the message.
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.message
    }
}

impl From<ValidationError> for String {
    fn from(error: ValidationError) -> Self {
        error.message.into_owned()
    }
}

// ============================================================================
// RULE ERROR
// ============================================================================

/// A rule could not be built from its configuration.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// The pattern source is not a valid regular expression.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The configured bounds cannot be satisfied by any value.
    #[error("invalid bounds for {kind} rule: {reason}")]
    InvalidBounds { kind: RuleKind, reason: String },
}

impl RuleError {
    /// The kind of rule whose construction failed.
    #[must_use]
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::InvalidPattern { .. } => RuleKind::Pattern,
            Self::InvalidBounds { kind, .. } => *kind,
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => "RULE_INVALID_PATTERN",
            Self::InvalidBounds { .. } => "RULE_INVALID_BOUNDS",
        }
    }
}
