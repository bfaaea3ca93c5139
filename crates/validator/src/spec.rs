//! Declarative rule specs for rules files

use serde::{Deserialize, Serialize};

use crate::foundation::RuleError;
use crate::rule::{Rule, RuleKind};
use crate::validators::{Email, Length, Number, Pattern, Required};

/// A declarative rule, as written in a rules file.
///
/// These are pure data: nothing is compiled or checked until
/// [`RuleSpec::build`] turns the spec into a [`Rule`].
///
/// # Examples
///
/// ```
/// use formkit_validator::RuleSpec;
///
/// let spec: RuleSpec = serde_json::from_str(
///     r#"{"kind": "length", "min": 6, "max": 20, "message": "6 to 20 characters"}"#,
/// )?;
/// let rule = spec.build()?;
/// assert_eq!(rule.message(), "6 to 20 characters");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleSpec {
    /// Value must be present.
    Required {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Text must be `min..=max` characters long.
    Length {
        min: usize,
        max: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Text must look like an email address.
    Email {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Value must be a number within the optional inclusive bounds.
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Text must contain a match for the regex.
    Pattern {
        pattern: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl RuleSpec {
    /// Require a value.
    #[must_use]
    pub fn required() -> Self {
        Self::Required { message: None }
    }

    /// Require a text length within `min..=max`.
    #[must_use]
    pub fn length(min: usize, max: usize) -> Self {
        Self::Length {
            min,
            max,
            message: None,
        }
    }

    /// Require an email address.
    #[must_use]
    pub fn email() -> Self {
        Self::Email { message: None }
    }

    /// Require a number within the optional bounds.
    #[must_use]
    pub fn number(min: Option<f64>, max: Option<f64>) -> Self {
        Self::Number {
            min,
            max,
            message: None,
        }
    }

    /// Require a regex match.
    #[must_use]
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: None,
        }
    }

    /// Sets the failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, text: impl Into<String>) -> Self {
        let slot = match &mut self {
            Self::Required { message }
            | Self::Length { message, .. }
            | Self::Email { message }
            | Self::Number { message, .. }
            | Self::Pattern { message, .. } => message,
        };
        *slot = Some(text.into());
        self
    }

    /// The kind of rule this spec builds.
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::Required { .. } => RuleKind::Required,
            Self::Length { .. } => RuleKind::Length,
            Self::Email { .. } => RuleKind::Email,
            Self::Number { .. } => RuleKind::Number,
            Self::Pattern { .. } => RuleKind::Pattern,
        }
    }

    /// Builds the rule.
    ///
    /// # Errors
    ///
    /// - [`RuleError::InvalidPattern`] if a pattern does not compile
    /// - [`RuleError::InvalidBounds`] if `min > max` or a number bound is not
    ///   finite
    pub fn build(&self) -> Result<Rule, RuleError> {
        let message = match self {
            Self::Required { message }
            | Self::Length { message, .. }
            | Self::Email { message }
            | Self::Number { message, .. }
            | Self::Pattern { message, .. } => message.clone().unwrap_or_default(),
        };

        let rule: Rule = match self {
            Self::Required { .. } => Required::new().with_message(message).into(),
            Self::Length { min, max, .. } => Length::try_new(*min, *max)?.with_message(message).into(),
            Self::Email { .. } => Email::new().with_message(message).into(),
            Self::Number { min, max, .. } => Number::try_new(*min, *max)?.with_message(message).into(),
            Self::Pattern { pattern, .. } => Pattern::new(pattern)?.with_message(message).into(),
        };
        Ok(rule)
    }
}

impl TryFrom<RuleSpec> for Rule {
    type Error = RuleError;

    fn try_from(spec: RuleSpec) -> Result<Self, Self::Error> {
        spec.build()
    }
}

impl TryFrom<&RuleSpec> for Rule {
    type Error = RuleError;

    fn try_from(spec: &RuleSpec) -> Result<Self, Self::Error> {
        spec.build()
    }
}

impl From<&Rule> for RuleSpec {
    fn from(rule: &Rule) -> Self {
        rule.spec()
    }
}
