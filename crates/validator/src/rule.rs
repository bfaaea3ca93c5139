//! The closed set of field rules
//!
//! [`Rule`] wraps the five built-in validators in a single enum so a chain
//! can hold them by value, match on them exhaustively, and describe them for
//! the form layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::description::RuleDescription;
use crate::foundation::{FieldValue, Validate, ValidationError};
use crate::spec::RuleSpec;
use crate::validators::{Email, Length, Number, Pattern, Required};

// ============================================================================
// RULE KIND
// ============================================================================

/// Discriminator naming which rule variant an instance is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Required,
    Length,
    Email,
    Number,
    Pattern,
}

impl RuleKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Required,
        Self::Length,
        Self::Email,
        Self::Number,
        Self::Pattern,
    ];

    /// The lowercase name used in descriptions and config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Length => "length",
            Self::Email => "email",
            Self::Number => "number",
            Self::Pattern => "pattern",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A single field rule.
///
/// Rules are immutable once built. Use the validator structs' builders (or
/// [`RuleSpec::build`]) to construct one, then convert with `into()`.
///
/// # Examples
///
/// ```
/// use formkit_validator::foundation::Validate;
/// use formkit_validator::validators::Length;
/// use formkit_validator::{Rule, RuleKind};
///
/// let rule: Rule = Length::new(2, 8).with_message("2 to 8 characters").into();
/// assert_eq!(rule.kind(), RuleKind::Length);
/// assert_eq!(rule.message(), "2 to 8 characters");
/// assert!(rule.check("abc").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required(Required),
    Length(Length),
    Email(Email),
    Number(Number),
    Pattern(Pattern),
}

impl Rule {
    /// Which variant this rule is.
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::Required(_) => RuleKind::Required,
            Self::Length(_) => RuleKind::Length,
            Self::Email(_) => RuleKind::Email,
            Self::Number(_) => RuleKind::Number,
            Self::Pattern(_) => RuleKind::Pattern,
        }
    }

    /// The message reported when this rule rejects a value.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Required(v) => v.message(),
            Self::Length(v) => v.message(),
            Self::Email(v) => v.message(),
            Self::Number(v) => v.message(),
            Self::Pattern(v) => v.message(),
        }
    }

    /// Flat key/value description: `kind`, `message`, then the variant's
    /// parameters. Unset number bounds are omitted.
    #[must_use]
    pub fn describe(&self) -> RuleDescription {
        let mut description = RuleDescription::new(self.kind(), self.message());
        match self {
            Self::Required(_) | Self::Email(_) => {}
            Self::Length(v) => {
                description.insert("min", v.min());
                description.insert("max", v.max());
            }
            Self::Number(v) => {
                if let Some(min) = v.min() {
                    description.insert("min", min);
                }
                if let Some(max) = v.max() {
                    description.insert("max", max);
                }
            }
            Self::Pattern(v) => {
                description.insert("pattern", v.source());
            }
        }
        description
    }

    /// Declarative form of this rule. The message is always spelled out.
    #[must_use]
    pub fn spec(&self) -> RuleSpec {
        let message = Some(self.message().to_owned());
        match self {
            Self::Required(_) => RuleSpec::Required { message },
            Self::Length(v) => RuleSpec::Length {
                min: v.min(),
                max: v.max(),
                message,
            },
            Self::Email(_) => RuleSpec::Email { message },
            Self::Number(v) => RuleSpec::Number {
                min: v.min(),
                max: v.max(),
                message,
            },
            Self::Pattern(v) => RuleSpec::Pattern {
                pattern: v.source().to_owned(),
                message,
            },
        }
    }
}

impl Validate for Rule {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        match self {
            Self::Required(v) => v.validate(value),
            Self::Length(v) => v.validate(value),
            Self::Email(v) => v.validate(value),
            Self::Number(v) => v.validate(value),
            Self::Pattern(v) => v.validate(value),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(_) | Self::Email(_) => write!(f, "{}", self.kind()),
            Self::Length(v) => write!(f, "length({}..={})", v.min(), v.max()),
            Self::Number(v) => match (v.min(), v.max()) {
                (Some(min), Some(max)) => write!(f, "number({min}..={max})"),
                (Some(min), None) => write!(f, "number({min}..)"),
                (None, Some(max)) => write!(f, "number(..={max})"),
                (None, None) => f.write_str("number"),
            },
            Self::Pattern(v) => write!(f, "pattern(/{}/)", v.source()),
        }
    }
}

impl Serialize for Rule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.describe().serialize(serializer)
    }
}

macro_rules! rule_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Rule {
                fn from(validator: $variant) -> Self {
                    Self::$variant(validator)
                }
            }
        )*
    };
}

rule_from!(Required, Length, Email, Number, Pattern);
