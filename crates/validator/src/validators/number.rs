//! Numeric range validator
//!
//! Form inputs often deliver numbers as text, so [`Number`] accepts both a
//! [`FieldValue::Number`] and text that parses as a float.

use std::borrow::Cow;

use crate::foundation::{FieldValue, RuleError, Validate, ValidationError};
use crate::rule::RuleKind;

/// Message used when no bound is configured.
pub const NUMBER_MESSAGE: &str = "enter a valid number";

/// Validates that a value is a number within optional inclusive bounds.
///
/// Either bound may be `None`, leaving that side open. Absent values and
/// empty text are accepted. Text that does not parse as a number, or parses
/// to NaN, is rejected with a parse-error message.
///
/// # Examples
///
/// ```
/// use formkit_validator::foundation::Validate;
/// use formkit_validator::validators::Number;
///
/// let age = Number::new(Some(18.0), Some(120.0));
/// assert!(age.check("18").is_ok());
/// assert!(age.check(121).is_err());
/// assert_eq!(age.check("abc").unwrap_err().message(), "`abc` is not a valid number");
/// assert!(age.check("").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    min: Option<f64>,
    max: Option<f64>,
    message: Cow<'static, str>,
}

impl Number {
    /// Creates a number validator with a message derived from the bounds.
    ///
    /// # Panics
    ///
    /// Panics if a bound is not finite or `min > max`. Use
    /// [`Number::try_new`] for bounds that come from configuration.
    #[must_use]
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        match Self::try_new(min, max) {
            Ok(validator) => validator,
            Err(error) => panic!("{error}"),
        }
    }

    /// Like [`Number::new`], but rejects non-finite bounds and `min > max`
    /// with [`RuleError::InvalidBounds`].
    pub fn try_new(min: Option<f64>, max: Option<f64>) -> Result<Self, RuleError> {
        let invalid = |reason: String| RuleError::InvalidBounds {
            kind: RuleKind::Number,
            reason,
        };
        for bound in [min, max].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(invalid(format!("bound {bound} is not finite")));
            }
        }
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(invalid(format!("min {lo} is greater than max {hi}")));
            }
        }
        Ok(Self {
            min,
            max,
            message: default_message(min, max),
        })
    }

    /// Replaces the failure message. An empty message keeps the default.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        if let Some(message) = super::custom_message(message) {
            self.message = message;
        }
        self
    }

    /// Inclusive lower bound, if any.
    #[must_use]
    pub const fn min(&self) -> Option<f64> {
        self.min
    }

    /// Inclusive upper bound, if any.
    #[must_use]
    pub const fn max(&self) -> Option<f64> {
        self.max
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn in_bounds(&self, n: f64) -> bool {
        self.min.is_none_or(|min| n >= min) && self.max.is_none_or(|max| n <= max)
    }
}

fn default_message(min: Option<f64>, max: Option<f64>) -> Cow<'static, str> {
    match (min, max) {
        (Some(min), Some(max)) => Cow::Owned(format!("must be between {min} and {max}")),
        (Some(min), None) => Cow::Owned(format!("must be ≥ {min}")),
        (None, Some(max)) => Cow::Owned(format!("must be ≤ {max}")),
        (None, None) => Cow::Borrowed(NUMBER_MESSAGE),
    }
}

fn parse_number(text: &str) -> Result<f64, ValidationError> {
    match text.parse::<f64>() {
        Ok(n) if !n.is_nan() => Ok(n),
        _ => Err(ValidationError::new(format!("`{text}` is not a valid number"))),
    }
}

impl Validate for Number {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        let n = match value {
            FieldValue::Absent => return Ok(()),
            FieldValue::Text(text) if text.is_empty() => return Ok(()),
            FieldValue::Text(text) => parse_number(text)?,
            FieldValue::Number(n) if n.is_nan() => {
                return Err(ValidationError::new(self.message.clone()));
            }
            FieldValue::Number(n) => *n,
            other => {
                return Err(ValidationError::type_mismatch(
                    "number or numeric text",
                    other.value_type(),
                ));
            }
        };

        if self.in_bounds(n) {
            Ok(())
        } else {
            Err(ValidationError::new(self.message.clone()))
        }
    }
}

/// Creates a [`Number`] validator with a message derived from the bounds.
///
/// # Panics
///
/// Panics on bounds [`Number::try_new`] rejects.
#[must_use]
pub fn number(min: Option<f64>, max: Option<f64>) -> Number {
    Number::new(min, max)
}
