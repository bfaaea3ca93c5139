//! Text length validator
//!
//! Length is measured in Unicode scalar values (chars), not bytes, so
//! "用户名" is three characters long, not nine.

use std::borrow::Cow;

use crate::foundation::{FieldValue, RuleError, Validate, ValidationError};
use crate::rule::RuleKind;

/// Validates that text length lies within `[min, max]`, inclusive.
///
/// Absent values and empty text are accepted; pair with
/// [`Required`](super::Required) to reject them. Non-text values are rejected
/// with a type-mismatch message.
///
/// # Examples
///
/// ```
/// use formkit_validator::foundation::Validate;
/// use formkit_validator::validators::Length;
///
/// let validator = Length::new(6, 20);
/// assert!(validator.check("abcdef").is_ok());
/// assert!(validator.check("用户名").is_err());
/// assert!(validator.check("").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Length {
    min: usize,
    max: usize,
    message: Cow<'static, str>,
}

impl Length {
    /// Creates a length validator with the default message.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`. Use [`Length::try_new`] for bounds that come
    /// from configuration.
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        match Self::try_new(min, max) {
            Ok(validator) => validator,
            Err(error) => panic!("{error}"),
        }
    }

    /// Like [`Length::new`], but rejects `min > max` with
    /// [`RuleError::InvalidBounds`].
    pub fn try_new(min: usize, max: usize) -> Result<Self, RuleError> {
        if min > max {
            return Err(RuleError::InvalidBounds {
                kind: RuleKind::Length,
                reason: format!("min {min} is greater than max {max}"),
            });
        }
        Ok(Self {
            min,
            max,
            message: Cow::Owned(default_message(min, max)),
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

    /// Smallest accepted length.
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Largest accepted length.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn default_message(min: usize, max: usize) -> String {
    format!("length must be between {min} and {max}")
}

impl Validate for Length {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        let text = match value {
            FieldValue::Absent => return Ok(()),
            FieldValue::Text(text) => text,
            other => return Err(ValidationError::type_mismatch("text", other.value_type())),
        };
        if text.is_empty() {
            return Ok(());
        }

        let count = text.chars().count();
        if (self.min..=self.max).contains(&count) {
            Ok(())
        } else {
            Err(ValidationError::new(self.message.clone()))
        }
    }
}

/// Creates a [`Length`] validator with the default message.
///
/// # Panics
///
/// Panics if `min > max`.
#[must_use]
pub fn length(min: usize, max: usize) -> Length {
    Length::new(min, max)
}
