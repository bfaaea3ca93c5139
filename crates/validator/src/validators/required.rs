//! Presence validator
//!
//! [`Required`] is the only validator that rejects absent input. Every other
//! validator treats an absent value (and empty text) as valid and leaves
//! presence to this one, so a field is optional unless a chain starts with
//! `Required`.

use std::borrow::Cow;

use crate::foundation::{FieldValue, Validate, ValidationError};

/// Default message for [`Required`].
pub const REQUIRED_MESSAGE: &str = "this field is required";

/// Validates that a value is present and not the zero-equivalent of its type.
///
/// Rejects: absent values, blank text (empty or whitespace only), `false`,
/// numeric zero, empty lists and empty maps.
///
/// # Examples
///
/// ```
/// use formkit_validator::foundation::Validate;
/// use formkit_validator::validators::Required;
///
/// let validator = Required::new();
/// assert!(validator.check("alice").is_ok());
/// assert!(validator.check("   ").is_err());
/// assert!(validator.check(None::<String>).is_err());
/// assert!(validator.check(false).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Required {
    message: Cow<'static, str>,
}

impl Required {
    /// Creates a `Required` validator with the default message.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: Cow::Borrowed(REQUIRED_MESSAGE),
        }
    }

    /// Replaces the failure message. An empty message keeps the default.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        if let Some(message) = super::custom_message(message) {
            self.message = message;
        }
        self
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Required {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        if value.is_zero() {
            Err(ValidationError::new(self.message.clone()))
        } else {
            Ok(())
        }
    }
}

/// Creates a [`Required`] validator with the default message.
#[must_use]
pub const fn required() -> Required {
    Required::new()
}
