//! Core traits for the validation system

use crate::foundation::{FieldValue, ValidationError};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validator implements.
///
/// Validators are pure predicates: `validate` takes `&self`, touches no
/// shared state, and returns the same answer for the same input every time.
///
/// # Examples
///
/// ```
/// use formkit_validator::foundation::{FieldValue, Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
///         match value.as_text() {
///             Some(s) if s.contains(' ') => Err(ValidationError::new("no spaces allowed")),
///             _ => Ok(()),
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate(&"a b".into()).is_err());
/// assert!(NoSpaces.check("ab").is_ok());
/// ```
pub trait Validate {
    /// Validates the candidate value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the value is accepted
    /// * `Err(ValidationError)` carrying the message to show the user
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError>;

    /// Converts `value` into a [`FieldValue`] and validates it.
    fn check<T>(&self, value: T) -> Result<(), ValidationError>
    where
        Self: Sized,
        T: Into<FieldValue>,
    {
        self.validate(&value.into())
    }

    /// Returns `true` if the value is accepted.
    fn is_valid(&self, value: &FieldValue) -> bool {
        self.validate(value).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        (**self).validate(value)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        (**self).validate(value)
    }
}
