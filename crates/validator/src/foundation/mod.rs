//! Core validation types and traits
//!
//! This module contains the building blocks every validator shares:
//!
//! - **Values**: [`FieldValue`], the closed set of shapes form input takes
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`] for rejected values, [`RuleError`] for
//!   rules that could not be built
//!
//! # Examples
//!
//! ```
//! use formkit_validator::foundation::{FieldValue, Validate};
//! use formkit_validator::validators::Length;
//!
//! let validator = Length::new(3, 20);
//! assert!(validator.check("alice").is_ok());
//! assert!(validator.validate(&FieldValue::from("al")).is_err());
//! ```

pub mod error;
pub mod traits;
pub mod value;

pub use error::{RuleError, ValidationError};
pub use traits::Validate;
pub use value::{FieldValue, ValueType};

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;
