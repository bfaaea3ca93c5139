//! Prelude module for convenient imports.
//!
//! Provides a single `use formkit_validator::prelude::*;` import that brings
//! in the trait, value and error types, rules, chains, and the validator
//! factory functions.
//!
//! # Examples
//!
//! ```rust
//! use formkit_validator::prelude::*;
//!
//! let rule: Rule = length(3, 20).into();
//! let chain = ValidatorChain::new().add(required()).add(rule).add(email());
//! assert_eq!(chain.len(), 3);
//! assert_eq!(chain.check("").unwrap_err().message(), REQUIRED_MESSAGE);
//! ```

// ============================================================================
// FOUNDATION: Core trait, values, errors
// ============================================================================

pub use crate::foundation::{
    FieldValue, RuleError, Validate, ValidationError, ValidationResult, ValueType,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    EMAIL_MESSAGE, Email, Length, NUMBER_MESSAGE, Number, PATTERN_MESSAGE, Pattern,
    REQUIRED_MESSAGE, Required, email, length, number, pattern, required,
};

// ============================================================================
// COMPOSITION: Rules, chains, forms
// ============================================================================

pub use crate::{
    FieldErrors, FieldRules, Rule, RuleDescription, RuleKind, RuleSpec, ValidatorChain,
};
