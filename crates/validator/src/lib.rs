//! # formkit-validator
//!
//! Composable field validators for declarative web forms.
//!
//! ## Quick Start
//!
//! ```rust
//! use formkit_validator::prelude::*;
//!
//! let username = ValidatorChain::new()
//!     .required(Some("enter a username"))
//!     .length(6, 20, None);
//!
//! assert!(username.check("alice_w").is_ok());
//! assert_eq!(username.check("").unwrap_err().message(), "enter a username");
//! assert_eq!(username.check("用户名").unwrap_err().message(), "length must be between 6 and 20");
//! ```
//!
//! ## Built-in Rules
//!
//! - [`Required`](validators::Required): value present and not blank, zero, `false` or empty
//! - [`Length`](validators::Length): text length in characters within `min..=max`
//! - [`Email`](validators::Email): email address format
//! - [`Number`](validators::Number): number (or numeric text) within optional bounds
//! - [`Pattern`](validators::Pattern): text contains a match for a regex
//!
//! Rules compose into a [`ValidatorChain`] that reports only the first
//! failure. [`FieldRules`] groups chains by field name for a whole form, and
//! [`RuleSpec`] is the serialisable form used in rules files.

pub mod chain;
pub mod description;
pub mod form;
pub mod foundation;
pub mod prelude;
pub mod rule;
pub mod spec;
pub mod validators;

pub use chain::ValidatorChain;
pub use description::RuleDescription;
pub use form::{FieldErrors, FieldRules};
pub use rule::{Rule, RuleKind};
pub use spec::RuleSpec;
