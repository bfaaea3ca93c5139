//! Built-in validators
//!
//! The five field validators a form can attach. Each is a plain struct that
//! implements [`Validate`](crate::foundation::Validate); [`Rule`](crate::Rule)
//! wraps them in a closed enum for use in a chain.
//!
//! # Categories
//!
//! - **Presence**: [`Required`]
//! - **Text**: [`Length`], [`Email`], [`Pattern`]
//! - **Numeric**: [`Number`]
//!
//! Only [`Required`] rejects absent input. The others accept absent values
//! and empty text so that optional fields stay optional.
//!
//! # Examples
//!
//! ```
//! use formkit_validator::foundation::Validate;
//! use formkit_validator::validators::{email, length, number};
//!
//! assert!(length(3, 20).check("alice").is_ok());
//! assert!(email().check("alice@example.com").is_ok());
//! assert!(number(Some(0.0), None).check("42").is_ok());
//! ```

use std::borrow::Cow;

pub mod content;
pub mod length;
pub mod number;
pub mod required;

pub use content::{EMAIL_MESSAGE, EMAIL_PATTERN, Email, PATTERN_MESSAGE, Pattern, email, pattern};
pub use length::{Length, length};
pub use number::{NUMBER_MESSAGE, Number, number};
pub use required::{REQUIRED_MESSAGE, Required, required};

/// Turns a caller-supplied message into an override, treating empty text as
/// "use the default".
fn custom_message(message: impl Into<String>) -> Option<Cow<'static, str>> {
    let message = message.into();
    (!message.is_empty()).then_some(Cow::Owned(message))
}
