//! String content validators
//!
//! Validators that check text against a regular expression: the fixed
//! [`Email`] format and the user-supplied [`Pattern`].

use std::borrow::Cow;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{FieldValue, RuleError, Validate, ValidationError};

/// Default message for [`Email`].
pub const EMAIL_MESSAGE: &str = "enter a valid email address";

/// Default message for [`Pattern`].
pub const PATTERN_MESSAGE: &str = "invalid format";

/// Source of the email regex: local part, `@`, dotted domain, and an
/// alphabetic top-level segment of at least two letters.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Extracts non-empty text, or decides the outcome early.
///
/// `Ok(None)` means "nothing to check": absent input or empty text.
fn present_text(value: &FieldValue) -> Result<Option<&str>, ValidationError> {
    match value {
        FieldValue::Absent => Ok(None),
        FieldValue::Text(text) if text.is_empty() => Ok(None),
        FieldValue::Text(text) => Ok(Some(text)),
        other => Err(ValidationError::type_mismatch("text", other.value_type())),
    }
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

/// Validates email address format.
///
/// Absent values and empty text are accepted.
///
/// # Examples
///
/// ```
/// use formkit_validator::foundation::Validate;
/// use formkit_validator::validators::Email;
///
/// let validator = Email::new();
/// assert!(validator.check("user.name@domain.co.uk").is_ok());
/// assert!(validator.check("test@example").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    message: Cow<'static, str>,
}

impl Email {
    /// Creates an email validator with the default message.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: Cow::Borrowed(EMAIL_MESSAGE),
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

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Email {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        match present_text(value)? {
            Some(text) if !EMAIL_REGEX.is_match(text) => {
                Err(ValidationError::new(self.message.clone()))
            }
            _ => Ok(()),
        }
    }
}

/// Creates an [`Email`] validator with the default message.
#[must_use]
pub const fn email() -> Email {
    Email::new()
}

// ============================================================================
// PATTERN VALIDATOR
// ============================================================================

/// Validates that text contains a match for a regular expression.
///
/// Matching is a search, not a full-string match: `\d+` accepts `"abc1"`.
/// Anchor the pattern with `^` and `$` to require the whole text to match.
/// Absent values and empty text are accepted.
///
/// # Examples
///
/// ```
/// use formkit_validator::foundation::Validate;
/// use formkit_validator::validators::Pattern;
///
/// let validator = Pattern::new(r"^1[3-9]\d{9}$")?;
/// assert!(validator.check("13812345678").is_ok());
/// assert!(validator.check("12812345678").is_err());
///
/// assert!(Pattern::new("[").is_err());
/// # Ok::<(), formkit_validator::foundation::RuleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    message: Cow<'static, str>,
}

impl Pattern {
    /// Compiles `source` into a pattern validator with the default message.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] if `source` is not a valid
    /// regular expression.
    pub fn new(source: &str) -> Result<Self, RuleError> {
        let regex = Regex::new(source).map_err(|source_err| {
            tracing::debug!(pattern = source, error = %source_err, "pattern failed to compile");
            RuleError::InvalidPattern {
                pattern: source.to_owned(),
                source: source_err,
            }
        })?;
        Ok(Self {
            regex,
            message: Cow::Borrowed(PATTERN_MESSAGE),
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

    /// The pattern source as given to [`Pattern::new`].
    #[must_use]
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    /// The compiled regular expression.
    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// `Regex` has no equality; two patterns are equal when their sources are.
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source() && self.message == other.message
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source().hash(state);
        self.message.hash(state);
    }
}

impl Validate for Pattern {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        match present_text(value)? {
            Some(text) if !self.regex.is_match(text) => {
                Err(ValidationError::new(self.message.clone()))
            }
            _ => Ok(()),
        }
    }
}

/// Compiles a [`Pattern`] validator with the default message.
///
/// # Errors
///
/// Returns [`RuleError::InvalidPattern`] if `source` is not a valid regex.
pub fn pattern(source: &str) -> Result<Pattern, RuleError> {
    Pattern::new(source)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("test@example.com")]
    #[case("user.name@domain.co.uk")]
    #[case("first+tag@sub.example.org")]
    fn email_accepts(#[case] input: &str) {
        assert!(email().check(input).is_ok(), "{input}");
    }

    #[rstest]
    #[case("test@example")]
    #[case("@example.com")]
    #[case("test@")]
    #[case("plainaddress")]
    #[case("user@domain.c")]
    fn email_rejects(#[case] input: &str) {
        let err = email().check(input).unwrap_err();
        assert_eq!(err.message(), EMAIL_MESSAGE);
    }

    #[test]
    fn email_skips_absent_and_empty() {
        assert!(email().validate(&FieldValue::Absent).is_ok());
        assert!(email().check("").is_ok());
    }

    #[test]
    fn email_rejects_non_text() {
        let err = email().check(true).unwrap_err();
        assert_eq!(err.message(), "expected text, got boolean");
    }

    #[test]
    fn pattern_phone_number() {
        let validator = pattern(r"^1[3-9]\d{9}$").unwrap();
        assert!(validator.check("13812345678").is_ok());
        assert_eq!(
            validator.check("12812345678").unwrap_err().message(),
            PATTERN_MESSAGE
        );
    }

    #[test]
    fn pattern_uses_search_semantics() {
        let validator = pattern(r"\d+").unwrap();
        assert!(validator.check("order 66").is_ok());
        assert!(validator.check("no digits").is_err());
    }

    #[test]
    fn pattern_invalid_source_is_an_error() {
        let err = pattern("[").unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { ref pattern, .. } if pattern == "["));
    }

    #[test]
    fn pattern_skips_absent_and_empty() {
        let validator = pattern("^x$").unwrap();
        assert!(validator.validate(&FieldValue::Absent).is_ok());
        assert!(validator.check("").is_ok());
    }

    #[test]
    fn pattern_rejects_non_text() {
        let validator = pattern("^x$").unwrap();
        let err = validator.check(3.5).unwrap_err();
        assert_eq!(err.message(), "expected text, got number");
    }

    #[test]
    fn pattern_equality_uses_source() {
        let a = pattern("^a+$").unwrap();
        let b = pattern("^a+$").unwrap();
        let c = pattern("^a+$").unwrap().with_message("only a");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
