//! Ordered, short-circuiting rule chains
//!
//! A [`ValidatorChain`] holds the rules for one field. Rules run in the order
//! they were added, and the first rejection ends the run: a form shows one
//! message per field at a time, so later rules are never evaluated.

use serde::{Serialize, Serializer};

use crate::description::RuleDescription;
use crate::foundation::{FieldValue, RuleError, Validate, ValidationError};
use crate::rule::Rule;
use crate::spec::RuleSpec;
use crate::validators::{Email, Length, Number, Pattern, Required};

/// An ordered list of rules evaluated with first-failure semantics.
///
/// Build the chain once, then call [`validate`](Validate::validate) as often
/// as needed. Validation takes `&self` and mutates nothing, so a finished
/// chain can be shared across threads.
///
/// # Examples
///
/// ```
/// use formkit_validator::ValidatorChain;
/// use formkit_validator::foundation::Validate;
///
/// let username = ValidatorChain::new()
///     .required(None)
///     .length(5, 20, None);
///
/// assert_eq!(username.check("").unwrap_err().message(), "this field is required");
/// assert_eq!(username.check("abc").unwrap_err().message(), "length must be between 5 and 20");
/// assert!(username.check("alice").is_ok());
/// ```
///
/// Pattern compilation can fail, so the pattern step returns a `Result`:
///
/// ```
/// use formkit_validator::ValidatorChain;
///
/// let phone = ValidatorChain::new()
///     .required(Some("enter a phone number"))
///     .pattern(r"^1[3-9]\d{9}$", Some("not a mobile number"))?;
/// assert_eq!(phone.len(), 2);
///
/// assert!(ValidatorChain::new().pattern("[", None).is_err());
/// # Ok::<(), formkit_validator::foundation::RuleError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorChain {
    rules: Vec<Rule>,
}

impl ValidatorChain {
    /// Creates an empty chain. An empty chain accepts every value.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn add(mut self, rule: impl Into<Rule>) -> Self {
        self.push(rule);
        self
    }

    /// Appends a rule in place.
    pub fn push(&mut self, rule: impl Into<Rule>) {
        self.rules.push(rule.into());
    }

    /// Appends a [`Required`] rule. `None` or an empty message selects the
    /// default.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(self, message: Option<&str>) -> Self {
        self.add(Required::new().with_message(message.unwrap_or_default()))
    }

    /// Appends a [`Length`] rule.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`; see [`ValidatorChain::try_length`].
    #[must_use = "builder methods must be chained or built"]
    pub fn length(self, min: usize, max: usize, message: Option<&str>) -> Self {
        self.add(Length::new(min, max).with_message(message.unwrap_or_default()))
    }

    /// Appends a [`Length`] rule, rejecting `min > max`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidBounds`] for inverted bounds.
    pub fn try_length(self, min: usize, max: usize, message: Option<&str>) -> Result<Self, RuleError> {
        let rule = Length::try_new(min, max)?.with_message(message.unwrap_or_default());
        Ok(self.add(rule))
    }

    /// Appends an [`Email`] rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn email(self, message: Option<&str>) -> Self {
        self.add(Email::new().with_message(message.unwrap_or_default()))
    }

    /// Appends a [`Number`] rule.
    ///
    /// # Panics
    ///
    /// Panics on a non-finite bound or `min > max`; see
    /// [`ValidatorChain::try_number`].
    #[must_use = "builder methods must be chained or built"]
    pub fn number(self, min: Option<f64>, max: Option<f64>, message: Option<&str>) -> Self {
        self.add(Number::new(min, max).with_message(message.unwrap_or_default()))
    }

    /// Appends a [`Number`] rule, rejecting non-finite or inverted bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidBounds`] for bounds no value can satisfy.
    pub fn try_number(
        self,
        min: Option<f64>,
        max: Option<f64>,
        message: Option<&str>,
    ) -> Result<Self, RuleError> {
        let rule = Number::try_new(min, max)?.with_message(message.unwrap_or_default());
        Ok(self.add(rule))
    }

    /// Compiles `source` and appends a [`Pattern`] rule.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] if `source` does not compile.
    /// The chain is dropped in that case; nothing half-built escapes.
    pub fn pattern(self, source: &str, message: Option<&str>) -> Result<Self, RuleError> {
        let rule = Pattern::new(source)?.with_message(message.unwrap_or_default());
        Ok(self.add(rule))
    }

    /// Builds a chain from declarative specs, in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuleError`] raised by [`RuleSpec::build`].
    pub fn from_specs<'a, I>(specs: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = &'a RuleSpec>,
    {
        specs.into_iter().map(RuleSpec::build).collect()
    }

    /// The rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Iterates over the rules in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the chain has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Describes every rule, in order.
    #[must_use]
    pub fn describe(&self) -> Vec<RuleDescription> {
        self.rules.iter().map(Rule::describe).collect()
    }

    /// Declarative specs for every rule, in order.
    #[must_use]
    pub fn specs(&self) -> Vec<RuleSpec> {
        self.rules.iter().map(Rule::spec).collect()
    }
}

impl Validate for ValidatorChain {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        for (index, rule) in self.rules.iter().enumerate() {
            if let Err(error) = rule.validate(value) {
                tracing::trace!(index, kind = %rule.kind(), "rule rejected value");
                return Err(error);
            }
        }
        Ok(())
    }
}

impl Serialize for ValidatorChain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.rules)
    }
}

impl FromIterator<Rule> for ValidatorChain {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Rule> for ValidatorChain {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ValidatorChain {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl IntoIterator for ValidatorChain {
    type Item = Rule;
    type IntoIter = std::vec::IntoIter<Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleKind;
    use crate::validators::{length, required};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn username() -> ValidatorChain {
        ValidatorChain::new().required(None).length(5, 20, None)
    }

    #[test]
    fn empty_chain_accepts_everything() {
        let chain = ValidatorChain::new();
        assert!(chain.is_empty());
        assert!(chain.validate(&FieldValue::Absent).is_ok());
        assert!(chain.check(false).is_ok());
    }

    #[test]
    fn first_failure_wins() {
        let chain = username();
        assert_eq!(chain.check("").unwrap_err().message(), "this field is required");
        assert_eq!(
            chain.check("abc").unwrap_err().message(),
            "length must be between 5 and 20"
        );
        assert!(chain.check("abcde").is_ok());
    }

    #[test]
    fn later_rules_are_not_evaluated() {
        // Length would report a type mismatch for a number; Required fails first.
        let chain = username();
        assert_eq!(chain.check(0).unwrap_err().message(), "this field is required");
    }

    #[test]
    fn order_is_insertion_order() {
        let chain = ValidatorChain::new()
            .email(Some("bad email"))
            .length(100, 200, Some("too short"));
        assert_eq!(chain.check("nope").unwrap_err().message(), "bad email");

        let kinds: Vec<RuleKind> = chain.iter().map(Rule::kind).collect();
        assert_eq!(kinds, [RuleKind::Email, RuleKind::Length]);
    }

    #[test]
    fn custom_messages_override_defaults() {
        let chain = ValidatorChain::new()
            .required(Some("请输入用户名"))
            .length(6, 20, Some("用户名长度为6-20个字符"));
        assert_eq!(chain.check("   ").unwrap_err().message(), "请输入用户名");
        assert_eq!(chain.check("用户名").unwrap_err().message(), "用户名长度为6-20个字符");
    }

    #[test]
    fn pattern_error_propagates() {
        let err = ValidatorChain::new().required(None).pattern("[", None).unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
    }

    #[test]
    fn fallible_steps_reject_bad_bounds() {
        let err = ValidatorChain::new().try_length(9, 3, None).unwrap_err();
        assert_eq!(err.kind(), RuleKind::Length);

        let err = ValidatorChain::new()
            .try_number(Some(5.0), Some(1.0), None)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid bounds for number rule: min 5 is greater than max 1"
        );

        let err = ValidatorChain::new()
            .try_number(Some(f64::NAN), None, None)
            .unwrap_err();
        assert!(matches!(err, RuleError::InvalidBounds { .. }));

        let chain = ValidatorChain::new()
            .try_length(2, 8, Some("2 to 8"))
            .and_then(|chain| chain.try_number(None, Some(3.0), None))
            .unwrap();
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn specs_rebuild_an_equal_chain() {
        let chain = ValidatorChain::new()
            .required(Some("needed"))
            .length(2, 8, None)
            .number(Some(-1.5), Some(1.5), Some("small"))
            .pattern(r"^\w+$", None)
            .unwrap();

        let rebuilt = ValidatorChain::from_specs(&chain.specs()).unwrap();
        assert_eq!(rebuilt, chain);
    }

    #[test]
    #[should_panic(expected = "min 5 is greater than max 1")]
    fn number_step_panics_on_inverted_bounds() {
        let _ = ValidatorChain::new().number(Some(5.0), Some(1.0), None);
    }

    #[test]
    fn number_step() {
        let chain = ValidatorChain::new().number(Some(1.0), Some(5.0), None);
        assert!(chain.check("3").is_ok());
        assert_eq!(chain.check(7).unwrap_err().message(), "must be between 1 and 5");
        assert_eq!(
            chain.check("x").unwrap_err().message(),
            "`x` is not a valid number"
        );
    }

    #[test]
    fn from_specs_preserves_order() {
        let specs = vec![RuleSpec::required(), RuleSpec::email()];
        let chain = ValidatorChain::from_specs(&specs).unwrap();
        assert_eq!(chain.specs().iter().map(RuleSpec::kind).collect::<Vec<_>>(), [
            RuleKind::Required,
            RuleKind::Email
        ]);
    }

    #[test]
    fn from_specs_stops_at_first_bad_spec() {
        let specs = vec![RuleSpec::pattern("("), RuleSpec::length(3, 1)];
        let err = ValidatorChain::from_specs(&specs).unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
    }

    #[test]
    fn serializes_as_list_of_descriptions() {
        let chain = ValidatorChain::new().required(Some("needed")).email(None);
        assert_eq!(
            serde_json::to_value(&chain).unwrap(),
            json!([
                {"kind": "required", "message": "needed"},
                {"kind": "email", "message": "enter a valid email address"},
            ])
        );
    }

    #[test]
    fn collect_and_extend() {
        let mut chain: ValidatorChain = vec![Rule::from(required())].into_iter().collect();
        chain.extend([Rule::from(length(1, 3))]);
        chain.push(crate::validators::email());
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.rules()[1].kind(), RuleKind::Length);
    }

    #[test]
    fn chain_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidatorChain>();
    }
}
