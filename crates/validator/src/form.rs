//! Per-form rule sets
//!
//! [`FieldRules`] maps each field of a form to its [`ValidatorChain`]. Each
//! chain still stops at its first failure; the form collects one message per
//! failing field.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::chain::ValidatorChain;
use crate::description::RuleDescription;
use crate::foundation::{FieldValue, RuleError, Validate};
use crate::spec::RuleSpec;

// ============================================================================
// FIELD ERRORS
// ============================================================================

/// The first failure message of every failing field, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: IndexMap<String, String>,
}

impl FieldErrors {
    /// The message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the errors, returning the field → message map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, String> {
        self.errors
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

// ============================================================================
// FIELD RULES
// ============================================================================

/// Named rule chains for the fields of one form.
///
/// Deserialises from a map of field name to a list of [`RuleSpec`]s, which
/// is the shape of a rules file:
///
/// ```
/// use formkit_validator::FieldRules;
/// use serde_json::json;
///
/// let rules: FieldRules = serde_json::from_value(json!({
///     "username": [{"kind": "required"}, {"kind": "length", "min": 5, "max": 20}],
///     "email": [{"kind": "email"}],
/// }))?;
///
/// let errors = rules
///     .validate_json(&json!({"username": "abc", "email": "a@b.io"}))
///     .unwrap_err();
/// assert_eq!(errors.get("username"), Some("length must be between 5 and 20"));
/// assert_eq!(errors.get("email"), None);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRules {
    fields: IndexMap<String, ValidatorChain>,
}

impl FieldRules {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the chain for `name`.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, chain: ValidatorChain) -> Self {
        self.insert(name, chain);
        self
    }

    /// Adds (or replaces) the chain for `name` in place, returning the
    /// previous chain.
    pub fn insert(&mut self, name: impl Into<String>, chain: ValidatorChain) -> Option<ValidatorChain> {
        self.fields.insert(name.into(), chain)
    }

    /// Builds a rule set from field → specs pairs.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuleError`]; it names the offending pattern or
    /// bounds.
    pub fn from_specs<I, K>(specs: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (K, Vec<RuleSpec>)>,
        K: Into<String>,
    {
        let mut rules = Self::new();
        for (name, field_specs) in specs {
            let name = name.into();
            let chain = ValidatorChain::from_specs(&field_specs).inspect_err(|error| {
                tracing::debug!(field = %name, %error, "field rules failed to build");
            })?;
            rules.insert(name, chain);
        }
        Ok(rules)
    }

    /// The chain for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ValidatorChain> {
        self.fields.get(name)
    }

    /// Field names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// `(field, chain)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidatorChain)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when no field has rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates submitted values. A field missing from `values` is checked
    /// as [`FieldValue::Absent`]; values without rules are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] holding the first failure of each failing
    /// field.
    pub fn validate(&self, values: &IndexMap<String, FieldValue>) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for (name, chain) in &self.fields {
            let value = values.get(name).unwrap_or(&FieldValue::Absent);
            if let Err(error) = chain.validate(value) {
                errors.errors.insert(name.clone(), error.into());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(failed = errors.len(), "form validation failed");
            Err(errors)
        }
    }

    /// Validates a JSON document. Anything other than an object is treated
    /// as a form with no submitted values.
    ///
    /// # Errors
    ///
    /// Same as [`FieldRules::validate`].
    pub fn validate_json(&self, values: &serde_json::Value) -> Result<(), FieldErrors> {
        let values: IndexMap<String, FieldValue> = values
            .as_object()
            .map(|object| {
                object
                    .iter()
                    .map(|(k, v)| (k.clone(), FieldValue::from(v)))
                    .collect()
            })
            .unwrap_or_default();
        self.validate(&values)
    }

    /// Describes every field's rules, in order.
    #[must_use]
    pub fn describe(&self) -> IndexMap<String, Vec<RuleDescription>> {
        self.fields
            .iter()
            .map(|(name, chain)| (name.clone(), chain.describe()))
            .collect()
    }

    /// Declarative specs for every field, in order.
    #[must_use]
    pub fn specs(&self) -> IndexMap<String, Vec<RuleSpec>> {
        self.fields
            .iter()
            .map(|(name, chain)| (name.clone(), chain.specs()))
            .collect()
    }
}

impl Serialize for FieldRules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(&self.fields)
    }
}

impl<'de> Deserialize<'de> for FieldRules {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let specs = IndexMap::<String, Vec<RuleSpec>>::deserialize(deserializer)?;
        Self::from_specs(specs).map_err(serde::de::Error::custom)
    }
}
