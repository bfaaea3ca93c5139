//! Flat rule descriptions
//!
//! The form layer embeds each rule into the JSON it sends to the frontend
//! renderer. A [`RuleDescription`] is the neutral form of that: an ordered
//! key/value map the caller can rename or nest however its renderer wants.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rule::RuleKind;

/// Ordered key/value description of one rule.
///
/// Always starts with `kind` and `message`; variant parameters follow.
///
/// # Examples
///
/// ```
/// use formkit_validator::validators::length;
/// use formkit_validator::Rule;
///
/// let description = Rule::from(length(6, 20)).describe();
/// assert_eq!(
///     serde_json::to_string(&description).unwrap(),
///     r#"{"kind":"length","message":"length must be between 6 and 20","min":6,"max":20}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleDescription {
    fields: IndexMap<String, Value>,
}

impl RuleDescription {
    pub(crate) fn new(kind: RuleKind, message: &str) -> Self {
        let mut fields = IndexMap::with_capacity(4);
        fields.insert("kind".to_owned(), Value::from(kind.as_str()));
        fields.insert("message".to_owned(), Value::from(message));
        Self { fields }
    }

    pub(crate) fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.fields.insert(key.to_owned(), value.into());
    }

    /// Looks up a field by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The rule kind recorded in the `kind` field.
    #[must_use]
    pub fn kind(&self) -> Option<RuleKind> {
        self.get("kind")
            .and_then(|kind| serde_json::from_value(kind.clone()).ok())
    }

    /// The rule message recorded in the `message` field.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.get("message").and_then(Value::as_str)
    }

    /// Field names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always `false` for descriptions produced by a rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consumes the description, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.fields
    }

    /// Converts the description into a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

impl From<RuleDescription> for Value {
    fn from(description: RuleDescription) -> Self {
        Value::Object(description.fields.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_and_message_come_first() {
        let mut description = RuleDescription::new(RuleKind::Number, "must be ≥ 1");
        description.insert("min", 1.0);
        let keys: Vec<&str> = description.keys().collect();
        assert_eq!(keys, ["kind", "message", "min"]);
        assert_eq!(description.kind(), Some(RuleKind::Number));
        assert_eq!(description.message(), Some("must be ≥ 1"));
    }

    #[test]
    fn json_conversion() {
        let description = RuleDescription::new(RuleKind::Email, "bad");
        assert_eq!(description.to_json(), json!({"kind": "email", "message": "bad"}));
        assert_eq!(Value::from(description), json!({"kind": "email", "message": "bad"}));
    }
}
