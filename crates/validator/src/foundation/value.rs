//! Candidate values
//!
//! Form input arrives untyped: a text box yields a string, a switch yields a
//! boolean, a multi-select yields a list. [`FieldValue`] is the closed set of
//! shapes a validator may be asked to check.

use std::fmt;

use indexmap::IndexMap;

/// A single form-field value handed to a validator.
///
/// # Examples
///
/// ```
/// use formkit_validator::foundation::FieldValue;
///
/// assert_eq!(FieldValue::from("abc"), FieldValue::Text("abc".into()));
/// assert_eq!(FieldValue::from(None::<i32>), FieldValue::Absent);
/// assert!(FieldValue::from(0).is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// No value was submitted.
    #[default]
    Absent,
    /// A boolean (checkbox, switch).
    Bool(bool),
    /// A number. Integers are widened to `f64`.
    Number(f64),
    /// Free text.
    Text(String),
    /// An ordered collection (checkbox group, multi-select).
    List(Vec<FieldValue>),
    /// A keyed structure (nested group, key/value editor).
    Map(IndexMap<String, FieldValue>),
}

/// Coarse type of a [`FieldValue`], used in type-mismatch messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Absent,
    Bool,
    Number,
    Text,
    List,
    Map,
}

impl ValueType {
    /// Lowercase name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "nothing",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::Text => "text",
            Self::List => "list",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FieldValue {
    /// Returns the coarse type of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Absent => ValueType::Absent,
            Self::Bool(_) => ValueType::Bool,
            Self::Number(_) => ValueType::Number,
            Self::Text(_) => ValueType::Text,
            Self::List(_) => ValueType::List,
            Self::Map(_) => ValueType::Map,
        }
    }

    /// Returns `true` for [`FieldValue::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the text if this is a [`FieldValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` when the value is the zero-equivalent of its type:
    /// absent, blank text, `false`, `0`, or an empty list or map.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Bool(b) => !b,
            Self::Number(n) => *n == 0.0,
            Self::Text(s) => s.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32);

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, FieldValue>> for FieldValue {
    fn from(value: IndexMap<String, FieldValue>) -> Self {
        Self::Map(value)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Absent,
            Value::Bool(b) => Self::Bool(b),
            // Every JSON number has an f64 form; large integers lose precision.
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::List(items.into_iter().map(Into::into).collect()),
            Value::Object(entries) => {
                Self::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&serde_json::Value> for FieldValue {
    fn from(value: &serde_json::Value) -> Self {
        value.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_null_is_absent() {
        assert_eq!(FieldValue::from(json!(null)), FieldValue::Absent);
    }

    #[test]
    fn json_nested_structures_convert() {
        let value = FieldValue::from(json!({"tags": ["a", "b"], "age": 30, "ok": true}));
        let FieldValue::Map(entries) = value else {
            panic!("expected map");
        };
        assert_eq!(
            entries["tags"],
            FieldValue::List(vec!["a".into(), "b".into()])
        );
        assert_eq!(entries["age"], FieldValue::Number(30.0));
        assert_eq!(entries["ok"], FieldValue::Bool(true));
    }

    #[test]
    fn zero_equivalents() {
        assert!(FieldValue::Absent.is_zero());
        assert!(FieldValue::from("   ").is_zero());
        assert!(FieldValue::from(false).is_zero());
        assert!(FieldValue::from(0u8).is_zero());
        assert!(FieldValue::from(Vec::<String>::new()).is_zero());
        assert!(FieldValue::Map(IndexMap::new()).is_zero());

        assert!(!FieldValue::from(" x ").is_zero());
        assert!(!FieldValue::from(true).is_zero());
        assert!(!FieldValue::from(-1).is_zero());
        assert!(!FieldValue::from(vec![1]).is_zero());
    }

    #[test]
    fn value_type_names() {
        assert_eq!(FieldValue::from(1.5).value_type().to_string(), "number");
        assert_eq!(FieldValue::from("x").value_type().as_str(), "text");
        assert_eq!(FieldValue::Absent.value_type().as_str(), "nothing");
    }
}
