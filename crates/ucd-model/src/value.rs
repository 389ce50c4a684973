//! Typed field values produced by field-name coercion.

use serde::Serialize;

/// Value of a single named field in a keyed record.
///
/// Serialized untagged: text as a JSON string, ranges and lists as arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Atomic string value.
    Text(String),
    /// Inclusive codepoint range split on `..`.
    ///
    /// A single codepoint yields a one-element range.
    Range(Vec<String>),
    /// Whitespace-separated token list.
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns the string if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Range(_) | Self::List(_) => None,
        }
    }

    /// Returns `(lower, upper)` for a range, treating a single codepoint as
    /// `lower == upper`.
    pub fn bounds(&self) -> Option<(&str, &str)> {
        match self {
            Self::Range(parts) => {
                let lower = parts.first()?;
                let upper = parts.last().unwrap_or(lower);
                Some((lower, upper))
            }
            Self::Text(_) | Self::List(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
