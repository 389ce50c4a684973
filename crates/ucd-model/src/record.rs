//! Records built from parsed source lines.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::value::FieldValue;

/// A keyed record: named field values plus the source line it came from.
///
/// Fields keep insertion order, which is schema order for built records.
/// Only non-empty fields are stored. The line number is kept for stateful
/// post-processing and is not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    fields: Vec<(String, FieldValue)>,
    line: Option<usize>,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty entry attached to a 1-based source line.
    pub fn at_line(line: usize) -> Self {
        Self {
            fields: Vec::new(),
            line: Some(line),
        }
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a field. An existing field is overwritten in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Returns the field as a string when it is set and holds text.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn set_line(&mut self, line: usize) {
        self.line = Some(line);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field was set, e.g. for a blank source line.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// One record per logical source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    /// Single-valued line (schema with fewer than two fields).
    Scalar(String),
    /// Named fields.
    Keyed(Entry),
}

impl Record {
    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            Self::Keyed(entry) => Some(entry),
            Self::Scalar(_) => None,
        }
    }
}
