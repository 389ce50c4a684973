//! Names-list output types.
//!
//! The names list mixes two record shapes in one array: codepoint groups
//! with typed sub-fields, and line markers for directives and annotation
//! lines that belong to no group.

use std::collections::BTreeMap;

use serde::Serialize;

/// Sub-field category of a continuation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubField {
    Alias,
    CrossReference,
    Comment,
    Compatibility,
    Decomposition,
    Variation,
    Other,
}

/// Payload of one continuation line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SubValue {
    Text(String),
    Tokens(Vec<String>),
}

/// A codepoint and the continuation lines that followed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamesGroup {
    pub codepoint: String,
    pub name: String,
    #[serde(skip)]
    pub line: usize,
    #[serde(flatten)]
    pub subfields: BTreeMap<SubField, Vec<SubValue>>,
}

impl NamesGroup {
    pub fn new(codepoint: impl Into<String>, name: impl Into<String>, line: usize) -> Self {
        Self {
            codepoint: codepoint.into(),
            name: name.into(),
            line,
            subfields: BTreeMap::new(),
        }
    }

    pub fn push(&mut self, field: SubField, value: SubValue) {
        self.subfields.entry(field).or_default().push(value);
    }

    pub fn values(&self, field: SubField) -> &[SubValue] {
        self.subfields.get(&field).map_or(&[], Vec::as_slice)
    }
}

/// A line that is kept for position only: a directive or an orphan
/// annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMarker {
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NamesListEntry {
    Group(NamesGroup),
    Marker(LineMarker),
}

impl NamesListEntry {
    pub fn as_group(&self) -> Option<&NamesGroup> {
        match self {
            Self::Group(group) => Some(group),
            Self::Marker(_) => None,
        }
    }

    pub fn as_marker(&self) -> Option<&LineMarker> {
        match self {
            Self::Marker(marker) => Some(marker),
            Self::Group(_) => None,
        }
    }
}
