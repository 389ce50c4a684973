//! Names-list grouping.
//!
//! The names list introduces a codepoint on one line and annotates it on the
//! following continuation lines, each tagged with a one-character type
//! followed by a space. Lines whose codepoint column starts with `@` are
//! section directives.

use tracing::debug;
use ucd_model::{
    Document, DocumentBody, Entry, FieldValue, LineMarker, NamesGroup, NamesListEntry, SubField,
    SubValue,
};

use crate::entries::{keyed_entries, line_of, require_text};
use crate::error::{Result, TransformError};

const TRANSFORM: &str = "namesList";

const DIRECTIVE_PREFIX: char = '@';

const SUBFIELD_PREFIXES: &[(char, SubField)] = &[
    ('=', SubField::Alias),
    ('x', SubField::CrossReference),
    ('*', SubField::Comment),
    ('#', SubField::Compatibility),
    (':', SubField::Decomposition),
    ('~', SubField::Variation),
];

/// Splits a continuation line into its category and payload.
///
/// Unknown prefixes fall into [`SubField::Other`] with the full text.
pub fn classify_continuation(text: &str) -> (SubField, &str) {
    let mut chars = text.chars();
    let Some(tag) = chars.next() else {
        return (SubField::Other, text);
    };
    let rest = chars.as_str();
    if !(rest.is_empty() || rest.starts_with(char::is_whitespace)) {
        return (SubField::Other, text);
    }
    SUBFIELD_PREFIXES
        .iter()
        .find(|(prefix, _)| *prefix == tag)
        .map_or((SubField::Other, text), |(_, field)| (*field, rest.trim()))
}

fn is_hex(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_hexdigit())
}

/// Tokenizes a mapping payload.
///
/// Leading tokens that are hex codepoints or `<tag>`s are kept as they are.
/// From the first other token on, the rest is one trailing element.
pub fn tokenize_mapping(payload: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = payload.trim_start();
    while let Some(token) = rest.split_whitespace().next() {
        if !(is_hex(token) || token.starts_with('<')) {
            tokens.push(rest.split_whitespace().collect::<Vec<_>>().join(" "));
            break;
        }
        tokens.push(token.to_string());
        rest = rest[token.len()..].trim_start();
    }
    tokens
}

fn subvalue(field: SubField, payload: &str) -> SubValue {
    match field {
        SubField::Compatibility | SubField::Decomposition => {
            SubValue::Tokens(tokenize_mapping(payload))
        }
        _ => SubValue::Text(payload.to_string()),
    }
}

/// Non-empty fields of an entry in schema order, tab-joined.
fn line_text(entry: &Entry, schema: &[String]) -> String {
    schema
        .iter()
        .filter_map(|name| entry.get(name))
        .map(|value| match value {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Range(parts) => parts.join(".."),
            FieldValue::List(tokens) => tokens.join(" "),
        })
        .collect::<Vec<_>>()
        .join("\t")
}

/// Accumulator threaded through the records: the open group and the
/// finished output.
#[derive(Default)]
struct GroupState {
    open: Option<NamesGroup>,
    entries: Vec<NamesListEntry>,
}

impl GroupState {
    fn flush(&mut self) {
        if let Some(group) = self.open.take() {
            self.entries.push(NamesListEntry::Group(group));
        }
    }

    fn marker(&mut self, entry: &Entry, schema: &[String]) {
        self.entries.push(NamesListEntry::Marker(LineMarker {
            line: line_of(entry),
            text: line_text(entry, schema),
        }));
    }

    fn step(mut self, entry: &Entry, columns: &Columns<'_>) -> Result<Self> {
        match entry.get(columns.codepoint) {
            Some(FieldValue::Text(codepoint)) if codepoint.starts_with(DIRECTIVE_PREFIX) => {
                self.flush();
                self.marker(entry, columns.schema);
            }
            Some(_) => {
                let codepoint = require_text(entry, columns.codepoint, TRANSFORM)?;
                let name = require_text(entry, columns.name, TRANSFORM)?;
                self.flush();
                self.open = Some(NamesGroup::new(codepoint, name, line_of(entry)));
            }
            None => {
                let text = require_text(entry, columns.name, TRANSFORM)?;
                match self.open.as_mut() {
                    Some(group) => {
                        let (field, payload) = classify_continuation(text);
                        group.push(field, subvalue(field, payload));
                    }
                    None => {
                        debug!(line = line_of(entry), "continuation line outside any group");
                        self.marker(entry, columns.schema);
                    }
                }
            }
        }
        Ok(self)
    }

    fn finish(mut self) -> Vec<NamesListEntry> {
        self.flush();
        self.entries
    }
}

/// Column names taken from the schema by position.
struct Columns<'a> {
    schema: &'a [String],
    codepoint: &'a str,
    name: &'a str,
}

impl<'a> Columns<'a> {
    fn from_schema(schema: &'a [String]) -> Result<Self> {
        match schema {
            [codepoint, name, ..] => Ok(Self {
                schema,
                codepoint,
                name,
            }),
            _ => Err(TransformError::UnexpectedShape {
                transform: TRANSFORM,
                expected: "a schema with codepoint and name columns",
                found: "fewer than two fields",
            }),
        }
    }
}

/// Groups continuation lines under the codepoint that precedes them.
///
/// The first two schema columns are the codepoint and name columns.
pub fn group_names_list(document: Document, schema: &[String]) -> Result<Document> {
    let columns = Columns::from_schema(schema)?;
    let state = keyed_entries(document.body, TRANSFORM)?
        .iter()
        .try_fold(GroupState::default(), |state, entry| {
            state.step(entry, &columns)
        })?;
    Ok(Document::new(
        document.name,
        DocumentBody::NamesList(state.finish()),
    ))
}
