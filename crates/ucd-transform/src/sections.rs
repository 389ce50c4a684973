//! Directive propagation for the bidi test file.
//!
//! `@Levels:` and `@Reorder:` lines set values that apply to every data
//! line after them until the next directive of the same kind.

use ucd_model::{Document, Entry, Record};

use crate::entries::keyed_entries;
use crate::error::Result;

const TRANSFORM: &str = "sections";

const LEVELS_DIRECTIVE: &str = "@Levels:";
const REORDER_DIRECTIVE: &str = "@Reorder:";

pub const LEVELS_FIELD: &str = "levels";
pub const REORDER_FIELD: &str = "reorder";

enum Directive {
    Levels(String),
    Reorder(String),
}

fn directive(entry: &Entry, lead_field: &str) -> Option<Directive> {
    let lead = entry.text(lead_field)?;
    if let Some(rest) = lead.strip_prefix(LEVELS_DIRECTIVE) {
        return Some(Directive::Levels(rest.trim().to_string()));
    }
    lead.strip_prefix(REORDER_DIRECTIVE)
        .map(|rest| Directive::Reorder(rest.trim().to_string()))
}

/// Accumulator threaded through the records.
#[derive(Default)]
struct SectionState {
    levels: Option<String>,
    reorder: Option<String>,
    records: Vec<Record>,
}

impl SectionState {
    fn step(mut self, mut entry: Entry, lead_field: &str) -> Self {
        match directive(&entry, lead_field) {
            Some(Directive::Levels(levels)) => self.levels = Some(levels),
            Some(Directive::Reorder(reorder)) => self.reorder = Some(reorder),
            None => {
                if let Some(levels) = &self.levels {
                    entry.insert(LEVELS_FIELD, levels.as_str());
                }
                if let Some(reorder) = &self.reorder {
                    entry.insert(REORDER_FIELD, reorder.as_str());
                }
                self.records.push(Record::Keyed(entry));
            }
        }
        self
    }
}

/// Stamps data lines with the current directive values and drops the
/// directive lines. `lead_field` is the column directives appear in.
pub fn propagate_sections(document: Document, lead_field: &str) -> Result<Document> {
    let state = keyed_entries(document.body, TRANSFORM)?
        .into_iter()
        .fold(SectionState::default(), |state, entry| {
            state.step(entry, lead_field)
        });
    Ok(Document::records(document.name, state.records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ucd_model::DocumentBody;

    fn input(lines: &[&str]) -> Document {
        let records = lines
            .iter()
            .enumerate()
            .map(|(index, line)| Record::Keyed(Entry::at_line(index + 1).with("input", *line)))
            .collect();
        Document::records("BidiTest", records)
    }

    fn entries(document: &Document) -> Vec<&Entry> {
        let DocumentBody::Records(records) = &document.body else {
            panic!("expected records");
        };
        records.iter().filter_map(Record::as_entry).collect()
    }

    #[test]
    fn test_directives_persist_until_overwritten() {
        let document = input(&["@Levels: 0 1", "@Reorder: 1 0", "AL AL", "@Levels: 2", "R R"]);
        let output = propagate_sections(document, "input").unwrap();
        let entries = entries(&output);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text("input"), Some("AL AL"));
        assert_eq!(entries[0].text(LEVELS_FIELD), Some("0 1"));
        assert_eq!(entries[0].text(REORDER_FIELD), Some("1 0"));
        assert_eq!(entries[1].text("input"), Some("R R"));
        assert_eq!(entries[1].text(LEVELS_FIELD), Some("2"));
        assert_eq!(entries[1].text(REORDER_FIELD), Some("1 0"));
        assert_eq!(entries[1].line(), Some(5));
    }

    #[test]
    fn test_records_before_directives_are_unstamped() {
        let output = propagate_sections(input(&["L", "@Reorder:\t0"]), "input").unwrap();
        let entries = entries(&output);

        assert_eq!(entries.len(), 1);
        assert!(!entries[0].contains(LEVELS_FIELD));
        assert!(!entries[0].contains(REORDER_FIELD));
    }

    #[test]
    fn test_empty_directive_value_is_kept() {
        let output = propagate_sections(input(&["@Reorder:", "NSM"]), "input").unwrap();
        assert_eq!(entries(&output)[0].text(REORDER_FIELD), Some(""));
    }
}
