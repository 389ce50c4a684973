//! Property value alias disambiguation.
//!
//! Alias lines carry two to four values after the property name. What the
//! values mean depends on how many there are and, for four-column lines, on
//! whether the property is `ccc` (whose first value is a numeric class).

use ucd_model::{Document, Entry, Record};

use crate::entries::{entry_from, keyed_entries, line_of, require_text};
use crate::error::{Result, TransformError};

const TRANSFORM: &str = "aliases";

const PROPERTY: &str = "property";
const SLOTS: [&str; 4] = ["field2", "field3", "field4", "field5"];
const COMBINING_CLASS: &str = "ccc";

/// Renames positional alias fields by arity.
pub fn disambiguate_aliases(document: Document) -> Result<Document> {
    let records = keyed_entries(document.body, TRANSFORM)?
        .into_iter()
        .map(|entry| resolve_aliases(&entry).map(Record::Keyed))
        .collect::<Result<Vec<_>>>()?;
    Ok(Document::records(document.name, records))
}

fn resolve_aliases(entry: &Entry) -> Result<Entry> {
    let property = require_text(entry, PROPERTY, TRANSFORM)?;
    let [f2, f3, f4, f5] = SLOTS.map(|slot| entry.get(slot).cloned());
    let base = entry_from(entry).with(PROPERTY, property);

    let resolved = match (f2, f3, f4, f5) {
        (Some(short), Some(long), Some(alias_short), Some(alias_long)) => base
            .with("shortName", short)
            .with("longName", long)
            .with("aliasShortName", alias_short)
            .with("aliasLongName", alias_long),
        (Some(class), Some(short), Some(long), None) if property == COMBINING_CLASS => base
            .with("class", class)
            .with("shortName", short)
            .with("longName", long),
        (Some(short), Some(long), Some(alias), None) => base
            .with("shortName", short)
            .with("longName", long)
            .with("alias", alias),
        (Some(short), Some(long), None, None) => {
            base.with("shortName", short).with("longName", long)
        }
        _ => {
            return Err(TransformError::UnrecognizedAliasArity {
                line: line_of(entry),
                present: present_fields(entry),
            });
        }
    };
    Ok(resolved)
}

fn present_fields(entry: &Entry) -> String {
    let present: Vec<&str> = SLOTS
        .iter()
        .copied()
        .filter(|slot| entry.contains(slot))
        .collect();
    if present.is_empty() {
        "none".to_string()
    } else {
        present.join(", ")
    }
}
