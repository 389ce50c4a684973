//! Data model for UCD text-to-JSON conversion.
//!
//! - **value**: typed field values (text, range, token list)
//! - **record**: keyed and scalar records, one per source line
//! - **names**: grouped names-list entries and line markers
//! - **document**: the per-file output unit
//! - **options**: parse options and post-processing selection

pub mod document;
pub mod names;
pub mod options;
pub mod record;
pub mod value;

pub use document::{Document, DocumentBody};
pub use names::{LineMarker, NamesGroup, NamesListEntry, SubField, SubValue};
pub use options::{ParseOptions, TransformKind};
pub use record::{Entry, Record};
pub use value::FieldValue;
