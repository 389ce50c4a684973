//! Post-processing for UCD files whose structure a flat record list does
//! not capture.
//!
//! # Transforms
//!
//! - **aliases**: property value aliases renamed by column count
//! - **sections**: `@Levels:` / `@Reorder:` directives stamped onto data lines
//! - **flatten**: two columns collapsed into a key to value map
//! - **names list**: continuation lines grouped under their codepoint
//! - **merge**: `{codepoint, field, value}` triples merged per codepoint
//!
//! Each transform consumes a generic document and returns a new one. State
//! lives only for the duration of one call.

mod aliases;
mod entries;
mod error;
mod flatten;
mod merge;
mod names;
mod sections;

use tracing::debug;
use ucd_model::{Document, TransformKind};
use ucd_standards::FileSpec;

// === Error Types ===
pub use error::{Result, TransformError};

// === Transforms ===
pub use aliases::disambiguate_aliases;
pub use flatten::flatten_pairs;
pub use merge::merge_by_codepoint;
pub use names::{classify_continuation, group_names_list, tokenize_mapping};
pub use sections::{LEVELS_FIELD, REORDER_FIELD, propagate_sections};

/// Applies the transform configured for `spec`, if any.
pub fn apply_transform(spec: &FileSpec, document: Document) -> Result<Document> {
    let Some(transform) = &spec.transform else {
        return Ok(document);
    };
    debug!(
        file = %spec.file_name,
        transform = transform.name(),
        records = document.body.len(),
        "applying transform"
    );

    match transform {
        TransformKind::Aliases => disambiguate_aliases(document),
        TransformKind::Sections => {
            let lead = spec
                .fields
                .first()
                .ok_or(TransformError::UnexpectedShape {
                    transform: "sections",
                    expected: "a schema with a lead field",
                    found: "no fields",
                })?;
            propagate_sections(document, lead)
        }
        TransformKind::Flatten { key, value } => flatten_pairs(document, key, value),
        TransformKind::NamesList => group_names_list(document, &spec.fields),
        TransformKind::Merge => merge_by_codepoint(document),
    }
}
