//! UCD ingestion.
//!
//! This crate turns UCD text files into generic record documents.
//!
//! # Features
//!
//! - **Discovery**: match a UCD directory against the field table
//! - **Reading**: UTF-8 decoding with BOM handling
//! - **Line parsing**: single-line, trailing and block comment stripping,
//!   delimiter splitting
//! - **Coercion**: range, list and text values chosen by field name
//! - **Record building**: positional fields to named entries
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ucd_ingest::{discover_files, parse_document, read_source};
//! use ucd_standards::load_default_field_table;
//!
//! let table = load_default_field_table()?;
//! let discovery = discover_files(Path::new("UCD"), &table)?;
//! for file in &discovery.files {
//!     let text = read_source(&file.path)?;
//!     let parsed = parse_document(file.spec, &text);
//! }
//! ```

mod coerce;
mod discovery;
mod error;
mod lines;
mod read;
mod records;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{DiscoveredFile, Discovery, discover_files, list_txt_files};

// === Reading ===
pub use read::read_source;

// === Parsing ===
pub use coerce::{ValueShape, coerce, value_shape};
pub use lines::{ParsedLines, SourceLine, parse_lines};
pub use records::{ParseStats, ParsedDocument, build_records, parse_document};
