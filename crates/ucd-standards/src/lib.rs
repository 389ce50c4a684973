#![deny(unsafe_code)]

//! Field table for UCD conversion.
//!
//! The table maps each UCD file name to its ordered field names, its parse
//! options and the post-processing it needs. It is loaded once and passed
//! explicitly to the conversion pipeline.

pub mod error;
pub mod loaders;
pub mod table;

pub use crate::error::{Result, StandardsError};
pub use crate::loaders::{
    FIELD_TABLE_FILE, default_field_table_path, default_standards_root, load_default_field_table,
    load_field_table, parse_field_table,
};
pub use crate::table::{FieldTable, FileSpec};
