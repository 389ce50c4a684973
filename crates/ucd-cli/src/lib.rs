//! CLI library components for the UCD converter.

pub mod logging;
pub mod pipeline;
pub mod types;
