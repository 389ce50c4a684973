use thiserror::Error;

/// Structural violations found while post-processing a file.
///
/// Each of these means the source corpus or the field table changed shape;
/// they abort the file rather than produce partial output.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("aliases: line {line}: unrecognized field arity (present: {present})")]
    UnrecognizedAliasArity { line: usize, present: String },

    #[error("{transform}: line {line}: missing required field '{field}'")]
    MissingField {
        transform: &'static str,
        field: String,
        line: usize,
    },

    #[error("{transform}: line {line}: field '{field}' must be a plain string")]
    NonTextField {
        transform: &'static str,
        field: String,
        line: usize,
    },

    #[error("{transform}: expected {expected}, found {found}")]
    UnexpectedShape {
        transform: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;
