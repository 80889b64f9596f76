use thiserror::Error;

/// Errors raised while parsing a database record line.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A field that should hold a base-10 integer held something else.
    /// Empty fields are the "unknown" sentinel and never reach this error.
    #[error("field '{field}' is not a number: {value:?}")]
    InvalidInteger { field: &'static str, value: String },
}

impl RecordError {
    pub fn invalid_integer(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInteger {
            field,
            value: value.into(),
        }
    }
}

/// Errors raised while synthesizing an iNES header.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// The record was never resolved against the database (no CRC key).
    #[error("record has no CRC, cannot generate a header")]
    UnresolvedRecord,
}
