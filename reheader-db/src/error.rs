use reheader_core::RecordError;
use thiserror::Error;

/// Errors that can occur while loading the header database.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A typed field on one line failed to parse. The database is trusted
    /// input, so this aborts the whole load rather than dropping the line.
    #[error("database line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: RecordError,
    },
}
