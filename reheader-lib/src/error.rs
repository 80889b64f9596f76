use thiserror::Error;

/// Errors that can occur while patching a single file.
///
/// These are per-file failures: the caller reports them and moves on to the
/// next input rather than aborting the batch.
#[derive(Debug, Error)]
pub enum PatchError {
    /// I/O error reading the input or writing the output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Header synthesis failed
    #[error("header error: {0}")]
    Header(#[from] reheader_core::HeaderError),
}
