use thiserror::Error;

/// Errors that can occur while configuring or driving a DATEV writer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatevError {
    /// A required header metadata value was never supplied.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// A row names a field that the active record format does not have.
    #[error("field not in schema: {0:?}")]
    UnknownField(String),

    /// A custom schema lists the same field name more than once.
    #[error("duplicate field in schema: {0:?}")]
    DuplicateField(String),

    /// Copying the finished output into a caller-supplied sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
