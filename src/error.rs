//! Error types for samdoc.

use std::io;
use thiserror::Error;

/// Result type alias for samdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or writing documentation.
#[derive(Error, Debug)]
pub enum Error {
    /// The document-authoring backend was not compiled into this build.
    #[error("Missing capability '{capability}'. {hint}")]
    MissingCapability {
        /// Name of the missing backend
        capability: &'static str,
        /// How to enable it
        hint: &'static str,
    },

    /// I/O error when writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The DOCX package could not be assembled.
    #[error("DOCX packaging error: {0}")]
    Package(String),

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// A timestamp string did not match `YYYY-MM-DD HH:MM`.
    #[error("Invalid timestamp: {0} (expected YYYY-MM-DD HH:MM)")]
    InvalidTimestamp(String),
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io(err.error)
    }
}
