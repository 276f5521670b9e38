//! Error types for plandoc library.

use std::io;
use thiserror::Error;

/// Result type alias for plandoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while laying out or exporting a plan.
///
/// Parsing and style resolution are total and never produce an error.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The page geometry cannot hold any content.
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    /// Error serializing the document (PDF, JSON).
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Configuration could not be loaded.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The platform save mechanism rejected the artifact.
    #[error("Save failed: {0}")]
    Save(String),

    /// The clipboard rejected the copied text.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Save(err.to_string())
    }
}
