//! Archive extraction error types.

use thiserror::Error;

/// Errors that can occur while extracting the release archive.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The archive file could not be opened.
    #[error("Failed to open archive '{path}': {source}")]
    OpenFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The archive is not a readable zip container.
    #[error("Invalid archive: {0}")]
    InvalidArchive(#[from] zip::result::ZipError),

    /// The archive has no entries.
    #[error("Archive contains no entries")]
    EmptyArchive,

    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a destination file.
    #[error("Failed to create file '{path}': {source}")]
    CreateFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Copying an entry's contents was interrupted.
    #[error("Failed to copy archive entry '{entry}' to '{path}': {source}")]
    Copy {
        entry: String,
        path: String,
        #[source]
        source: std::io::Error,
    },
}
