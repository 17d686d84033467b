//! Init error types.

/// Errors that can occur while initializing a slide project.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// Release lookup or download errors.
    #[error(transparent)]
    Fetch(#[from] crate::release::FetchError),

    /// Archive extraction errors.
    #[error(transparent)]
    Extraction(#[from] crate::extract::ExtractionError),

    /// Index page and slide file errors.
    #[error(transparent)]
    Write(#[from] crate::scaffold::WriteError),

    /// The blocking extraction task panicked or was cancelled.
    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
