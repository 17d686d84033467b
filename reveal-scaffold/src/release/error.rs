//! Release fetch error types.

use thiserror::Error;

/// Errors that can occur while resolving or downloading the release archive.
#[derive(Debug, Error)]
pub enum FetchError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, reset at {reset_at}")]
    RateLimitExceeded { reset_at: u64 },

    /// The latest release carries no source archive.
    #[error("Release '{tag}' of {repository} has no zip archive")]
    MissingArchive { repository: String, tag: String },

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Transport-level HTTP failure.
    #[error("Failed to download '{url}': {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The archive host answered with a non-success status.
    #[error("Download of '{url}' failed with HTTP status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to create or write the temporary archive file.
    #[error("Failed to write temporary archive: {0}")]
    TempFile(#[source] std::io::Error),
}
