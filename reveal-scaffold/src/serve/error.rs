//! Server error types.

use thiserror::Error;

/// Errors that prevent the server from starting or keep it from listening.
#[derive(Debug, Error)]
pub enum ServerStartError {
    /// The listen address could not be parsed.
    #[error("Invalid listen address '{address}': {message}")]
    InvalidAddress { address: String, message: String },

    /// The project root does not exist or cannot be resolved.
    #[error("Failed to resolve project root '{path}': {source}")]
    Root {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to bind the listening socket.
    #[error("Failed to bind '{address}': {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to build the browser URL.
    #[error("Invalid server URL: {0}")]
    Url(#[from] url::ParseError),

    /// Failed to create the filesystem watcher or register the root.
    #[error("Failed to watch '{path}': {source}")]
    Watch {
        path: String,
        #[source]
        source: notify::Error,
    },

    /// The listener failed while serving.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
