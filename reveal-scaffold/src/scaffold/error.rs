//! Scaffold write error types.

/// Errors that can occur while writing the index page and slide file.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Template registration error.
    #[error("Template registration error: {0}")]
    RegistrationError(#[from] handlebars::TemplateError),

    /// The slide file name is empty, absolute, or leaves the project root.
    #[error("Slide path '{path}' must be relative to the project root")]
    UnsafeSlidePath { path: String },

    /// Failed to write a file.
    #[error("Failed to write file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
