//! Scaffold parameters.

/// Default deck title.
pub const DEFAULT_TITLE: &str = "no title";

/// Default reveal.js theme.
pub const DEFAULT_THEME: &str = "black";

/// Default slide file name.
pub const DEFAULT_SLIDE: &str = "slide.md";

/// User-supplied values for the index page and slide file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldParams {
    /// Deck title; also the initial content of the slide file.
    pub title: String,

    /// Theme stylesheet name under `css/theme/`.
    pub theme: String,

    /// Slide file name, relative to the project root.
    pub slide: String,
}

impl ScaffoldParams {
    /// Creates parameters from explicit values.
    pub fn new(
        title: impl Into<String>,
        theme: impl Into<String>,
        slide: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            theme: theme.into(),
            slide: slide.into(),
        }
    }
}

impl Default for ScaffoldParams {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_THEME, DEFAULT_SLIDE)
    }
}
