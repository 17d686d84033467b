//! Index page and starter slide generation.

mod error;
mod params;
mod renderer;

pub use error::WriteError;
pub use params::{ScaffoldParams, DEFAULT_SLIDE, DEFAULT_THEME, DEFAULT_TITLE};
pub use renderer::{create_handlebars_registry, IndexRenderer, INDEX_TEMPLATE};

use crate::extract::sanitize;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the generated index page.
pub const INDEX_FILE: &str = "index.html";

/// Paths written by [`scaffold`].
#[derive(Debug, Clone)]
pub struct ScaffoldOutput {
    /// Path of the rendered index page.
    pub index_path: PathBuf,

    /// Path of the slide file.
    pub slide_path: PathBuf,
}

/// Writes `index.html` and the slide file into `root`.
///
/// Existing files are overwritten. The slide file's entire content is the
/// title string.
///
/// # Errors
///
/// Returns [`WriteError::UnsafeSlidePath`] if the slide name would land
/// outside `root`, and [`WriteError`] if rendering fails or either file cannot
/// be written.
pub fn scaffold(params: &ScaffoldParams, root: &Path) -> Result<ScaffoldOutput, WriteError> {
    let slide = sanitize(&params.slide).ok_or_else(|| WriteError::UnsafeSlidePath {
        path: params.slide.clone(),
    })?;
    let renderer = IndexRenderer::new()?;
    let html = renderer.render(params)?;

    let index_path = root.join(INDEX_FILE);
    write_file(&index_path, html.as_bytes())?;

    let slide_path = root.join(slide);
    write_file(&slide_path, params.title.as_bytes())?;

    info!(
        index = %index_path.display(),
        slide = %slide_path.display(),
        "Scaffolded slide deck"
    );
    Ok(ScaffoldOutput {
        index_path,
        slide_path,
    })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), WriteError> {
    std::fs::write(path, contents).map_err(|e| WriteError::IoError {
        path: path.display().to_string(),
        source: e,
    })
}
