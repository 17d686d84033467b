//! Orchestrates project initialization: fetch, extract, scaffold.

mod config;
mod error;
mod summary;

pub use config::InitConfig;
pub use error::InitError;
pub use summary::InitSummary;

use crate::extract::{extract_archive, ExtractionSummary};
use crate::release::{build_github_client, build_http_client, fetch_latest_archive};
use crate::scaffold::scaffold;
use octocrab::Octocrab;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::info;

/// Runs the init flow against a project root.
pub struct Initializer {
    config: InitConfig,
    octocrab: Octocrab,
    http: reqwest::Client,
}

impl Initializer {
    /// Builds an initializer from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the GitHub or HTTP client cannot be built.
    pub fn new(config: InitConfig) -> Result<Self, InitError> {
        let octocrab = build_github_client(config.token(), config.api_base())?;
        let http = build_http_client()?;
        Ok(Self {
            config,
            octocrab,
            http,
        })
    }

    /// Executes fetch, extraction and scaffolding in order.
    ///
    /// The first failure aborts the run. Files already written stay on disk.
    ///
    /// # Errors
    ///
    /// Returns [`InitError`] wrapping the failing stage's error.
    pub async fn run(&self) -> Result<InitSummary, InitError> {
        let root = self.config.root();
        info!(
            root = %root.display(),
            upstream = %self.config.upstream(),
            "Initializing slide project"
        );

        let (asset, archive) =
            fetch_latest_archive(&self.octocrab, &self.http, self.config.upstream()).await?;

        let extraction = extract_in_background(archive, root.to_path_buf()).await?;
        let output = scaffold(self.config.params(), root)?;

        Ok(InitSummary {
            release_tag: asset.tag,
            archive_url: asset.archive_url.to_string(),
            extraction,
            output,
        })
    }
}

/// Extracts on the blocking pool; the temporary archive is deleted afterwards.
async fn extract_in_background(
    archive: NamedTempFile,
    root: PathBuf,
) -> Result<ExtractionSummary, InitError> {
    let summary =
        tokio::task::spawn_blocking(move || extract_archive(archive.path(), &root)).await??;
    Ok(summary)
}
