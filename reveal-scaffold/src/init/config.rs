//! Init configuration.

use crate::release::UpstreamRepository;
use crate::scaffold::ScaffoldParams;
use std::path::{Path, PathBuf};

/// Configuration for initializing a slide project.
#[derive(Debug, Clone)]
pub struct InitConfig {
    /// Project root receiving the extracted and generated files.
    root: PathBuf,
    /// Index page and slide file parameters.
    params: ScaffoldParams,
    /// Optional GitHub token for the release lookup.
    token: Option<String>,
    /// Repository the release archive is taken from.
    upstream: UpstreamRepository,
    /// GitHub API base URI; `None` means api.github.com.
    api_base: Option<String>,
}

impl InitConfig {
    /// Creates a new configuration for a project root.
    pub fn new(root: PathBuf, params: ScaffoldParams) -> Self {
        Self {
            root,
            params,
            token: None,
            upstream: UpstreamRepository::default(),
            api_base: None,
        }
    }

    /// Sets a GitHub token used to authenticate the release lookup.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets a different upstream repository.
    pub fn with_upstream(mut self, upstream: UpstreamRepository) -> Self {
        self.upstream = upstream;
        self
    }

    /// Sets the GitHub API base URI.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Returns the project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the scaffold parameters.
    pub fn params(&self) -> &ScaffoldParams {
        &self.params
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the upstream repository.
    pub fn upstream(&self) -> &UpstreamRepository {
        &self.upstream
    }

    /// Returns the GitHub API base URI override.
    pub fn api_base(&self) -> Option<&str> {
        self.api_base.as_deref()
    }
}
