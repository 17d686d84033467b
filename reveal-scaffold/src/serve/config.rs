//! Server configuration.

use super::{ListenAddress, ServerStartError};
use notify::RecursiveMode;
use std::path::{Path, PathBuf};

/// Default listen address.
pub const DEFAULT_ADDRESS: &str = ":8080";

/// Configuration for serving a slide project.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Project root served as static files and watched for changes.
    root: PathBuf,
    /// Listen address.
    address: ListenAddress,
    /// Whether the whole tree is watched instead of the root only.
    recursive: bool,
    /// Whether to open the server URL in the default browser.
    open_browser: bool,
}

impl ServeConfig {
    /// Creates a configuration serving `root` on `address`.
    ///
    /// # Errors
    ///
    /// Returns an error if `address` is not a valid listen address.
    pub fn new(root: PathBuf, address: &str) -> Result<Self, ServerStartError> {
        Ok(Self {
            root,
            address: ListenAddress::parse(address)?,
            recursive: false,
            open_browser: true,
        })
    }

    /// Watches subdirectories as well as the root.
    pub fn with_recursive_watch(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Enables or disables opening the browser on start.
    pub fn with_open_browser(mut self, open_browser: bool) -> Self {
        self.open_browser = open_browser;
        self
    }

    /// Returns the project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the listen address.
    pub fn address(&self) -> &ListenAddress {
        &self.address
    }

    /// Returns the watcher mode.
    pub fn recursive_mode(&self) -> RecursiveMode {
        if self.recursive {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        }
    }

    /// Returns whether the browser is opened on start.
    pub fn open_browser(&self) -> bool {
        self.open_browser
    }
}
