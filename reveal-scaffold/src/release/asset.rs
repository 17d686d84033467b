//! Release asset and upstream repository types.

use std::fmt;
use url::Url;

/// Owner of the upstream slide framework repository.
pub const UPSTREAM_OWNER: &str = "hakimel";

/// Name of the upstream slide framework repository.
pub const UPSTREAM_REPO: &str = "reveal.js";

/// A GitHub repository identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRepository {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl UpstreamRepository {
    /// Creates a repository reference.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Full repository name in "owner/name" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl Default for UpstreamRepository {
    fn default() -> Self {
        Self::new(UPSTREAM_OWNER, UPSTREAM_REPO)
    }
}

impl fmt::Display for UpstreamRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// The source archive of the latest published release.
#[derive(Debug, Clone)]
pub struct ReleaseAsset {
    /// Tag of the release the archive belongs to.
    pub tag: String,

    /// Download URL of the zip archive.
    pub archive_url: Url,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_upstream_is_reveal_js() {
        let upstream = UpstreamRepository::default();
        assert_eq!(upstream.full_name(), "hakimel/reveal.js");
        assert_eq!(upstream.to_string(), "hakimel/reveal.js");
    }
}
