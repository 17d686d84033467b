//! Latest-release lookup and archive retrieval.
//!
//! The archive URL comes from the GitHub releases API; the archive itself is
//! fetched with a plain HTTP GET into a self-deleting temporary file.

mod asset;
mod download;
mod error;
mod rate_limit;

pub use asset::{ReleaseAsset, UpstreamRepository, UPSTREAM_OWNER, UPSTREAM_REPO};
pub use download::{build_http_client, download_archive, USER_AGENT};
pub use error::FetchError;
pub use rate_limit::{check_core_rate_limit, ensure_requests_remaining, RateLimitInfo};

use octocrab::Octocrab;
use tempfile::NamedTempFile;
use tracing::{info, info_span, Instrument};

/// Builds a GitHub client, authenticated when a token is given.
///
/// `api_base` replaces `https://api.github.com`, e.g. for GitHub Enterprise.
///
/// # Errors
///
/// Returns an error if `api_base` is not a valid URI or the client cannot be
/// constructed.
pub fn build_github_client(
    token: Option<&str>,
    api_base: Option<&str>,
) -> Result<Octocrab, FetchError> {
    let mut builder = Octocrab::builder();
    if let Some(token) = token {
        builder = builder.personal_token(token.to_string());
    }
    if let Some(api_base) = api_base {
        builder = builder.base_uri(api_base)?;
    }
    Ok(builder.build()?)
}

/// Resolves the zip archive of the latest release of `upstream`.
///
/// # Errors
///
/// Returns [`FetchError`] if the rate limit is exhausted, the lookup fails,
/// or the release has no zip archive.
pub async fn resolve_latest_release(
    octocrab: &Octocrab,
    upstream: &UpstreamRepository,
) -> Result<ReleaseAsset, FetchError> {
    let span = info_span!("resolve_release", repo = %upstream);

    async {
        let rate_limit = check_core_rate_limit(octocrab).await?;
        ensure_requests_remaining(&rate_limit)?;

        let release = octocrab
            .repos(&upstream.owner, &upstream.name)
            .releases()
            .get_latest()
            .await?;

        let archive_url = release
            .zipball_url
            .ok_or_else(|| FetchError::MissingArchive {
                repository: upstream.full_name(),
                tag: release.tag_name.clone(),
            })?;

        info!(tag = %release.tag_name, url = %archive_url, "Resolved latest release");
        Ok(ReleaseAsset {
            tag: release.tag_name,
            archive_url,
        })
    }
    .instrument(span)
    .await
}

/// Resolves and downloads the latest release archive of `upstream`.
///
/// # Errors
///
/// Returns [`FetchError`] if either the lookup or the download fails.
pub async fn fetch_latest_archive(
    octocrab: &Octocrab,
    http: &reqwest::Client,
    upstream: &UpstreamRepository,
) -> Result<(ReleaseAsset, NamedTempFile), FetchError> {
    let asset = resolve_latest_release(octocrab, upstream).await?;
    let archive = download_archive(http, asset.archive_url.as_str()).await?;
    Ok((asset, archive))
}
