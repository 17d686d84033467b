//! Archive download into a temporary file.

use super::FetchError;
use futures::StreamExt;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// User agent sent with every request; api.github.com rejects anonymous agents.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used for archive downloads.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_http_client() -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(FetchError::HttpClient)
}

/// Downloads `url` with a plain GET and streams the body into a temporary file.
///
/// The returned handle deletes the file when dropped.
///
/// # Errors
///
/// Returns [`FetchError::HttpStatus`] for non-success responses, and
/// [`FetchError::Http`] or [`FetchError::TempFile`] for transport and disk failures.
pub async fn download_archive(
    http: &reqwest::Client,
    url: &str,
) -> Result<NamedTempFile, FetchError> {
    info!(url, "Downloading release archive");

    let response = http.get(url).send().await.map_err(|e| FetchError::Http {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let temp = NamedTempFile::new().map_err(FetchError::TempFile)?;
    let mut file = tokio::fs::File::from_std(temp.reopen().map_err(FetchError::TempFile)?);

    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| FetchError::Http {
            url: url.to_string(),
            source: e,
        })?;
        file.write_all(&chunk).await.map_err(FetchError::TempFile)?;
        downloaded += chunk.len() as u64;
    }
    file.flush().await.map_err(FetchError::TempFile)?;

    debug!(
        bytes = downloaded,
        path = %temp.path().display(),
        "Archive downloaded"
    );
    Ok(temp)
}
