//! Rate limit checks for the GitHub REST API.
//!
//! Unauthenticated clients get a small hourly budget, so the fetch fails fast
//! with the reset time instead of surfacing an opaque API error.

use super::FetchError;
use octocrab::Octocrab;
use tracing::{debug, warn};

/// Rate limit information for the core API.
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,
    /// Unix timestamp when the rate limit resets.
    pub reset: u64,
    /// Total requests allowed per window.
    pub limit: u32,
}

/// Checks the current rate limit status for the core API.
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: u32::try_from(core.remaining).unwrap_or(u32::MAX),
        reset: core.reset,
        limit: u32::try_from(core.limit).unwrap_or(u32::MAX),
    })
}

/// Fails when no core API requests remain in the current window.
///
/// # Errors
///
/// Returns [`FetchError::RateLimitExceeded`] when the budget is exhausted.
pub fn ensure_requests_remaining(info: &RateLimitInfo) -> Result<(), FetchError> {
    if info.remaining == 0 {
        warn!(
            limit = info.limit,
            reset_at = info.reset,
            "GitHub API rate limit exhausted; set GITHUB_TOKEN to raise it"
        );
        return Err(FetchError::RateLimitExceeded {
            reset_at: info.reset,
        });
    }

    debug!(
        remaining = info.remaining,
        limit = info.limit,
        "GitHub API rate limit"
    );
    Ok(())
}
