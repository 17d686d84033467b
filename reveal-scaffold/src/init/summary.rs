//! Init summary.

use crate::extract::ExtractionSummary;
use crate::scaffold::ScaffoldOutput;

/// Result of a successful init run.
#[derive(Debug, Clone)]
pub struct InitSummary {
    /// Tag of the release that was installed.
    pub release_tag: String,

    /// URL the archive was downloaded from.
    pub archive_url: String,

    /// Extraction counts.
    pub extraction: ExtractionSummary,

    /// Files written by the scaffolder.
    pub output: ScaffoldOutput,
}
