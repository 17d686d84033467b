//! Extraction summary.

/// Counts gathered while extracting an archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Name of the archive's top-level entry.
    pub root_prefix: String,

    /// Number of directories created or confirmed.
    pub directories_created: usize,

    /// Number of files written.
    pub files_written: usize,

    /// Number of entries outside the allow-list.
    pub entries_skipped: usize,
}
