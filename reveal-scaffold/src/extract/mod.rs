//! Release archive extraction.
//!
//! The archive's first entry names its top-level directory. Every other entry
//! is rewritten relative to it and kept only when it falls under one of the
//! [`ALLOWED_PREFIXES`]. Extraction stops at the first error; files written
//! before the failure are left in place.

mod error;
mod filter;
mod summary;

pub use error::ExtractionError;
pub use filter::{is_allowed, relative_entry_path, sanitize, ALLOWED_PREFIXES};
pub use summary::ExtractionSummary;

use std::fs::{self, File};
use std::io::{Read, Seek};
use std::path::Path;
use tracing::{debug, info, info_span, trace, warn};
use zip::ZipArchive;

/// Extracts the allowed subset of the zip archive at `archive_path` into `destination`.
///
/// # Errors
///
/// Returns [`ExtractionError`] if the archive cannot be opened or is empty,
/// or if any destination path cannot be created or written.
pub fn extract_archive(
    archive_path: &Path,
    destination: &Path,
) -> Result<ExtractionSummary, ExtractionError> {
    let file = File::open(archive_path).map_err(|e| ExtractionError::OpenFile {
        path: archive_path.display().to_string(),
        source: e,
    })?;

    extract_from_reader(file, destination)
}

/// Extracts the allowed subset of a zip archive read from `reader` into `destination`.
///
/// # Errors
///
/// See [`extract_archive`].
pub fn extract_from_reader<R: Read + Seek>(
    reader: R,
    destination: &Path,
) -> Result<ExtractionSummary, ExtractionError> {
    let span = info_span!("extract", destination = %destination.display());
    let _guard = span.enter();

    let mut archive = ZipArchive::new(reader)?;
    if archive.is_empty() {
        return Err(ExtractionError::EmptyArchive);
    }

    let root_prefix = archive.by_index(0)?.name().to_string();
    debug!(prefix = %root_prefix, entries = archive.len(), "Opened archive");

    create_dir(destination)?;

    let mut summary = ExtractionSummary {
        root_prefix,
        ..ExtractionSummary::default()
    };

    for index in 1..archive.len() {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_string();
        let relative = relative_entry_path(&name, &summary.root_prefix);

        if !is_allowed(relative) {
            trace!(entry = %name, "Skipping entry");
            summary.entries_skipped += 1;
            continue;
        }

        let Some(relative) = sanitize(relative) else {
            warn!(entry = %name, "Skipping entry with unsafe path");
            summary.entries_skipped += 1;
            continue;
        };
        let target = destination.join(relative);

        if entry.is_dir() {
            create_dir(&target)?;
            summary.directories_created += 1;
            continue;
        }

        if let Some(parent) = target.parent() {
            create_dir(parent)?;
        }

        let mut out = File::create(&target).map_err(|e| ExtractionError::CreateFile {
            path: target.display().to_string(),
            source: e,
        })?;
        std::io::copy(&mut entry, &mut out).map_err(|e| ExtractionError::Copy {
            entry: name.clone(),
            path: target.display().to_string(),
            source: e,
        })?;
        summary.files_written += 1;
    }

    info!(
        directories = summary.directories_created,
        files = summary.files_written,
        skipped = summary.entries_skipped,
        "Extraction complete"
    );
    Ok(summary)
}

/// Creates `path` and its parents; an existing directory is not an error.
fn create_dir(path: &Path) -> Result<(), ExtractionError> {
    fs::create_dir_all(path).map_err(|e| ExtractionError::CreateDir {
        path: path.display().to_string(),
        source: e,
    })
}
