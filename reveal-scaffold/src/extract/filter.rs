//! Entry path rewriting and the top-level allow-list.

use std::path::{Component, Path, PathBuf};

/// Top-level names kept from the release archive.
pub const ALLOWED_PREFIXES: [&str; 4] = ["js", "css", "lib", "plugin"];

/// Returns `name` relative to the archive's top-level entry `prefix`.
///
/// Only a leading `prefix` followed by a path separator is removed; names
/// outside the prefix are returned unchanged.
#[must_use]
pub fn relative_entry_path<'a>(name: &'a str, prefix: &str) -> &'a str {
    let top = prefix.trim_end_matches('/');
    if top.is_empty() {
        return name;
    }

    name.strip_prefix(top)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(name)
}

/// Returns true if `relative` starts with one of [`ALLOWED_PREFIXES`].
///
/// This is a plain string prefix test, so `jsx/` passes as `js`.
#[must_use]
pub fn is_allowed(relative: &str) -> bool {
    ALLOWED_PREFIXES
        .iter()
        .any(|prefix| relative.starts_with(prefix))
}

/// Converts a relative entry path into a path that cannot leave the destination.
///
/// Returns `None` for empty, absolute, or parent-referencing paths.
#[must_use]
pub fn sanitize(relative: &str) -> Option<PathBuf> {
    let mut path = PathBuf::new();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if path.as_os_str().is_empty() {
        None
    } else {
        Some(path)
    }
}
