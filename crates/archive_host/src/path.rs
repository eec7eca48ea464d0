//! Canonical archive-path helpers shared across host abstractions.
//!
//! Every path that enters the client — typed by a user, returned by the backend, or constructed
//! by joining a folder with a new leaf name — passes through [`normalize_archive_path`] before it
//! is stored, compared, or sent back to the backend.

/// Root marker every canonical archive path starts with.
pub const ARCHIVE_ROOT: &str = "Archive";

/// Normalizes an arbitrary path string into the canonical archive-rooted form.
///
/// Backslash separators become `/`. If the literal root marker occurs anywhere in the input
/// (legacy backends hand back OS-native absolute paths), everything before its first occurrence
/// is dropped so the marker starts the string; otherwise the marker is prefixed. Duplicate
/// separators collapse and the result never ends in a separator. Empty or whitespace-only input
/// yields the bare root marker.
pub fn normalize_archive_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ARCHIVE_ROOT.to_string();
    }

    let unified = trimmed.replace('\\', "/");
    let rooted = match unified.find(ARCHIVE_ROOT) {
        Some(idx) => unified[idx..].to_string(),
        None => format!("{ARCHIVE_ROOT}/{unified}"),
    };

    let mut out = String::new();
    for segment in rooted.split('/') {
        if segment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(segment);
    }

    if out.is_empty() {
        ARCHIVE_ROOT.to_string()
    } else {
        out
    }
}

/// Returns the canonical parent of `path`.
///
/// The root is its own parent — a fixed point, not an error.
pub fn parent_path(path: &str) -> String {
    let canonical = normalize_archive_path(path);
    match canonical.rfind('/') {
        Some(idx) => canonical[..idx].to_string(),
        None => canonical,
    }
}

/// Returns the leaf segment of `path`, used as the default value offered when renaming.
pub fn leaf_name(path: &str) -> String {
    let canonical = normalize_archive_path(path);
    canonical
        .rsplit('/')
        .next()
        .unwrap_or(ARCHIVE_ROOT)
        .to_string()
}

/// Joins a folder path with a new leaf name and canonicalizes the result.
pub fn join_child(parent: &str, leaf: &str) -> String {
    normalize_archive_path(&format!("{}/{}", normalize_archive_path(parent), leaf))
}

/// Returns `true` when `path` equals `ancestor` or lives anywhere below it.
///
/// Used to decide whether a folder mutation invalidated the folder currently on display.
pub fn is_same_or_descendant(path: &str, ancestor: &str) -> bool {
    let path = normalize_archive_path(path);
    let ancestor = normalize_archive_path(ancestor);
    path == ancestor
        || path
            .strip_prefix(ancestor.as_str())
            .map(|rest| rest.starts_with('/'))
            .unwrap_or(false)
}
