pub mod check;
pub mod generate;
pub mod update;

use std::path::Path;

/// Display form of a document path relative to the docs root, with forward
/// slashes regardless of platform.
pub(crate) fn rel_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
