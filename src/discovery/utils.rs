use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::IoError;

/// Regular files under `root` whose name ends in `.{extension}`.
///
/// The result is sorted lexicographically so that runs over an unchanged
/// tree see files in the same order. A root that is itself a matching file
/// yields just that file. Symlinks are followed. Unreadable entries below
/// the root are logged and skipped; a missing root is an error.
pub fn walk_source_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, IoError> {
    if !root.exists() {
        return Err(IoError::directory_not_found(root));
    }

    let suffix = format!(".{extension}");
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(&suffix) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!(root = %root.display(), files = files.len(), "discovered source files");
    Ok(files)
}
