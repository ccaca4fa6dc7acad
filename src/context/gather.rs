pub use crate::context::types::{SkipReason, SkippedFile};

use std::{
    fs,
    path::{Path, PathBuf},
};

use ignore::WalkBuilder;

/// Returns every file under `root` whose name ends with `extension`.
///
/// Hidden directories are visited and ignore files are not consulted: the
/// vault is taken as-is. Symlinks to files are kept; symlinked directories
/// are not followed. Paths come back in the order the filesystem
/// enumerates them.
pub fn gather_note_paths(
    root: &Path,
    extension: &str,
) -> Vec<PathBuf> {
    let mut results = Vec::new();

    let walker = WalkBuilder::new(root)
        .follow_links(false)
        .standard_filters(false)
        .build();

    for entry_result in walker {
        match entry_result {
            Ok(entry) => {
                // symlinked directories are not descended, but a link to a file is a note
                let is_note_file = match entry.file_type() {
                    Some(ft) if ft.is_symlink() => entry.path().is_file(),
                    Some(ft) => ft.is_file(),
                    None => false,
                };
                if !is_note_file {
                    continue;
                }
                if entry.file_name().to_string_lossy().ends_with(extension) {
                    results.push(entry.into_path());
                }
            }
            Err(e) => {
                tracing::warn!("Could not process entry in {:?}: {}", root, e);
            }
        }
    }

    tracing::debug!(count = results.len(), "discovered note files");
    results
}

/// Reads one note as strict UTF-8.
pub fn read_note(path: &Path) -> Result<String, SkipReason> {
    let content_bytes = fs::read(path).map_err(|e| SkipReason::Io(e.to_string()))?;
    String::from_utf8(content_bytes).map_err(|e| SkipReason::Decode(e.utf8_error().to_string()))
}
