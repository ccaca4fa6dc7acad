use crate::constants::FILE_SEPARATOR;
use crate::context::gather::read_note;
use crate::context::redact::RedactionSet;
pub use crate::context::types::{Aggregate, SkippedFile};
use path_slash::PathExt;
use std::path::{Path, PathBuf};

/// Provenance line placed above each note's contents.
pub fn file_header(
    root: &Path,
    path: &Path,
) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    format!("FILE: {}\n", rel.to_slash_lossy())
}

/// Reads, redacts and concatenates `files` in the order given.
///
/// A file that cannot be read or decoded is skipped with a warning and
/// recorded in [`Aggregate::skipped`]; it never aborts the run.
pub fn aggregate_files(
    root: &Path,
    files: &[PathBuf],
    redactions: &RedactionSet,
) -> Aggregate {
    let mut agg = Aggregate::default();
    for path in files {
        let contents = match read_note(path) {
            Ok(c) => c,
            Err(reason) => {
                tracing::warn!("Skipping {:?}: {}", path, reason);
                agg.skipped.push(SkippedFile {
                    path: path.clone(),
                    reason,
                });
                continue;
            }
        };
        agg.text.push_str(&file_header(root, path));
        agg.text.push_str(&redactions.apply(&contents));
        agg.text.push_str(FILE_SEPARATOR);
        agg.included += 1;
    }
    agg
}

/// Tree render, one separator, then the file blocks.
pub fn assemble(
    tree: &str,
    aggregate: &Aggregate,
) -> String {
    let mut blob = String::with_capacity(tree.len() + FILE_SEPARATOR.len() + aggregate.text.len());
    blob.push_str(tree);
    blob.push_str(FILE_SEPARATOR);
    blob.push_str(&aggregate.text);
    blob
}
