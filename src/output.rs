use crate::constants::{OUTPUT_BASE_NAME, OUTPUT_EXTENSION};
use std::path::{Path, PathBuf};

/// Path of the unsplit output file.
pub fn single_output_path(dir: &Path) -> PathBuf {
    dir.join(format!("{OUTPUT_BASE_NAME}{OUTPUT_EXTENSION}"))
}

/// Path of the `number`-th (1-based) output part.
pub fn part_output_path(
    dir: &Path,
    number: usize,
) -> PathBuf {
    dir.join(format!("{OUTPUT_BASE_NAME}_part{number}{OUTPUT_EXTENSION}"))
}
