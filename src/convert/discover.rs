//! Input-file discovery inside a test directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Find the input file whose name ends with `suffix` inside `dir`.
///
/// Candidates are sorted by file name so the choice is deterministic across
/// platforms. With more than one candidate a warning names the file used;
/// with none the lookup fails.
pub fn find_file(dir: &Path, suffix: &str) -> Result<PathBuf> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(suffix))
        })
        .collect();
    candidates.sort();

    match candidates.first() {
        None => Err(Error::MissingInput(suffix.to_string())),
        Some(first) => {
            if candidates.len() > 1 {
                log::warn!(
                    "more than one \"{}\" file found, using {}",
                    suffix,
                    first.display()
                );
            }
            Ok(first.clone())
        }
    }
}
