//! Recursive search for files by exact name

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::InvalidArgument;

/// Find every regular file named exactly `file_name` under `directory`.
///
/// The walk is depth-first: each subdirectory is searched completely before
/// its later siblings. Returned paths are absolute and follow the order of
/// the directory listings. Name comparison is case-sensitive and exact.
/// Directories are never matched. Symlinks are followed, so a link to a
/// regular file can match and a link to a directory is searched; the path
/// reported is the link's own path. Subtrees that cannot be read, dangling
/// links, and link cycles contribute no results.
///
/// # Arguments
/// * `directory` - Root of the search; must name an existing directory
/// * `file_name` - File name to match; must not be blank
///
/// # Errors
/// [`InvalidArgument`] for a blank path or name, a missing path, or a path
/// that is not a directory. Nothing is traversed in those cases.
pub fn find(directory: impl AsRef<Path>, file_name: &str) -> Result<Vec<PathBuf>, InvalidArgument> {
    find_with_progress(directory, file_name, |_| {})
}

/// Same as [`find`], calling `on_dir` with each directory as it is entered
/// (the root first).
pub fn find_with_progress<F>(
    directory: impl AsRef<Path>,
    file_name: &str,
    mut on_dir: F,
) -> Result<Vec<PathBuf>, InvalidArgument>
where
    F: FnMut(&Path),
{
    let root = validate_root(directory.as_ref(), file_name)?;
    let target = OsStr::new(file_name);

    let mut found = Vec::new();
    let mut skipped = 0usize;
    on_dir(&root);

    for entry in WalkDir::new(&root).follow_links(true).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                skipped += 1;
                tracing::debug!(
                    path = ?e.path(),
                    error = %e,
                    "skipping unreadable entry"
                );
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            on_dir(entry.path());
        } else if file_type.is_file() && entry.file_name() == target {
            found.push(entry.into_path());
        }
    }

    tracing::debug!(
        root = %root.display(),
        file_name,
        matches = found.len(),
        skipped,
        "file search finished"
    );
    Ok(found)
}

/// Check the arguments and return the root as an absolute path.
fn validate_root(directory: &Path, file_name: &str) -> Result<PathBuf, InvalidArgument> {
    if directory.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(InvalidArgument::EmptyDirectoryPath);
    }
    if file_name.trim().is_empty() {
        return Err(InvalidArgument::EmptyFileName);
    }

    let root = std::path::absolute(directory)
        .map_err(|_| InvalidArgument::DirectoryNotFound(directory.to_path_buf()))?;

    if !root.exists() {
        return Err(InvalidArgument::DirectoryNotFound(directory.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(InvalidArgument::NotADirectory(directory.to_path_buf()));
    }

    Ok(root)
}
