//! Folder member listing: the files directly inside one configured folder.

use crate::error::BundleError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Order in which a folder's members are concatenated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryOrder {
    /// Lexicographic by file name
    #[default]
    Name,
    /// Whatever the directory listing yields (not stable across filesystems)
    Listing,
}

impl EntryOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryOrder::Name => "name",
            EntryOrder::Listing => "listing",
        }
    }
}

/// List the entries directly inside `dir` (depth one, no recursion).
///
/// Every entry must be a regular file (symlinks are followed). Anything else
/// fails the listing rather than being skipped.
pub fn list_members(
    folder: &str,
    dir: &Path,
    order: EntryOrder,
) -> Result<Vec<PathBuf>, BundleError> {
    let metadata = fs::metadata(dir).map_err(|source| BundleError::FolderUnreadable {
        folder: folder.to_string(),
        path: dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(BundleError::NotAFolder {
            folder: folder.to_string(),
            path: dir.to_path_buf(),
        });
    }

    let mut walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);
    if order == EntryOrder::Name {
        walker = walker.sort_by_file_name();
    }

    let mut members = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
            BundleError::FolderUnreadable {
                folder: folder.to_string(),
                path,
                source: walk_error(e),
            }
        })?;

        if !entry.file_type().is_file() {
            return Err(BundleError::NotAFile {
                path: entry.into_path(),
            });
        }
        members.push(entry.into_path());
    }

    Ok(members)
}

fn walk_error(err: walkdir::Error) -> std::io::Error {
    let message = err.to_string();
    err.into_io_error()
        .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, message))
}
