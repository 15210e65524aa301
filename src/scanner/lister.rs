use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{DuError, Result};

use super::entry::{DirEntry, EntryInfo};

/// Access to directory listings and per-entry metadata.
///
/// The walker only needs these two operations, so anything that can answer
/// them (the real filesystem, an in-memory tree in tests) can be scanned.
pub trait DirLister {
    /// List the immediate children of `dir`, sorted by name.
    fn read_dir(&self, dir: &Path) -> Result<Vec<DirEntry>>;

    /// Resolve the metadata of the entry at `path` without following links.
    fn metadata(&self, path: &Path) -> Result<EntryInfo>;
}

/// Lists the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl FsLister {
    pub fn new() -> Self {
        Self
    }
}

impl DirLister for FsLister {
    fn read_dir(&self, dir: &Path) -> Result<Vec<DirEntry>> {
        let walker = WalkDir::new(dir)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        let mut entries = Vec::new();

        for result in walker {
            match result {
                Ok(entry) if entry.depth() == 0 => {
                    if !entry.file_type().is_dir() {
                        let source =
                            io::Error::new(io::ErrorKind::NotADirectory, "Not a directory");
                        return Err(DuError::io(dir, source));
                    }
                }
                Ok(entry) => entries.push(DirEntry {
                    name: entry.file_name().to_os_string(),
                    is_dir: entry.file_type().is_dir(),
                }),
                // Failing to open the directory itself fails the whole listing
                Err(err) if err.depth() == 0 => {
                    return Err(DuError::io(dir, err.into()));
                }
                Err(err) => {
                    tracing::debug!(error = %err, "Skipping unlistable entry");
                }
            }
        }

        Ok(entries)
    }

    fn metadata(&self, path: &Path) -> Result<EntryInfo> {
        let metadata = fs::symlink_metadata(path).map_err(|e| DuError::io(path, e))?;
        Ok(EntryInfo {
            size: metadata.len(),
        })
    }
}
