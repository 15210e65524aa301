use std::ffi::OsString;

/// One name returned by a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Entry name (last component of its path)
    pub name: OsString,

    /// True if this is a directory. Symbolic links are never directories.
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new_file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn new_dir(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Metadata resolved for a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryInfo {
    /// Intrinsic size for files; size of the directory record itself for
    /// directories, not of their contents
    pub size: u64,
}
