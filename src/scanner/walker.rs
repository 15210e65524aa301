use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{DuError, Result};

use super::entry::DirEntry;
use super::formatter::Reporter;
use super::lister::DirLister;
use super::options::{Depth, ScanOptions};

/// `/proc/kcore` reports the size of the whole address space. Regular files
/// with this name above 10 MiB are treated as that pseudo-file and skipped.
const KCORE_NAME: &str = "kcore";
const KCORE_SIZE_LIMIT: u64 = 10 * 1024 * 1024;

/// Scan the tree below `root`, reporting every qualifying entry and the root
/// summary line. Returns the aggregated size of the tree.
///
/// Failures to read individual entries (or the root itself) are reported as
/// diagnostics and do not stop the scan; only a failure to write the report
/// is returned as an error.
pub fn scan_directory<L, W, E>(
    lister: &L,
    root: &Path,
    options: &ScanOptions,
    reporter: &mut Reporter<W, E>,
) -> Result<u64>
where
    L: DirLister,
    W: Write,
    E: Write,
{
    let root = normalize_root(root)?;
    tracing::info!(path = %root.display(), "Scanning directory");

    let entries = match lister.read_dir(&root) {
        Ok(entries) => entries,
        Err(err) => {
            reporter.diagnostic(&err);
            Vec::new()
        }
    };

    let mut walker = Walker {
        lister,
        options,
        reporter,
    };
    let total = walker.walk(entries, &root, options.max_depth)?;

    let reporter = walker.reporter;
    reporter.emit(total, &root).map_err(DuError::Output)?;
    if options.print_total {
        reporter.emit_total(total).map_err(DuError::Output)?;
    }
    reporter.flush().map_err(DuError::Output)?;

    tracing::info!(path = %root.display(), total, "Scan complete");
    Ok(total)
}

/// Drop trailing separators; `/` stays `/`. Non UTF-8 paths are kept as given.
fn normalize_root(root: &Path) -> Result<PathBuf> {
    if root.as_os_str().is_empty() {
        return Err(DuError::InvalidPath("empty path".to_string()));
    }
    let Some(s) = root.to_str() else {
        return Ok(root.to_path_buf());
    };
    let trimmed = s.trim_end_matches('/');
    if trimmed.is_empty() {
        Ok(PathBuf::from("/"))
    } else {
        Ok(PathBuf::from(trimmed))
    }
}

struct Walker<'a, L, W: Write, E: Write> {
    lister: &'a L,
    options: &'a ScanOptions,
    reporter: &'a mut Reporter<W, E>,
}

impl<L: DirLister, W: Write, E: Write> Walker<'_, L, W, E> {
    /// Sum the sizes of `entries` (recursing into directories), reporting
    /// each one that is within `depth` and above the threshold. Lines are
    /// written post-order: a directory after everything below it.
    fn walk(&mut self, entries: Vec<DirEntry>, path: &Path, depth: Depth) -> Result<u64> {
        let depth = depth.descend();
        let mut total = 0u64;

        for entry in entries {
            let child_path = path.join(&entry.name);

            let info = match self.lister.metadata(&child_path) {
                Ok(info) => info,
                Err(err) => {
                    self.reporter.diagnostic(&err);
                    continue;
                }
            };

            let mut size = info.size;
            let printable = if entry.is_dir {
                match self.lister.read_dir(&child_path) {
                    Ok(children) => {
                        size = size.saturating_add(self.walk(children, &child_path, depth)?);
                    }
                    // Counted as an empty directory
                    Err(err) => self.reporter.diagnostic(&err),
                }
                depth.allows_print()
            } else {
                if entry.name == KCORE_NAME && size > KCORE_SIZE_LIMIT {
                    tracing::debug!(path = %child_path.display(), size, "Skipping kcore pseudo-file");
                    continue;
                }
                self.options.show_files && depth.allows_print()
            };

            total = total.saturating_add(size);

            if printable && size > self.options.threshold {
                self.reporter
                    .emit(size, &child_path)
                    .map_err(DuError::Output)?;
            }
        }

        Ok(total)
    }
}
