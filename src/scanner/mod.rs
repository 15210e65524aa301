mod entry;
mod formatter;
mod lister;
mod options;
mod size;
mod walker;

pub use entry::{DirEntry, EntryInfo};
pub use formatter::Reporter;
pub use lister::{DirLister, FsLister};
pub use options::{Depth, LineTerminator, ScanOptions};
pub use size::{format_size, parse_threshold};
pub use walker::scan_directory;
