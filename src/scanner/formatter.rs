use std::io::{self, Write};
use std::path::Path;

use crate::error::DuError;

use super::options::{LineTerminator, ScanOptions};
use super::size::format_size;

const TOTAL_LABEL: &str = "Total";

/// Writes report lines to the output sink and diagnostics to the error sink.
pub struct Reporter<W: Write, E: Write> {
    out: W,
    err: E,
    human_readable: bool,
    terminator: LineTerminator,
    suppress_errors: bool,
}

impl<W: Write, E: Write> Reporter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self {
            out,
            err,
            human_readable: false,
            terminator: LineTerminator::Newline,
            suppress_errors: false,
        }
    }

    /// Reporter configured for the output settings of a scan.
    pub fn from_options(out: W, err: E, options: &ScanOptions) -> Self {
        Self::new(out, err)
            .with_human_readable(options.human_readable)
            .with_terminator(options.terminator)
            .with_suppress_errors(options.suppress_errors)
    }

    pub fn with_human_readable(mut self, enabled: bool) -> Self {
        self.human_readable = enabled;
        self
    }

    pub fn with_terminator(mut self, terminator: LineTerminator) -> Self {
        self.terminator = terminator;
        self
    }

    pub fn with_suppress_errors(mut self, enabled: bool) -> Self {
        self.suppress_errors = enabled;
        self
    }

    /// Write `<size>\t<path><terminator>`.
    pub fn emit(&mut self, size: u64, path: &Path) -> io::Result<()> {
        let line = format_size(size as f64, self.human_readable);
        write!(
            self.out,
            "{}\t{}{}",
            line,
            path.display(),
            self.terminator.as_str()
        )
    }

    /// Write the trailing `Total` line.
    pub fn emit_total(&mut self, size: u64) -> io::Result<()> {
        let line = format_size(size as f64, self.human_readable);
        write!(
            self.out,
            "{}\t{}{}",
            line,
            TOTAL_LABEL,
            self.terminator.as_str()
        )
    }

    /// Report a recoverable traversal error unless diagnostics are suppressed.
    pub fn diagnostic(&mut self, error: &DuError) {
        tracing::debug!(%error, "Skipping entry");

        if self.suppress_errors {
            return;
        }
        // A broken error channel must not end the scan
        let _ = writeln!(self.err, "{}: {}", env!("CARGO_PKG_NAME"), error);
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    /// Consume the reporter, handing back both sinks.
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}
