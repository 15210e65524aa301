//! Scan command implementation

use std::io::{self, BufWriter};

use crate::cli::Cli;
use crate::config::ScanConfig;
use crate::error::{ConfigError, Result};
use crate::scanner::{
    parse_threshold, scan_directory, Depth, FsLister, LineTerminator, Reporter, ScanOptions,
};

/// Merge command-line flags over the configured defaults. The threshold is
/// parsed here so an invalid one stops the run before anything is scanned.
pub fn resolve_options(cli: &Cli, config: &ScanConfig) -> Result<ScanOptions> {
    let level = cli.level.unwrap_or(config.max_depth);
    let max_depth = Depth::from_level(level).ok_or_else(|| {
        ConfigError::Invalid(format!("level must be -1 or at least 0, got {}", level))
    })?;

    let threshold = parse_threshold(cli.threshold.as_deref().unwrap_or(&config.threshold))?;

    let terminator = if cli.null || config.null_terminated {
        LineTerminator::Nul
    } else {
        LineTerminator::Newline
    };

    Ok(ScanOptions::new()
        .with_human_readable(cli.human_readable || config.human_readable)
        .with_total(cli.total || config.print_total)
        .with_max_depth(max_depth)
        .with_files(cli.files || config.show_files)
        .with_threshold(threshold)
        .with_terminator(terminator)
        .with_suppress_errors(cli.silent || config.suppress_errors))
}

/// Run the scan command, writing the report to stdout
pub fn run(cli: &Cli, config: &ScanConfig) -> Result<u64> {
    let options = resolve_options(cli, config)?;
    tracing::debug!(?options, "Resolved scan options");

    let stdout = BufWriter::new(io::stdout().lock());
    let mut reporter = Reporter::from_options(stdout, io::stderr(), &options);

    scan_directory(&FsLister::new(), &cli.path, &options, &mut reporter)
}
