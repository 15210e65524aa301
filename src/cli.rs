use clap::{ArgAction, Parser};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

/// Rusty du - summarize disk usage of a directory tree
#[derive(Parser, Debug)]
#[command(name = "rusty-du")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Directory to summarize
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Print sizes in human readable units (B, KiB, MiB, ...)
    #[arg(short = 'h', long)]
    pub human_readable: bool,

    /// Print a trailing total line
    #[arg(short = 't', long)]
    pub total: bool,

    /// Deepest level to print, -1 for unlimited
    #[arg(
        short = 'l',
        long,
        value_name = "N",
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(-1..)
    )]
    pub level: Option<i64>,

    /// Print files as well as directories
    #[arg(short = 'f', long)]
    pub files: bool,

    /// Only print entries larger than SIZE (e.g. 10M, 0K; units B K M G T P).
    /// Also accepted as -th
    #[arg(long, value_name = "SIZE")]
    pub threshold: Option<String>,

    /// End output lines with NUL instead of newline
    #[arg(short = '0', long)]
    pub null: bool,

    /// Do not report unreadable files and directories
    #[arg(short = 's', long)]
    pub silent: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print a completion script for SHELL and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Cli {
    /// Parse the process arguments, accepting the single-dash `-th` spelling.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite `-th` and `-th=SIZE` to `--threshold`, which clap would otherwise
/// read as the bundled flags `-t -h`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some("-th") => OsString::from("--threshold"),
            Some(s) if s.starts_with("-th=") => OsString::from(format!("--threshold={}", &s[4..])),
            _ => arg,
        })
        .collect()
}
