use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

const CONFIG_DIR: &str = "rusty-du";
const CONFIG_FILE: &str = "config.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
}

/// Defaults for the scan flags. Flags given on the command line win.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Scale sizes to B, KiB, MiB... instead of always using KiB
    pub human_readable: bool,
    /// Print a trailing `Total` line
    pub print_total: bool,
    /// Deepest level to report (-1 = unlimited)
    pub max_depth: i64,
    /// Report files as well as directories
    pub show_files: bool,
    /// Minimum size to report, e.g. "10M"
    pub threshold: String,
    /// Terminate lines with NUL instead of newline
    pub null_terminated: bool,
    /// Hide diagnostics for unreadable entries
    pub suppress_errors: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            human_readable: false,
            print_total: false,
            max_depth: -1,
            show_files: false,
            threshold: "0K".to_string(),
            null_terminated: false,
            suppress_errors: false,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location when no
    /// path is given. A missing default file yields the built-in defaults; a
    /// missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/rusty-du/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    fn from_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.scan.max_depth < -1 {
            return Err(ConfigError::Invalid(format!(
                "max_depth must be -1 or at least 0, got {}",
                self.scan.max_depth
            )));
        }
        Ok(())
    }
}
