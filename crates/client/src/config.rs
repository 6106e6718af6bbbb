//! Client configuration from the process environment.
use std::env;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::cli::OutputFormat;

/// File name looked up in the platform config directory.
pub const TABLES_FILE_NAME: &str = "tiers.toml";

/// Settings that can come from the environment (or a `.env` file).
///
/// Command-line flags take precedence over everything here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub tables_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub log_filter: Option<String>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MKMONSTER_TABLES` - Tier table file, .toml or .ron (default: built-in table)
    /// - `MKMONSTER_FORMAT` - Output format, `text` or `json` (default: text)
    /// - `MKMONSTER_LOG` - Log filter directive (default: `RUST_LOG`, then `warn`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.tables_path = lookup("MKMONSTER_TABLES")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        // Unknown formats fall back to the default.
        if let Some(format) =
            lookup("MKMONSTER_FORMAT").and_then(|f| OutputFormat::from_str(&f, true).ok())
        {
            config.format = format;
        }

        config.log_filter = lookup("MKMONSTER_LOG").filter(|filter| !filter.is_empty());

        config
    }

    /// Tier table path in the platform config directory, if one exists there.
    pub fn default_tables_path() -> Option<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "mkmonster")?;
        let path = dirs.config_dir().join(TABLES_FILE_NAME);
        path.is_file().then_some(path)
    }
}
