//! Tier table loader.

use std::path::Path;

use monster_core::TierTable;

use crate::BUNDLED_TIERS_TOML;
use crate::loaders::{LoadResult, read_file};

/// On-disk format of a tier table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Toml,
    Ron,
}

impl TableFormat {
    /// Picks the format from a file extension (`.toml` or `.ron`).
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Ok(Self::Ron),
            _ => Err(anyhow::anyhow!(
                "Unsupported tier table format for {} (expected .toml or .ron)",
                path.display()
            )),
        }
    }
}

/// Loader for tier tables.
pub struct TablesLoader;

impl TablesLoader {
    /// Load a tier table from a TOML or RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the table file; the extension selects the format
    ///
    /// # Returns
    ///
    /// Returns a validated TierTable.
    pub fn load(path: &Path) -> LoadResult<TierTable> {
        let format = TableFormat::from_path(path)?;
        let content = read_file(path)?;
        let table = Self::parse(&content, format)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::debug!(path = %path.display(), ?format, "Loaded tier table");
        Ok(table)
    }

    /// Parse a tier table from source text.
    pub fn parse(content: &str, format: TableFormat) -> LoadResult<TierTable> {
        let table = match format {
            TableFormat::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse tier table TOML: {}", e))?,
            TableFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse tier table RON: {}", e))?,
        };
        Ok(table)
    }

    /// The canonical table bundled with this crate.
    pub fn bundled() -> LoadResult<TierTable> {
        Self::parse(BUNDLED_TIERS_TOML, TableFormat::Toml)
    }
}
