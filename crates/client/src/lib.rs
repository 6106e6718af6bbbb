//! Command-line client for the monster stat block engine.
//!
//! `main.rs` only wires configuration and logging; [`run`] does the work so
//! it can be tested without a process boundary.
pub mod cli;
pub mod config;
pub mod logging;
pub mod presentation;

use std::path::PathBuf;

use anyhow::Result;
use monster_content::TablesLoader;
use monster_core::{MonsterStatBlock, TierTable};

use crate::cli::Cli;
use crate::config::ClientConfig;

/// Builds the stat block described by `cli` and renders it.
pub fn run(cli: &Cli, config: &ClientConfig) -> Result<String> {
    let table = resolve_table(cli, config)?;
    let request = cli.to_request()?;
    let block = MonsterStatBlock::assemble(&table, &request)?;

    tracing::info!(
        name = block.name(),
        tier = %block.tier(),
        count = block.count().count,
        threat = block.threat().value(),
        "Assembled stat block"
    );

    let format = cli.format.unwrap_or(config.format);
    presentation::render(&block, format)
}

/// Picks the tier table: `--tables`, then `MKMONSTER_TABLES`, then the config
/// directory, then the built-in table.
fn resolve_table(cli: &Cli, config: &ClientConfig) -> Result<TierTable> {
    let path: Option<PathBuf> = cli
        .tables
        .clone()
        .or_else(|| config.tables_path.clone())
        .or_else(ClientConfig::default_tables_path);

    match path {
        Some(path) => TablesLoader::load(&path),
        None => {
            tracing::debug!("Using built-in tier table");
            Ok(TierTable::standard())
        }
    }
}
