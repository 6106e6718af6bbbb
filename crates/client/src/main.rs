//! `mkmonster` entry point.
use anyhow::Result;
use clap::Parser;
use monster_client::cli::Cli;
use monster_client::config::ClientConfig;
use monster_client::logging::setup_logging;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    setup_logging(config.log_filter.as_deref())?;

    let cli = Cli::parse();
    let output = monster_client::run(&cli, &config)?;
    print!("{output}");
    Ok(())
}
