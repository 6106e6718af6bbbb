//! Logging setup.
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Default directive when neither `MKMONSTER_LOG` nor `RUST_LOG` is set.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Installs a stderr subscriber so stdout carries only the stat block.
///
/// `filter` (from `MKMONSTER_LOG`) wins over `RUST_LOG`.
pub fn setup_logging(filter: Option<&str>) -> Result<()> {
    let env_filter = match filter {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("Logging initialized");
    Ok(())
}
