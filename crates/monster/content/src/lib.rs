//! Data-driven tier tables and their loaders.
//!
//! The canonical table ships with this crate as `data/tiers.toml` and is
//! mirrored by [`monster_core::TierTable::standard`]. Loaders read alternative
//! tables from TOML or RON files; every table is validated by monster-core
//! before it is handed out.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{TableFormat, TablesLoader};

/// Source text of the bundled canonical table.
pub const BUNDLED_TIERS_TOML: &str = include_str!("../data/tiers.toml");
