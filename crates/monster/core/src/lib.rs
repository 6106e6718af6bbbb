//! Deterministic monster stat-block derivation.
//!
//! `monster-core` maps a tier (or level), a group size, per-stat quality
//! flags, an attack profile, and a defense flag to a finished stat block with
//! a threat classification. Everything here is a pure function over small
//! value types; the CLI and content loaders build on the types re-exported
//! here.
//!
//! All assembly flows through [`MonsterStatBlock::assemble`].
pub mod attack;
pub mod count;
pub mod defense;
pub mod error;
pub mod quality;
pub mod stat;
pub mod statblock;
pub mod threat;
pub mod tier;

pub use attack::{AttackProfile, ParseAttackProfileError, split_damage};
pub use count::{Count, CountCategory, CountScaling};
pub use defense::{DEFENSE_HP_PERCENT, apply_defense};
pub use error::{
    ConflictError, EngineError, ErrorSeverity, RangeError, StatBlockError, TableError,
};
pub use quality::{QualityOutcome, QualitySet, StatQuality, apply_quality};
pub use stat::{StatKind, StatLine};
pub use statblock::{
    DEFAULT_NAME, MonsterRequest, MonsterRequestBuilder, MonsterStatBlock, assemble,
};
pub use threat::{ThreatLevel, ThreatScore, classify};
pub use tier::{
    LevelRange, MAX_LEVEL, MAX_TABLE_VALUE, MIN_LEVEL, Tier, TierBaseline, TierSelector,
    TierTable,
};
