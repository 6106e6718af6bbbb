//! Error infrastructure for monster-core.
//!
//! Every failure is detected at the point the invalid input enters the engine
//! and is returned immediately; no partial stat block is ever produced.
//!
//! - [`RangeError`]: a level, count, or attacks-per-round value is out of bounds
//! - [`ConflictError`]: a stat was flagged both good and poor
//! - [`TableError`]: a tier table breaks the coverage or monotonicity rules
//!
//! [`StatBlockError`] wraps all three for callers that drive the full pipeline.

use crate::stat::StatKind;
use crate::tier::Tier;

/// Severity level of an error, used for categorization by callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: level 0, count 0, a stat marked both good and poor
    Validation,

    /// Inconsistent static data.
    ///
    /// Examples: a tier table with overlapping level ranges
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all monster-core errors.
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// An input value outside the range the engine supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeError {
    #[error("level {level} is outside the supported range {min}-{max}")]
    Level { level: u32, min: u32, max: u32 },

    #[error("count must be at least 1 (got {count})")]
    Count { count: u32 },

    #[error("attacks per round must be at least 1 (got {attacks})")]
    AttacksPerRound { attacks: i64 },
}

impl EngineError for RangeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Level { .. } => "RANGE_LEVEL",
            Self::Count { .. } => "RANGE_COUNT",
            Self::AttacksPerRound { .. } => "RANGE_ATTACKS_PER_ROUND",
        }
    }
}

/// A stat received contradictory quality flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{} cannot be both good and poor", .stat.label())]
pub struct ConflictError {
    pub stat: StatKind,
}

impl EngineError for ConflictError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "CONFLICT_QUALITY"
    }
}

/// A tier table that does not satisfy the baseline invariants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableError {
    #[error("{tier} level range {min}-{max} is empty")]
    EmptyRange { tier: Tier, min: u32, max: u32 },

    #[error("{tier} starts at level {found}, expected {expected}")]
    Gap { tier: Tier, expected: u32, found: u32 },

    #[error("tier table ends at level {found}, expected {expected}")]
    Incomplete { expected: u32, found: u32 },

    #[error("{tier} level range ends at {max}, past the highest level {limit}")]
    LevelOutOfRange { tier: Tier, max: u32, limit: u32 },

    #[error("{tier} {} baseline is lower than the previous tier", .stat.label())]
    NotMonotonic { tier: Tier, stat: StatKind },

    #[error("{tier} {} must be at least 1", .stat.label())]
    NonPositive { tier: Tier, stat: StatKind },

    #[error("{tier} {} step must be at least 1", .stat.label())]
    NonPositiveStep { tier: Tier, stat: StatKind },

    #[error("{tier} {} magnitude exceeds {limit}", .stat.label())]
    OutOfBounds { tier: Tier, stat: StatKind, limit: i32 },
}

impl EngineError for TableError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyRange { .. } => "TABLE_EMPTY_RANGE",
            Self::Gap { .. } => "TABLE_GAP",
            Self::Incomplete { .. } => "TABLE_INCOMPLETE",
            Self::LevelOutOfRange { .. } => "TABLE_LEVEL_OUT_OF_RANGE",
            Self::NotMonotonic { .. } => "TABLE_NOT_MONOTONIC",
            Self::NonPositive { .. } => "TABLE_NON_POSITIVE",
            Self::NonPositiveStep { .. } => "TABLE_NON_POSITIVE_STEP",
            Self::OutOfBounds { .. } => "TABLE_OUT_OF_BOUNDS",
        }
    }
}

/// Any failure raised while assembling a stat block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatBlockError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    Table(#[from] TableError),
}

impl EngineError for StatBlockError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Range(e) => e.severity(),
            Self::Conflict(e) => e.severity(),
            Self::Table(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Range(e) => e.error_code(),
            Self::Conflict(e) => e.error_code(),
            Self::Table(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_code_and_severity() {
        let err: StatBlockError = RangeError::Count { count: 0 }.into();
        assert_eq!(err.error_code(), "RANGE_COUNT");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.to_string(), "count must be at least 1 (got 0)");

        let err: StatBlockError = TableError::Incomplete {
            expected: 20,
            found: 18,
        }
        .into();
        assert!(err.severity().is_internal());
    }

    #[test]
    fn conflict_message_names_the_stat() {
        let err = ConflictError { stat: StatKind::Hp };
        assert_eq!(err.to_string(), "HP cannot be both good and poor");
    }
}
