//! Tier table: baseline stats for an average monster of each tier.
//!
//! Tiers partition character levels 1-20 into seven contiguous bands. Each
//! band carries the baseline stat line for a solo monster of average quality,
//! the Good/Poor step for every stat, and the proficiency bonus shown in the
//! rendered stat block.
//!
//! # Canonical table
//!
//! | Tier       | Levels | Prof | AC | HP  | Atk | DC | Dmg | HP step | Dmg step |
//! |------------|--------|------|----|-----|-----|----|-----|---------|----------|
//! | Apprentice | 1-2    | +2   | 13 | 30  | +4  | 12 | 8   | 8       | 2        |
//! | Journeyman | 3-4    | +2   | 14 | 60  | +5  | 13 | 14  | 15      | 4        |
//! | Adventurer | 5-8    | +3   | 15 | 110 | +7  | 15 | 24  | 28      | 6        |
//! | Veteran    | 9-12   | +4   | 16 | 170 | +8  | 16 | 36  | 42      | 9        |
//! | Champion   | 13-16  | +5   | 17 | 240 | +10 | 18 | 50  | 60      | 12       |
//! | Heroic     | 17-18  | +6   | 18 | 310 | +11 | 19 | 64  | 78      | 16       |
//! | Legendary  | 19-20  | +6   | 19 | 380 | +12 | 20 | 78  | 95      | 20       |
//!
//! AC, Attack, and DC step by 2 at every tier.

use crate::error::{RangeError, TableError};
use crate::stat::{StatKind, StatLine};

/// Lowest supported level.
pub const MIN_LEVEL: u32 = 1;
/// Highest supported level.
pub const MAX_LEVEL: u32 = 20;
/// Largest magnitude a table baseline or step may hold.
pub const MAX_TABLE_VALUE: i32 = 10_000;

/// A band of character levels sharing one baseline monster difficulty.
///
/// Variants are declared in level order, so the derived `Ord` is the tier
/// progression.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(ascii_case_insensitive)]
pub enum Tier {
    Apprentice = 0,
    Journeyman = 1,
    Adventurer = 2,
    Veteran = 3,
    Champion = 4,
    Heroic = 5,
    Legendary = 6,
}

impl Tier {
    /// Total number of tiers.
    pub const COUNT: usize = 7;

    /// Returns all tiers in level order.
    pub const fn all() -> [Tier; Self::COUNT] {
        [
            Tier::Apprentice,
            Tier::Journeyman,
            Tier::Adventurer,
            Tier::Veteran,
            Tier::Champion,
            Tier::Heroic,
            Tier::Legendary,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// Inclusive range of levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelRange {
    pub min: u32,
    pub max: u32,
}

impl LevelRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub const fn contains(&self, level: u32) -> bool {
        self.min <= level && level <= self.max
    }
}

impl core::fmt::Display for LevelRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// One row of the tier table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierBaseline {
    pub tier: Tier,
    pub levels: LevelRange,
    pub proficiency: i32,
    /// Solo, average-quality stat line.
    pub baseline: StatLine,
    /// Amount a Good flag adds (and a Poor flag subtracts) per stat.
    pub steps: StatLine,
}

impl TierBaseline {
    pub const fn new(
        tier: Tier,
        levels: LevelRange,
        proficiency: i32,
        baseline: StatLine,
        steps: StatLine,
    ) -> Self {
        Self {
            tier,
            levels,
            proficiency,
            baseline,
            steps,
        }
    }
}

/// Tier or level as supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TierSelector {
    Tier(Tier),
    Level(u32),
}

impl From<Tier> for TierSelector {
    fn from(tier: Tier) -> Self {
        Self::Tier(tier)
    }
}

const fn row(
    tier: Tier,
    min: u32,
    max: u32,
    proficiency: i32,
    baseline: StatLine,
    hp_step: i32,
    dmg_step: i32,
) -> TierBaseline {
    TierBaseline::new(
        tier,
        LevelRange::new(min, max),
        proficiency,
        baseline,
        StatLine::new(2, hp_step, 2, 2, dmg_step),
    )
}

const STANDARD_ROWS: [TierBaseline; Tier::COUNT] = [
    row(Tier::Apprentice, 1, 2, 2, StatLine::new(13, 30, 4, 12, 8), 8, 2),
    row(Tier::Journeyman, 3, 4, 2, StatLine::new(14, 60, 5, 13, 14), 15, 4),
    row(Tier::Adventurer, 5, 8, 3, StatLine::new(15, 110, 7, 15, 24), 28, 6),
    row(Tier::Veteran, 9, 12, 4, StatLine::new(16, 170, 8, 16, 36), 42, 9),
    row(Tier::Champion, 13, 16, 5, StatLine::new(17, 240, 10, 18, 50), 60, 12),
    row(Tier::Heroic, 17, 18, 6, StatLine::new(18, 310, 11, 19, 64), 78, 16),
    row(Tier::Legendary, 19, 20, 6, StatLine::new(19, 380, 12, 20, 78), 95, 20),
];

/// The full tier table, one row per [`Tier`] in level order.
///
/// Construct with [`TierTable::standard`] or [`TierTable::new`], which checks
/// that the rows cover levels 1-20 without gaps or overlaps, that every
/// baseline stat is non-decreasing from one tier to the next, and that every
/// step is positive. Baselines and steps are bounded by [`MAX_TABLE_VALUE`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierTable {
    rows: [TierBaseline; Tier::COUNT],
}

impl TierTable {
    /// The canonical table documented at module level.
    pub const fn standard() -> Self {
        Self {
            rows: STANDARD_ROWS,
        }
    }

    /// Builds a table from rows, indexing them by their `tier` field.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] when the rows break coverage or monotonicity.
    pub fn new(rows: [TierBaseline; Tier::COUNT]) -> Result<Self, TableError> {
        let mut ordered = rows;
        ordered.sort_unstable_by_key(|row| row.tier);
        let table = Self { rows: ordered };
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), TableError> {
        let mut expected_min = MIN_LEVEL;
        let mut previous: Option<&TierBaseline> = None;

        for (index, row) in self.rows.iter().enumerate() {
            let tier = Tier::all()[index];
            // Duplicate tier entries leave a hole in the sorted array.
            if row.tier != tier {
                return Err(TableError::Gap {
                    tier,
                    expected: expected_min,
                    found: row.levels.min,
                });
            }
            if row.levels.min > row.levels.max {
                return Err(TableError::EmptyRange {
                    tier,
                    min: row.levels.min,
                    max: row.levels.max,
                });
            }
            if row.levels.min != expected_min {
                return Err(TableError::Gap {
                    tier,
                    expected: expected_min,
                    found: row.levels.min,
                });
            }
            if row.levels.max > MAX_LEVEL {
                return Err(TableError::LevelOutOfRange {
                    tier,
                    max: row.levels.max,
                    limit: MAX_LEVEL,
                });
            }
            for stat in StatKind::all() {
                let (base, step) = (row.baseline.get(stat), row.steps.get(stat));
                if base.unsigned_abs() > MAX_TABLE_VALUE.unsigned_abs()
                    || step > MAX_TABLE_VALUE
                {
                    return Err(TableError::OutOfBounds {
                        tier,
                        stat,
                        limit: MAX_TABLE_VALUE,
                    });
                }
                if stat.is_sized() && base < 1 {
                    return Err(TableError::NonPositive { tier, stat });
                }
                if step < 1 {
                    return Err(TableError::NonPositiveStep { tier, stat });
                }
                if previous.is_some_and(|prev| base < prev.baseline.get(stat)) {
                    return Err(TableError::NotMonotonic { tier, stat });
                }
            }
            expected_min = row.levels.max + 1;
            previous = Some(row);
        }

        if expected_min != MAX_LEVEL + 1 {
            return Err(TableError::Incomplete {
                expected: MAX_LEVEL,
                found: expected_min - 1,
            });
        }
        Ok(())
    }

    /// Baseline row for a tier.
    #[inline]
    pub fn lookup(&self, tier: Tier) -> &TierBaseline {
        &self.rows[tier.as_index()]
    }

    /// Tier whose level range contains `level`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Level`] for levels outside 1-20.
    pub fn tier_for_level(&self, level: u32) -> Result<Tier, RangeError> {
        self.rows
            .iter()
            .find(|row| row.levels.contains(level))
            .map(|row| row.tier)
            .ok_or(RangeError::Level {
                level,
                min: MIN_LEVEL,
                max: MAX_LEVEL,
            })
    }

    /// Resolves a tier-or-level selector to its baseline row.
    pub fn lookup_baseline(&self, selector: TierSelector) -> Result<&TierBaseline, RangeError> {
        let tier = match selector {
            TierSelector::Tier(tier) => tier,
            TierSelector::Level(level) => self.tier_for_level(level)?,
        };
        Ok(self.lookup(tier))
    }

    pub fn rows(&self) -> &[TierBaseline; Tier::COUNT] {
        &self.rows
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::standard()
    }
}

// Rows go over the wire as a plain list so TOML `[[rows]]` and RON `[...]`
// both work; the length is checked on the way in.
#[cfg(feature = "serde")]
impl serde::Serialize for TierTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(serde::Serialize)]
        struct Raw<'a> {
            rows: &'a [TierBaseline],
        }

        Raw { rows: &self.rows }.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TierTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        struct Raw {
            rows: Vec<TierBaseline>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let found = raw.rows.len();
        let rows: [TierBaseline; Tier::COUNT] = raw
            .rows
            .try_into()
            .map_err(|_| D::Error::invalid_length(found, &"one row per tier (7)"))?;
        TierTable::new(rows).map_err(D::Error::custom)
    }
}
