//! Count adjuster: group-size categories and their HP/Damage scaling.
//!
//! A group of N monsters fills the same encounter slot as one solo monster,
//! so each member's HP and Damage shrink as the group grows. Multipliers are
//! stored as whole percentages:
//!
//! | Category | Count | HP % | Dmg % |
//! |----------|-------|------|-------|
//! | Solo     | 1     | 100  | 100   |
//! | Pair     | 2     | 55   | 60    |
//! | Party    | 3-6   | 30   | 35    |
//! | Gang     | 7-10  | 18   | 22    |
//! | Mob      | 11-20 | 10   | 14    |
//! | Army     | 21+   | 5    | 8     |

use crate::error::RangeError;
use crate::stat::scale_percent;

/// Named size band for a requested monster count.
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
pub enum CountCategory {
    Solo = 0,
    Pair = 1,
    Party = 2,
    Gang = 3,
    Mob = 4,
    Army = 5,
}

/// Per-category scaling applied to the HP and Damage baselines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountScaling {
    pub hp_percent: u32,
    pub dmg_percent: u32,
}

impl CountScaling {
    pub const fn new(hp_percent: u32, dmg_percent: u32) -> Self {
        Self {
            hp_percent,
            dmg_percent,
        }
    }

    /// Scales an HP value, never below 1.
    #[inline]
    pub const fn scale_hp(&self, hp: i32) -> i32 {
        at_least_one(scale_percent(hp, self.hp_percent))
    }

    /// Scales a Damage value, never below 1.
    #[inline]
    pub const fn scale_dmg(&self, dmg: i32) -> i32 {
        at_least_one(scale_percent(dmg, self.dmg_percent))
    }
}

#[inline]
const fn at_least_one(value: i32) -> i32 {
    if value < 1 { 1 } else { value }
}

struct CategoryRow {
    category: CountCategory,
    min: u32,
    /// `None` means unbounded.
    max: Option<u32>,
    representative: u32,
    scaling: CountScaling,
}

static CATEGORY_TABLE: [CategoryRow; CountCategory::COUNT] = [
    CategoryRow {
        category: CountCategory::Solo,
        min: 1,
        max: Some(1),
        representative: 1,
        scaling: CountScaling::new(100, 100),
    },
    CategoryRow {
        category: CountCategory::Pair,
        min: 2,
        max: Some(2),
        representative: 2,
        scaling: CountScaling::new(55, 60),
    },
    CategoryRow {
        category: CountCategory::Party,
        min: 3,
        max: Some(6),
        representative: 4,
        scaling: CountScaling::new(30, 35),
    },
    CategoryRow {
        category: CountCategory::Gang,
        min: 7,
        max: Some(10),
        representative: 8,
        scaling: CountScaling::new(18, 22),
    },
    CategoryRow {
        category: CountCategory::Mob,
        min: 11,
        max: Some(20),
        representative: 16,
        scaling: CountScaling::new(10, 14),
    },
    CategoryRow {
        category: CountCategory::Army,
        min: 21,
        max: None,
        representative: 21,
        scaling: CountScaling::new(5, 8),
    },
];

impl CountCategory {
    /// Total number of categories.
    pub const COUNT: usize = 6;

    /// Returns all categories from smallest to largest.
    pub const fn all() -> [CountCategory; Self::COUNT] {
        [
            CountCategory::Solo,
            CountCategory::Pair,
            CountCategory::Party,
            CountCategory::Gang,
            CountCategory::Mob,
            CountCategory::Army,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    fn row(self) -> &'static CategoryRow {
        &CATEGORY_TABLE[self.as_index()]
    }

    /// Maps a monster count to its category.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Count`] when `count` is zero.
    pub fn categorize(count: u32) -> Result<Self, RangeError> {
        CATEGORY_TABLE
            .iter()
            .find(|row| count >= row.min && row.max.is_none_or(|max| count <= max))
            .map(|row| row.category)
            .ok_or(RangeError::Count { count })
    }

    /// HP and Damage multipliers for this category.
    #[inline]
    pub fn scale(self) -> CountScaling {
        self.row().scaling
    }

    /// Smallest count in this category.
    pub fn min_count(self) -> u32 {
        self.row().min
    }

    /// Largest count in this category, `None` for the open-ended Army band.
    pub fn max_count(self) -> Option<u32> {
        self.row().max
    }

    /// Typical count used when a caller names the category instead of a number.
    pub fn representative_count(self) -> u32 {
        self.row().representative
    }
}

/// A validated monster count together with its category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Count {
    pub count: u32,
    pub category: CountCategory,
}

impl Count {
    pub fn new(count: u32) -> Result<Self, RangeError> {
        Ok(Self {
            count,
            category: CountCategory::categorize(count)?,
        })
    }

    /// Count for a named category, using its representative size.
    pub fn from_category(category: CountCategory) -> Self {
        Self {
            count: category.representative_count(),
            category,
        }
    }
}

impl Default for Count {
    fn default() -> Self {
        Self::from_category(CountCategory::Solo)
    }
}

impl core::fmt::Display for Count {
    /// `Party (3-6)`, `Solo (1)`, `Army (21+)`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let category = self.category;
        match category.max_count() {
            None => write!(f, "{category} ({}+)", category.min_count()),
            Some(max) if max == category.min_count() => write!(f, "{category} ({max})"),
            Some(max) => write!(f, "{category} ({}-{max})", category.min_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn categorize_follows_boundaries() {
        let cases = [
            (1, CountCategory::Solo),
            (2, CountCategory::Pair),
            (3, CountCategory::Party),
            (6, CountCategory::Party),
            (7, CountCategory::Gang),
            (10, CountCategory::Gang),
            (11, CountCategory::Mob),
            (15, CountCategory::Mob),
            (20, CountCategory::Mob),
            (21, CountCategory::Army),
            (500, CountCategory::Army),
        ];
        for (count, expected) in cases {
            assert_eq!(CountCategory::categorize(count), Ok(expected), "count {count}");
        }
    }

    #[test]
    fn zero_count_is_rejected() {
        assert_eq!(
            CountCategory::categorize(0),
            Err(RangeError::Count { count: 0 })
        );
        assert!(Count::new(0).is_err());
    }

    #[test]
    fn solo_is_unscaled() {
        let scaling = CountCategory::Solo.scale();
        assert_eq!(scaling, CountScaling::new(100, 100));
        assert_eq!(scaling.scale_hp(137), 137);
        assert_eq!(scaling.scale_dmg(29), 29);
    }

    #[test]
    fn multipliers_strictly_decrease_with_size() {
        for pair in CountCategory::all().windows(2) {
            let (smaller, larger) = (pair[0].scale(), pair[1].scale());
            assert!(larger.hp_percent < smaller.hp_percent, "{:?}", pair);
            assert!(larger.dmg_percent < smaller.dmg_percent, "{:?}", pair);
        }
    }

    #[test]
    fn scaled_values_never_reach_zero() {
        let army = CountCategory::Army.scale();
        assert_eq!(army.scale_hp(5), 1);
        assert_eq!(army.scale_dmg(1), 1);
    }

    #[test]
    fn representative_counts_fall_in_their_category() {
        for category in CountCategory::all() {
            let count = Count::from_category(category);
            assert_eq!(CountCategory::categorize(count.count), Ok(category));
        }
    }

    #[test]
    fn labels_parse_and_display() {
        assert_eq!(CountCategory::from_str("MOB").unwrap(), CountCategory::Mob);
        assert_eq!(Count::new(1).unwrap().to_string(), "Solo (1)");
        assert_eq!(Count::new(4).unwrap().to_string(), "Party (3-6)");
        assert_eq!(Count::new(30).unwrap().to_string(), "Army (21+)");
    }
}
