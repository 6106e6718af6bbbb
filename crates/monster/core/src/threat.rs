//! Threat classifier.
//!
//! | Score   | Level   |
//! |---------|---------|
//! | <= -4   | Trivial |
//! | -3..-2  | Low     |
//! | -1..1   | Medium  |
//! | 2..3    | High    |
//! | >= 4    | Extreme |

/// Signed sum of per-stat quality deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ThreatScore(i32);

impl ThreatScore {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[inline]
    pub fn level(self) -> ThreatLevel {
        classify(self.0)
    }
}

/// Named threat level within a tier.
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
pub enum ThreatLevel {
    Trivial,
    Low,
    Medium,
    High,
    Extreme,
}

/// Upper bound (inclusive) of each level except the last, in ascending order.
const THRESHOLDS: [(i32, ThreatLevel); 4] = [
    (-4, ThreatLevel::Trivial),
    (-2, ThreatLevel::Low),
    (1, ThreatLevel::Medium),
    (3, ThreatLevel::High),
];

/// Maps a threat score to its level. Total over all integers.
pub fn classify(score: i32) -> ThreatLevel {
    THRESHOLDS
        .iter()
        .find(|(upper, _)| score <= *upper)
        .map_or(ThreatLevel::Extreme, |(_, level)| *level)
}
