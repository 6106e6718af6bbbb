//! Quality adjuster: Good/Average/Poor flags per stat.
//!
//! Each flag moves its own stat by that stat's step and nothing else. Good
//! adds the step and contributes +1 to the threat delta, Poor subtracts it and
//! contributes -1, Average leaves both alone.

use crate::error::ConflictError;
use crate::stat::{StatKind, StatLine};
use crate::threat::ThreatScore;

/// Quality of a single stat relative to the tier average.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StatQuality {
    Poor,
    #[default]
    Average,
    Good,
}

impl StatQuality {
    /// Contribution of this quality to the threat score.
    #[inline]
    pub const fn threat_delta(self) -> i32 {
        match self {
            StatQuality::Poor => -1,
            StatQuality::Average => 0,
            StatQuality::Good => 1,
        }
    }
}

/// Exactly one quality per stat.
///
/// Starts all-average. [`QualitySet::mark`] rejects a second, different
/// non-average flag on the same stat so Good and Poor can never coexist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualitySet {
    qualities: [StatQuality; StatKind::COUNT],
}

impl QualitySet {
    pub const fn new() -> Self {
        Self {
            qualities: [StatQuality::Average; StatKind::COUNT],
        }
    }

    /// Builds a set from lists of stats flagged good and poor.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictError`] for the first stat that appears in both lists.
    pub fn from_flags(good: &[StatKind], poor: &[StatKind]) -> Result<Self, ConflictError> {
        let mut set = Self::new();
        for &stat in good {
            set.mark(stat, StatQuality::Good)?;
        }
        for &stat in poor {
            set.mark(stat, StatQuality::Poor)?;
        }
        Ok(set)
    }

    /// Flags a stat. Repeating the same flag is a no-op.
    pub fn mark(&mut self, stat: StatKind, quality: StatQuality) -> Result<(), ConflictError> {
        let slot = &mut self.qualities[stat.as_index()];
        match (*slot, quality) {
            (_, StatQuality::Average) => Ok(()),
            (StatQuality::Average, _) => {
                *slot = quality;
                Ok(())
            }
            (current, requested) if current == requested => Ok(()),
            _ => Err(ConflictError { stat }),
        }
    }

    /// Builder-style [`QualitySet::mark`].
    pub fn with(mut self, stat: StatKind, quality: StatQuality) -> Result<Self, ConflictError> {
        self.mark(stat, quality)?;
        Ok(self)
    }

    #[inline]
    pub fn get(&self, stat: StatKind) -> StatQuality {
        self.qualities[stat.as_index()]
    }

    /// Sum of per-stat threat deltas.
    pub fn threat(&self) -> ThreatScore {
        ThreatScore::new(self.qualities.iter().map(|q| q.threat_delta()).sum())
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKind, StatQuality)> + '_ {
        StatKind::all().into_iter().map(|stat| (stat, self.get(stat)))
    }
}

/// Stats after quality flags, plus the threat they add up to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QualityOutcome {
    pub stats: StatLine,
    pub threat: ThreatScore,
}

/// Applies quality flags to a stat line.
///
/// `steps` holds the per-stat increment. HP and Damage never drop below 1.
pub fn apply_quality(
    baseline: &StatLine,
    steps: &StatLine,
    qualities: &QualitySet,
) -> QualityOutcome {
    let mut stats = *baseline;
    for (stat, quality) in qualities.iter() {
        let adjusted = baseline.get(stat) + quality.threat_delta() * steps.get(stat);
        let adjusted = if stat.is_sized() { adjusted.max(1) } else { adjusted };
        stats.set(stat, adjusted);
    }
    QualityOutcome {
        stats,
        threat: qualities.threat(),
    }
}
