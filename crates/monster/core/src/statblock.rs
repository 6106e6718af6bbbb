//! Stat block assembler.
//!
//! Runs every adjuster in a fixed order:
//!
//! ```text
//! [ Tier baseline ]
//!      ↓
//! [ Count scaling (HP, Damage) ]
//!      ↓
//! [ Quality flags (all five stats, threat delta) ]
//!      ↓
//! [ Attack split (Damage → per-hit Damage) ]
//!      ↓
//! [ Defense discount (HP) ]
//!      ↓
//! [ Threat classification ]
//! ```
//!
//! Each stat follows only its own trajectory through the pipeline; no stage
//! reads one stat to adjust another.

use crate::attack::{AttackProfile, split_damage};
use crate::count::Count;
use crate::defense::apply_defense;
use crate::error::{ConflictError, StatBlockError};
use crate::quality::{QualitySet, StatQuality, apply_quality};
use crate::stat::{StatKind, StatLine};
use crate::threat::{ThreatLevel, ThreatScore};
use crate::tier::{LevelRange, Tier, TierSelector, TierTable};

/// Name used when the caller does not supply one.
pub const DEFAULT_NAME: &str = "Unnamed Monster";

/// Everything the assembler needs for one monster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterRequest {
    pub selector: TierSelector,
    pub count: u32,
    pub qualities: QualitySet,
    pub attacks: AttackProfile,
    pub has_defense: bool,
    pub name: Option<String>,
}

impl MonsterRequest {
    /// Solo, all-average, one attack, no defense.
    pub fn new(selector: impl Into<TierSelector>) -> Self {
        Self {
            selector: selector.into(),
            count: 1,
            qualities: QualitySet::new(),
            attacks: AttackProfile::default(),
            has_defense: false,
            name: None,
        }
    }

    pub fn builder(selector: impl Into<TierSelector>) -> MonsterRequestBuilder {
        MonsterRequestBuilder {
            request: Self::new(selector),
            conflict: None,
        }
    }
}

/// Fluent construction of a [`MonsterRequest`].
///
/// Quality conflicts are held until [`MonsterRequestBuilder::build`] so the
/// chain stays infallible.
pub struct MonsterRequestBuilder {
    request: MonsterRequest,
    conflict: Option<ConflictError>,
}

impl MonsterRequestBuilder {
    pub fn count(mut self, count: u32) -> Self {
        self.request.count = count;
        self
    }

    pub fn quality(mut self, stat: StatKind, quality: StatQuality) -> Self {
        if let Err(err) = self.request.qualities.mark(stat, quality) {
            self.conflict.get_or_insert(err);
        }
        self
    }

    pub fn good(self, stat: StatKind) -> Self {
        self.quality(stat, StatQuality::Good)
    }

    pub fn poor(self, stat: StatKind) -> Self {
        self.quality(stat, StatQuality::Poor)
    }

    pub fn attacks(mut self, attacks: AttackProfile) -> Self {
        self.request.attacks = attacks;
        self
    }

    pub fn defense(mut self, has_defense: bool) -> Self {
        self.request.has_defense = has_defense;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = Some(name.into());
        self
    }

    /// # Errors
    ///
    /// Returns the first [`ConflictError`] raised by a quality flag.
    pub fn build(self) -> Result<MonsterRequest, ConflictError> {
        match self.conflict {
            Some(err) => Err(err),
            None => Ok(self.request),
        }
    }
}

/// The assembled, immutable stat block.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonsterStatBlock {
    name: String,
    tier: Tier,
    levels: LevelRange,
    proficiency: i32,
    count: Count,
    qualities: QualitySet,
    attacks: AttackProfile,
    has_defense: bool,
    /// Round damage after count and quality, before the attack split.
    total_damage: i32,
    /// Final stats; `dmg` is per hit.
    stats: StatLine,
    threat: ThreatScore,
    threat_level: ThreatLevel,
}

impl MonsterStatBlock {
    /// Runs the full pipeline for one request.
    ///
    /// # Errors
    ///
    /// - [`StatBlockError::Range`] for a level outside 1-20 or a zero count
    pub fn assemble(table: &TierTable, request: &MonsterRequest) -> Result<Self, StatBlockError> {
        // Baseline
        let row = table.lookup_baseline(request.selector)?;

        // Count scaling (HP and Damage only, steps scale with them)
        let count = Count::new(request.count)?;
        let scaling = count.category.scale();
        let mut baseline = row.baseline;
        let mut steps = row.steps;
        baseline.hp = scaling.scale_hp(baseline.hp);
        baseline.dmg = scaling.scale_dmg(baseline.dmg);
        steps.hp = scaling.scale_hp(steps.hp);
        steps.dmg = scaling.scale_dmg(steps.dmg);

        // Quality flags
        let outcome = apply_quality(&baseline, &steps, &request.qualities);
        let mut stats = outcome.stats;
        let total_damage = stats.dmg;

        // Attack split
        stats.dmg = split_damage(total_damage, request.attacks);

        // Defense
        stats.hp = apply_defense(stats.hp, request.has_defense);

        Ok(Self {
            name: request
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_NAME.to_string()),
            tier: row.tier,
            levels: row.levels,
            proficiency: row.proficiency,
            count,
            qualities: request.qualities,
            attacks: request.attacks,
            has_defense: request.has_defense,
            total_damage,
            stats,
            threat: outcome.threat,
            threat_level: outcome.threat.level(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn levels(&self) -> LevelRange {
        self.levels
    }

    pub fn proficiency(&self) -> i32 {
        self.proficiency
    }

    pub fn count(&self) -> Count {
        self.count
    }

    pub fn qualities(&self) -> &QualitySet {
        &self.qualities
    }

    pub fn attacks(&self) -> AttackProfile {
        self.attacks
    }

    pub fn has_defense(&self) -> bool {
        self.has_defense
    }

    pub fn total_damage(&self) -> i32 {
        self.total_damage
    }

    pub fn stats(&self) -> &StatLine {
        &self.stats
    }

    pub fn ac(&self) -> i32 {
        self.stats.ac
    }

    pub fn hp(&self) -> i32 {
        self.stats.hp
    }

    pub fn attack_bonus(&self) -> i32 {
        self.stats.atk
    }

    pub fn dc(&self) -> i32 {
        self.stats.dc
    }

    /// Damage per hit.
    pub fn damage(&self) -> i32 {
        self.stats.dmg
    }

    pub fn threat(&self) -> ThreatScore {
        self.threat
    }

    pub fn threat_level(&self) -> ThreatLevel {
        self.threat_level
    }
}

/// Assembles a stat block from loose inputs.
///
/// Equivalent to building a [`MonsterRequest`] and calling
/// [`MonsterStatBlock::assemble`].
pub fn assemble(
    table: &TierTable,
    selector: impl Into<TierSelector>,
    count: u32,
    qualities: QualitySet,
    attacks: AttackProfile,
    has_defense: bool,
    name: Option<&str>,
) -> Result<MonsterStatBlock, StatBlockError> {
    let request = MonsterRequest {
        selector: selector.into(),
        count,
        qualities,
        attacks,
        has_defense,
        name: name.map(str::to_string),
    };
    MonsterStatBlock::assemble(table, &request)
}
