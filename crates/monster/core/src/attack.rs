//! Attack multiplicity adjuster.
//!
//! Converts total average damage per round into damage per hit. Division
//! rounds to nearest, half-up, and a positive total never yields less than
//! 1 damage per hit.

use core::num::NonZeroU32;
use core::str::FromStr;

use crate::error::RangeError;
use crate::stat::div_round;

/// Divisor used for area attacks.
pub const AREA_ATTACKS: u32 = 3;
/// Divisor used for damage over time.
pub const DAMAGE_OVER_TIME_ATTACKS: u32 = 1;

/// How a monster delivers its damage each round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AttackProfile {
    /// `n` separate attacks.
    Attacks(NonZeroU32),
    /// Area effect, counted as three hits.
    Area,
    /// Damage over time, counted as one expected hit.
    DamageOverTime,
}

impl AttackProfile {
    /// Numeric attack count.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::AttacksPerRound`] when `attacks` is zero.
    pub fn attacks(attacks: u32) -> Result<Self, RangeError> {
        NonZeroU32::new(attacks)
            .map(Self::Attacks)
            .ok_or(RangeError::AttacksPerRound {
                attacks: attacks.into(),
            })
    }

    /// Effective number of hits the total damage is spread across.
    #[inline]
    pub const fn divisor(self) -> u32 {
        match self {
            AttackProfile::Attacks(n) => n.get(),
            AttackProfile::Area => AREA_ATTACKS,
            AttackProfile::DamageOverTime => DAMAGE_OVER_TIME_ATTACKS,
        }
    }
}

impl Default for AttackProfile {
    fn default() -> Self {
        Self::Attacks(NonZeroU32::MIN)
    }
}

impl core::fmt::Display for AttackProfile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AttackProfile::Attacks(n) => write!(f, "{n}"),
            AttackProfile::Area => f.write_str("area"),
            AttackProfile::DamageOverTime => f.write_str("dot"),
        }
    }
}

/// Why an attack profile string could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseAttackProfileError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("expected a number of attacks, \"area\", or \"dot\"")]
    Unrecognized,
}

impl FromStr for AttackProfile {
    type Err = ParseAttackProfileError;

    /// Accepts a positive integer, `area`, or `dot` (any case). Integers below
    /// 1 are a [`RangeError`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(attacks) = s.parse::<i64>() {
            if attacks < 1 {
                return Err(RangeError::AttacksPerRound { attacks }.into());
            }
            let attacks =
                u32::try_from(attacks).map_err(|_| ParseAttackProfileError::Unrecognized)?;
            return Ok(Self::attacks(attacks)?);
        }
        if s.eq_ignore_ascii_case("area") {
            Ok(Self::Area)
        } else if s.eq_ignore_ascii_case("dot") {
            Ok(Self::DamageOverTime)
        } else {
            Err(ParseAttackProfileError::Unrecognized)
        }
    }
}

/// Splits total average damage into per-hit damage.
pub fn split_damage(total: i32, profile: AttackProfile) -> i32 {
    if total <= 0 {
        return total;
    }
    let per_hit = div_round(total as i64, profile.divisor() as i64) as i32;
    per_hit.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_equals_three_attacks() {
        let three = AttackProfile::attacks(3).unwrap();
        for total in [1, 2, 7, 24, 25, 26, 100] {
            assert_eq!(
                split_damage(total, AttackProfile::Area),
                split_damage(total, three),
                "total {total}"
            );
        }
    }

    #[test]
    fn damage_over_time_is_one_hit() {
        for total in [1, 13, 78] {
            assert_eq!(split_damage(total, AttackProfile::DamageOverTime), total);
        }
    }

    #[test]
    fn division_rounds_half_up() {
        let two = AttackProfile::attacks(2).unwrap();
        assert_eq!(split_damage(25, two), 13);
        assert_eq!(split_damage(24, two), 12);
        assert_eq!(split_damage(25, AttackProfile::Area), 8);
        assert_eq!(split_damage(26, AttackProfile::Area), 9);
    }

    #[test]
    fn positive_total_keeps_at_least_one_damage() {
        let many = AttackProfile::attacks(10).unwrap();
        assert_eq!(split_damage(2, many), 1);
    }

    #[test]
    fn zero_attacks_is_rejected() {
        assert_eq!(
            AttackProfile::attacks(0),
            Err(RangeError::AttacksPerRound { attacks: 0 })
        );
        assert_eq!(
            "0".parse::<AttackProfile>(),
            Err(ParseAttackProfileError::Range(RangeError::AttacksPerRound {
                attacks: 0
            }))
        );
    }

    #[test]
    fn negative_attacks_are_a_range_error() {
        assert_eq!(
            "-1".parse::<AttackProfile>(),
            Err(ParseAttackProfileError::Range(RangeError::AttacksPerRound {
                attacks: -1
            }))
        );
        assert_eq!(
            "99999999999".parse::<AttackProfile>(),
            Err(ParseAttackProfileError::Unrecognized)
        );
    }

    #[test]
    fn parses_numbers_and_aliases() {
        assert_eq!(
            "4".parse::<AttackProfile>().unwrap(),
            AttackProfile::attacks(4).unwrap()
        );
        assert_eq!("AREA".parse::<AttackProfile>(), Ok(AttackProfile::Area));
        assert_eq!("dot".parse::<AttackProfile>(), Ok(AttackProfile::DamageOverTime));
        assert_eq!(
            "twice".parse::<AttackProfile>(),
            Err(ParseAttackProfileError::Unrecognized)
        );
        assert_eq!(AttackProfile::default().divisor(), 1);
    }
}
