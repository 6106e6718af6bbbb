//! Stat identifiers and the five-stat tuple every layer of the engine works on.

/// One of the five stats a monster stat block carries.
///
/// Parsing is case-insensitive and accepts the long forms `attack` and
/// `damage` alongside the short labels.
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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StatKind {
    /// Armor class.
    Ac = 0,
    /// Hit points.
    Hp = 1,
    /// Attack bonus.
    #[strum(to_string = "atk", serialize = "attack")]
    Atk = 2,
    /// Save DC.
    Dc = 3,
    /// Average damage per round (per hit once split).
    #[strum(to_string = "dmg", serialize = "damage")]
    Dmg = 4,
}

impl StatKind {
    /// Total number of stats.
    pub const COUNT: usize = 5;

    /// Returns all stats in stat-block order.
    pub const fn all() -> [StatKind; Self::COUNT] {
        [
            StatKind::Ac,
            StatKind::Hp,
            StatKind::Atk,
            StatKind::Dc,
            StatKind::Dmg,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Upper-case label used in rendered stat blocks and help text.
    pub const fn label(self) -> &'static str {
        match self {
            StatKind::Ac => "AC",
            StatKind::Hp => "HP",
            StatKind::Atk => "ATK",
            StatKind::Dc => "DC",
            StatKind::Dmg => "DMG",
        }
    }

    /// HP and Damage are scaled by group size; the others are not.
    pub const fn is_sized(self) -> bool {
        matches!(self, StatKind::Hp | StatKind::Dmg)
    }
}

/// A value for each of the five stats.
///
/// Used for tier baselines, quality steps, and the adjusted results of every
/// pipeline stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatLine {
    pub ac: i32,
    pub hp: i32,
    pub atk: i32,
    pub dc: i32,
    pub dmg: i32,
}

impl StatLine {
    pub const fn new(ac: i32, hp: i32, atk: i32, dc: i32, dmg: i32) -> Self {
        Self {
            ac,
            hp,
            atk,
            dc,
            dmg,
        }
    }

    #[inline]
    pub const fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Ac => self.ac,
            StatKind::Hp => self.hp,
            StatKind::Atk => self.atk,
            StatKind::Dc => self.dc,
            StatKind::Dmg => self.dmg,
        }
    }

    #[inline]
    pub fn set(&mut self, stat: StatKind, value: i32) {
        match stat {
            StatKind::Ac => self.ac = value,
            StatKind::Hp => self.hp = value,
            StatKind::Atk => self.atk = value,
            StatKind::Dc => self.dc = value,
            StatKind::Dmg => self.dmg = value,
        }
    }

    /// True when every stat of `self` is at least the matching stat of `other`.
    pub fn dominates(&self, other: &StatLine) -> bool {
        StatKind::all()
            .into_iter()
            .all(|stat| self.get(stat) >= other.get(stat))
    }
}

/// Integer division rounded to nearest, ties away from zero (half-up for
/// the non-negative values the engine produces).
///
/// `denominator` must be positive.
#[inline]
pub(crate) const fn div_round(numerator: i64, denominator: i64) -> i64 {
    if numerator >= 0 {
        (2 * numerator + denominator) / (2 * denominator)
    } else {
        -((-2 * numerator + denominator) / (2 * denominator))
    }
}

/// Scales `value` by `percent` / 100 with [`div_round`].
#[inline]
pub(crate) const fn scale_percent(value: i32, percent: u32) -> i32 {
    div_round(value as i64 * percent as i64, 100) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn parses_labels_and_aliases_case_insensitively() {
        assert_eq!(StatKind::from_str("AC").unwrap(), StatKind::Ac);
        assert_eq!(StatKind::from_str("hp").unwrap(), StatKind::Hp);
        assert_eq!(StatKind::from_str("Atk").unwrap(), StatKind::Atk);
        assert_eq!(StatKind::from_str("attack").unwrap(), StatKind::Atk);
        assert_eq!(StatKind::from_str("DAMAGE").unwrap(), StatKind::Dmg);
        assert!(StatKind::from_str("str").is_err());
    }

    #[test]
    fn displays_short_labels() {
        assert_eq!(StatKind::Atk.to_string(), "atk");
        assert_eq!(StatKind::Dmg.to_string(), "dmg");
        assert_eq!(StatKind::Dc.as_ref(), "dc");
    }

    #[test]
    fn get_and_set_follow_stat_kind() {
        let mut line = StatLine::new(1, 2, 3, 4, 5);
        for (i, stat) in StatKind::all().into_iter().enumerate() {
            assert_eq!(stat.as_index(), i);
            assert_eq!(line.get(stat), i as i32 + 1);
        }
        line.set(StatKind::Dc, 40);
        assert_eq!(line.dc, 40);
        assert_eq!(line.hp, 2);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(div_round(5, 2), 3);
        assert_eq!(div_round(4, 3), 1);
        assert_eq!(div_round(5, 3), 2);
        assert_eq!(div_round(-5, 2), -3);
        assert_eq!(scale_percent(15, 50), 8);
        assert_eq!(scale_percent(110, 10), 11);
    }
}
