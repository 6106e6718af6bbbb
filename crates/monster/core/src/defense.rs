//! Defense adjuster.
//!
//! Monsters with significant mitigation (flight, many resistances,
//! immunities) last longer than their HP suggests, so their HP is discounted.

use crate::stat::scale_percent;

/// Share of HP kept when the defense flag is set.
pub const DEFENSE_HP_PERCENT: u32 = 50;

/// Applies the defense discount. The result is never below 1.
pub fn apply_defense(hp: i32, has_significant_defense: bool) -> i32 {
    if !has_significant_defense {
        return hp;
    }
    scale_percent(hp, DEFENSE_HP_PERCENT).max(1)
}
