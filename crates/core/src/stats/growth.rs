//! Growth Table Resolver.
//!
//! A phase `{start, end}` grants its per-level deltas for every level in
//! `[start + 1, end]`; a snapshot at level `s` already contains everything up
//! to and including `s`. The resolver therefore counts the overlap of
//! `[s + 1, current]` with `[start + 1, end]`.

use crate::character::{GrowthPhase, Stat};
use crate::config::EngineRules;

impl GrowthPhase {
    /// Number of levels in the inclusive range `[from, to]` for which this
    /// phase grants its deltas.
    pub fn levels_granted(&self, from: u32, to: u32) -> i64 {
        let lo = from.max(self.start_level.saturating_add(1));
        let hi = self.end_level.map_or(to, |end| end.min(to));
        if hi < lo { 0 } else { i64::from(hi - lo + 1) }
    }
}

/// Total growth of `stat` gained after `snapshot_level` up to `current_level`.
///
/// With no snapshot, counting starts at the starting level.
pub fn growth_between(
    history: &[GrowthPhase],
    snapshot_level: Option<u32>,
    current_level: u32,
    stat: Stat,
) -> i64 {
    if current_level < EngineRules::STARTING_LEVEL {
        return 0;
    }
    let from = snapshot_level.map_or(EngineRules::STARTING_LEVEL, |level| level.saturating_add(1));

    history
        .iter()
        .map(|phase| phase.levels_granted(from, current_level) * phase.per_level_deltas.get(stat))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warrior() -> GrowthPhase {
        GrowthPhase::new("Warrior", 5, Some(10)).with_delta(Stat::Strength, 2)
    }

    #[test]
    fn start_level_grants_nothing() {
        let history = [warrior()];
        assert_eq!(growth_between(&history, None, 5, Stat::Strength), 0);
        assert_eq!(growth_between(&history, None, 6, Stat::Strength), 2);
    }

    #[test]
    fn end_level_is_inclusive() {
        let history = [warrior()];
        assert_eq!(growth_between(&history, None, 10, Stat::Strength), 10);
        assert_eq!(growth_between(&history, None, 15, Stat::Strength), 10);
    }

    #[test]
    fn snapshot_level_is_excluded() {
        let history = [warrior()];
        // Levels 9 and 10 only.
        assert_eq!(growth_between(&history, Some(8), 12, Stat::Strength), 4);
        assert_eq!(growth_between(&history, Some(10), 12, Stat::Strength), 0);
    }

    #[test]
    fn open_phase_and_gaps() {
        let history = [
            warrior(),
            GrowthPhase::new("Knight", 15, None)
                .with_delta(Stat::Strength, 3)
                .with_delta(Stat::Constitution, 1),
        ];
        // 10 from Warrior, levels 11..=15 are a gap, 16..=20 give 5 × 3.
        assert_eq!(growth_between(&history, None, 20, Stat::Strength), 25);
        assert_eq!(growth_between(&history, None, 20, Stat::Constitution), 5);
        assert_eq!(growth_between(&history, None, 20, Stat::Mana), 0);
    }

    #[test]
    fn level_zero_has_no_growth() {
        let history = [GrowthPhase::new("Egg", 0, None).with_delta(Stat::Mana, 1)];
        assert_eq!(growth_between(&history, None, 0, Stat::Mana), 0);
        assert_eq!(growth_between(&history, None, 1, Stat::Mana), 1);
    }
}
