//! Bonus Aggregator.
//!
//! Titles and stat boosts both contribute an additive amount and a multiplier
//! *rate* per stat. Rates are summed, so the final factor is `1 + Σrate`.
//! The two sources stay separate because snapshots ledger them separately.

use crate::character::{Stat, StatBoost, Title};

/// Summed additive amount and rate for one stat.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusPair {
    pub additive: f64,
    pub rate: f64,
}

impl BonusPair {
    pub const fn new(additive: f64, rate: f64) -> Self {
        Self { additive, rate }
    }

    /// Multiplicative factor implied by the rate.
    pub fn factor(&self) -> f64 {
        1.0 + self.rate
    }

    /// Sums the contributions of every enabled source to `stat`.
    pub fn sum_over<'a, S>(sources: impl IntoIterator<Item = &'a S>, stat: Stat) -> Self
    where
        S: BonusSource + 'a,
    {
        sources
            .into_iter()
            .filter(|source| source.is_enabled())
            .fold(Self::default(), |acc, source| acc + source.contribution(stat))
    }
}

impl core::ops::Add for BonusPair {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            additive: self.additive + rhs.additive,
            rate: self.rate + rhs.rate,
        }
    }
}

/// Anything that grants per-stat additive and rate bonuses behind an enable
/// flag.
pub trait BonusSource {
    fn is_enabled(&self) -> bool;

    /// Contribution to `stat`, ignoring the enable flag.
    fn contribution(&self, stat: Stat) -> BonusPair;
}

impl BonusSource for Title {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn contribution(&self, stat: Stat) -> BonusPair {
        self.bonuses
            .iter()
            .filter(|bonus| bonus.stat == stat)
            .fold(BonusPair::default(), |acc, bonus| {
                acc + BonusPair::new(bonus.additive, bonus.multiplier)
            })
    }
}

impl BonusSource for StatBoost {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn contribution(&self, stat: Stat) -> BonusPair {
        if self.stat == stat {
            BonusPair::new(self.additive, self.multiplier)
        } else {
            BonusPair::default()
        }
    }
}

/// Current title and boost totals for one stat.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BonusTotals {
    pub titles: BonusPair,
    pub boosts: BonusPair,
}

impl BonusTotals {
    pub fn for_stat(titles: &[Title], boosts: &[StatBoost], stat: Stat) -> Self {
        Self {
            titles: BonusPair::sum_over(titles, stat),
            boosts: BonusPair::sum_over(boosts, stat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::TitleBonus;

    #[test]
    fn titles_and_boosts_are_kept_apart() {
        let titles = [
            Title::new(
                "Goblin Slayer",
                vec![
                    TitleBonus::new(Stat::Strength, 5.0, 0.1),
                    TitleBonus::new(Stat::Agility, 2.0, 0.0),
                ],
            ),
            Title::new(
                "Berserker",
                vec![TitleBonus::new(Stat::Strength, 3.0, 0.05)],
            ),
        ];
        let boosts = [StatBoost::new(Stat::Strength, 7.0, 0.2)];

        let totals = BonusTotals::for_stat(&titles, &boosts, Stat::Strength);

        assert_eq!(totals.titles.additive, 8.0);
        assert!((totals.titles.rate - 0.15).abs() < 1e-12);
        assert_eq!(totals.boosts, BonusPair::new(7.0, 0.2));
    }

    #[test]
    fn disabled_entries_are_skipped() {
        let titles = [
            Title::new("Dormant", vec![TitleBonus::new(Stat::Mana, 10.0, 0.5)]).disabled(),
        ];
        let mut boost = StatBoost::new(Stat::Mana, 4.0, 0.0);
        boost.enabled = false;

        let totals = BonusTotals::for_stat(&titles, &[boost], Stat::Mana);

        assert_eq!(totals, BonusTotals::default());
        assert_eq!(totals.titles.factor(), 1.0);
    }
}
