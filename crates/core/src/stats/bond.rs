//! Bond Synchronizer.
//!
//! A bond lets one character borrow a share of a partner's resolved stat for
//! resource maxima and display. The borrowed amount is returned as a separate
//! value and is never written into the borrower's own stats.

use crate::character::{Stat, StatValues};

/// How a fractional share is turned into whole points.
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
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ShareRounding {
    #[default]
    Floor,
    /// Nearest integer, halves rounded up.
    Round,
}

impl ShareRounding {
    pub fn apply(self, value: f64) -> i64 {
        match self {
            Self::Floor => value.floor() as i64,
            Self::Round => super::compose::round_half_up(value),
        }
    }
}

/// "Borrow `numerator/denominator` of the partner's `stat`."
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BondRule {
    pub stat: Stat,
    pub numerator: u32,
    pub denominator: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rounding: ShareRounding,
}

impl BondRule {
    pub const fn new(
        stat: Stat,
        numerator: u32,
        denominator: u32,
        rounding: ShareRounding,
    ) -> Self {
        Self {
            stat,
            numerator,
            denominator,
            rounding,
        }
    }

    /// Half of the partner's `stat`, floored.
    pub const fn half(stat: Stat) -> Self {
        Self::new(stat, 1, 2, ShareRounding::Floor)
    }

    /// Computes the share borrowed from `partner`. A zero denominator
    /// borrows nothing.
    pub fn borrow(&self, partner: &StatValues) -> BondShare {
        let amount = if self.denominator == 0 {
            0
        } else {
            let share = partner.get(self.stat) as f64 * f64::from(self.numerator)
                / f64::from(self.denominator);
            self.rounding.apply(share)
        };

        BondShare {
            stat: self.stat,
            amount,
        }
    }
}

/// Points of `stat` borrowed from a bonded partner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BondShare {
    pub stat: Stat,
    pub amount: i64,
}

/// Total borrowed for `stat` across all shares.
pub fn borrowed(shares: &[BondShare], stat: Stat) -> i64 {
    shares
        .iter()
        .filter(|share| share.stat == stat)
        .map(|share| share.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_share_is_floored() {
        let partner = StatValues::new().with(Stat::Mana, 51);
        let share = BondRule::half(Stat::Mana).borrow(&partner);
        assert_eq!(
            share,
            BondShare {
                stat: Stat::Mana,
                amount: 25,
            }
        );
    }

    #[test]
    fn round_rule_rounds_half_up() {
        let partner = StatValues::new().with(Stat::Mana, 51);
        let rule = BondRule::new(Stat::Mana, 1, 2, ShareRounding::Round);
        assert_eq!(rule.borrow(&partner).amount, 26);
    }

    #[test]
    fn zero_denominator_borrows_nothing() {
        let partner = StatValues::new().with(Stat::Mana, 80);
        let rule = BondRule::new(Stat::Mana, 1, 0, ShareRounding::Floor);
        assert_eq!(rule.borrow(&partner).amount, 0);
    }

    #[test]
    fn borrowed_sums_matching_shares() {
        let shares = [
            BondShare {
                stat: Stat::Mana,
                amount: 10,
            },
            BondShare {
                stat: Stat::Constitution,
                amount: 4,
            },
            BondShare {
                stat: Stat::Mana,
                amount: 5,
            },
        ];
        assert_eq!(borrowed(&shares, Stat::Mana), 15);
        assert_eq!(borrowed(&shares, Stat::Wisdom), 0);
    }
}
