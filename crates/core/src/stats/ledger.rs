//! Netting current bonuses against a snapshot ledger.
//!
//! Every bonus kind follows the same rule: what a resolution adds on top of
//! the snapshot baseline is the current amount minus the ledgered amount.

use core::ops::Sub;

use super::bonus::BonusPair;
use crate::character::LedgerEntry;

/// Amount of `current` not yet contained in `ledgered`.
pub fn net_of<T: Sub<Output = T>>(current: T, ledgered: T) -> T {
    current - ledgered
}

/// Net title additive, trait multiplier included.
///
/// When the ledger recorded the raw title additive, both sides are multiplied
/// by their own trait multiplier so a changed multiplier is accounted for.
/// Older ledgers only hold the already-multiplied total, which is compared
/// directly.
pub fn net_title_additive(current: f64, trait_multiplier: f64, entry: &LedgerEntry) -> f64 {
    let included = match entry.raw_title_additive {
        Some(raw) => raw * entry.trait_multiplier,
        None => entry.title_additive,
    };
    net_of(current * trait_multiplier, included)
}

/// Net boost additive. Boosts are never trait-multiplied.
pub fn net_boost_additive(current: &BonusPair, entry: &LedgerEntry) -> f64 {
    net_of(current.additive, entry.boost_additive)
}

/// Net title and boost rates, before late-game escalation.
pub fn net_rates(titles: &BonusPair, boosts: &BonusPair, entry: &LedgerEntry) -> (f64, f64) {
    (
        net_of(titles.rate, entry.title_rate),
        net_of(boosts.rate, entry.boost_rate),
    )
}
