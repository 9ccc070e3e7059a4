//! Delta Composer: one stat's value from snapshot baseline plus net changes.
//!
//! ```text
//! gains        = growth + redirected points + net manual points
//! pre          = base + gains × trait + net title additive + net boost additive
//! composed     = round(pre × (1 + net title rate + net boost rate))   if net rate > 0
//!              = round(pre)                                           otherwise
//! ```
//!
//! The net title rate is additionally scaled by the trait multiplier from
//! [`EngineRules::TITLE_ESCALATION_LEVEL`] on.

use super::bonus::{BonusPair, BonusTotals};
use super::growth::growth_between;
use super::ledger::{net_boost_additive, net_of, net_rates, net_title_additive};
use super::traits::TraitEffects;
use crate::character::{CharacterRecord, LedgerEntry, Snapshot, Stat};
use crate::config::EngineRules;

/// Every intermediate quantity of one stat's resolution.
///
/// Rendered as an audit trail by front ends and read back by snapshot capture.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct StatBreakdown {
    /// Snapshot level the baseline came from.
    pub snapshot_level: Option<u32>,
    pub base: i64,
    pub growth: i64,
    pub redirected_free_points: i64,
    /// Manual free points currently allocated (0 while a redirect is active).
    pub manual_free_points: i64,
    /// Manual free points not yet in the baseline; 0 while a redirect is active.
    pub net_free_points: i64,
    /// Manual free points contained in `value`. While a redirect is active
    /// this is whatever the baseline already held.
    pub baked_free_points: i64,
    pub gains: i64,
    pub trait_multiplier: f64,
    pub gains_after_trait: f64,
    /// Current title totals (raw, before the trait multiplier).
    pub title: BonusPair,
    /// Current stat boost totals.
    pub boost: BonusPair,
    pub net_title_additive: f64,
    pub net_boost_additive: f64,
    pub pre_multiplier: f64,
    pub net_title_rate: f64,
    pub net_boost_rate: f64,
    /// Whether late-game escalation scaled the net title rate.
    pub escalated: bool,
    /// Value after composition, before derivations.
    pub composed: i64,
    /// Gross derivation bonus targeting this stat.
    pub derivation_bonus: i64,
    /// Derivation bonus actually added (gross minus ledgered).
    pub net_derivation: i64,
    /// Final resolved value.
    pub value: i64,
}

/// Inputs shared by every stat of one resolution.
#[derive(Clone, Copy, Debug)]
pub struct ComposeContext<'a> {
    pub record: &'a CharacterRecord,
    pub snapshot: Option<&'a Snapshot>,
    pub effects: &'a TraitEffects,
}

impl<'a> ComposeContext<'a> {
    pub fn new(record: &'a CharacterRecord, effects: &'a TraitEffects) -> Self {
        Self {
            record,
            snapshot: record.applicable_snapshot(),
            effects,
        }
    }

    fn snapshot_level(&self) -> Option<u32> {
        self.snapshot.map(|snapshot| snapshot.level)
    }

    fn entry(&self, stat: Stat) -> LedgerEntry {
        self.snapshot
            .map(|snapshot| snapshot.entry(stat))
            .unwrap_or_default()
    }
}

/// Composes `stat` for the context's character. Never fails.
pub fn compose_stat(ctx: &ComposeContext<'_>, stat: Stat) -> StatBreakdown {
    let record = ctx.record;
    let level = record.level;
    let snapshot_level = ctx.snapshot_level();
    let entry = ctx.entry(stat);

    let base = ctx.snapshot.map_or(0, |snapshot| snapshot.stats.get(stat));

    let growth = growth_between(&record.growth_history, snapshot_level, level, stat);
    let redirected_free_points = ctx.effects.redirected_points(stat, snapshot_level, level);
    let (manual_free_points, net_free_points, baked_free_points) =
        match ctx.effects.redirect_target() {
            Some(_) => (0, 0, entry.free_points),
            None => {
                let manual = record.free_points.get(stat);
                (manual, net_of(manual, entry.free_points), manual)
            }
        };
    let gains = growth + redirected_free_points + net_free_points;

    let trait_multiplier = ctx.effects.multiplier(stat);
    let gains_after_trait = gains as f64 * trait_multiplier;

    let totals = BonusTotals::for_stat(&record.titles, &record.stat_boosts, stat);
    let net_title_additive = net_title_additive(totals.titles.additive, trait_multiplier, &entry);
    let net_boost_additive = net_boost_additive(&totals.boosts, &entry);

    let pre_multiplier = base as f64 + gains_after_trait + net_title_additive + net_boost_additive;

    let (mut net_title_rate, net_boost_rate) = net_rates(&totals.titles, &totals.boosts, &entry);
    let escalated = level >= EngineRules::TITLE_ESCALATION_LEVEL
        && trait_multiplier > 1.0
        && net_title_rate > 0.0;
    if escalated {
        net_title_rate *= trait_multiplier;
    }

    let net_rate = net_title_rate + net_boost_rate;
    let composed = if net_rate > 0.0 {
        round_half_up(pre_multiplier * (1.0 + net_rate))
    } else {
        round_half_up(pre_multiplier)
    };

    StatBreakdown {
        snapshot_level,
        base,
        growth,
        redirected_free_points,
        manual_free_points,
        net_free_points,
        baked_free_points,
        gains,
        trait_multiplier,
        gains_after_trait,
        title: totals.titles,
        boost: totals.boosts,
        net_title_additive,
        net_boost_additive,
        pre_multiplier,
        net_title_rate,
        net_boost_rate,
        escalated,
        composed,
        derivation_bonus: 0,
        net_derivation: 0,
        value: composed,
    }
}

/// Rounds to the nearest integer, halves toward positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
