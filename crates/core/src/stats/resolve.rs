//! Full resolution of a character: compose every stat, then run derivations.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use super::compose::{ComposeContext, StatBreakdown, compose_stat};
use super::derivation::DerivationPass;
use super::traits::TraitEffects;
use crate::character::{CharacterRecord, Stat, StatValues};

/// Resolved stats plus the audit trail for each.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatResult {
    pub stats: StatValues,
    pub breakdowns: BTreeMap<Stat, StatBreakdown>,
}

impl StatResult {
    pub fn get(&self, stat: Stat) -> i64 {
        self.stats.get(stat)
    }

    pub fn breakdown(&self, stat: Stat) -> Option<&StatBreakdown> {
        self.breakdowns.get(&stat)
    }
}

/// Resolves every stat of `record`.
///
/// Pure and deterministic: resolving the same record twice yields identical
/// results.
pub fn resolve(record: &CharacterRecord) -> StatResult {
    let effects = TraitEffects::collect(&record.traits);
    let ctx = ComposeContext::new(record, &effects);

    let mut stats = StatValues::new();
    let mut breakdowns = BTreeMap::new();
    for stat in Stat::iter() {
        let breakdown = compose_stat(&ctx, stat);
        stats.set(stat, breakdown.composed);
        breakdowns.insert(stat, breakdown);
    }

    let mut pass = DerivationPass::new(ctx.snapshot.map(|snapshot| &snapshot.ledger));
    pass.apply_all(
        effects.derivations().iter().chain(&record.stat_derivations),
        &mut stats,
    );

    for (stat, breakdown) in &mut breakdowns {
        breakdown.derivation_bonus = pass.gross(*stat);
        breakdown.net_derivation = pass.net(*stat);
        breakdown.value = stats.get(*stat);
    }

    StatResult { stats, breakdowns }
}
