//! Derivation Resolver: the second pass over composed stats.
//!
//! Rules run in order against the live stat map, so a rule reads any change
//! an earlier rule made to its source. A snapshot baseline already contains
//! the derivation bonuses that were active at capture; those are taken back
//! out of the map first and every rule is replayed in full. A rule therefore
//! reads the same source values it read at capture, whatever the rule order.

use std::collections::BTreeMap;

use super::ledger::net_of;
use crate::character::{DerivationRule, SnapshotLedger, Stat, StatValues};

/// Running state of one derivation pass.
#[derive(Clone, Debug, Default)]
pub struct DerivationPass {
    ledgered: BTreeMap<Stat, i64>,
    gross: BTreeMap<Stat, i64>,
}

impl DerivationPass {
    pub fn new(ledger: Option<&SnapshotLedger>) -> Self {
        let ledgered = ledger
            .into_iter()
            .flat_map(|ledger| ledger.iter())
            .filter(|(_, entry)| entry.derivation_bonus != 0)
            .map(|(stat, entry)| (stat, entry.derivation_bonus))
            .collect();

        Self {
            ledgered,
            gross: BTreeMap::new(),
        }
    }

    /// Removes the ledgered bonuses from `stats`, then applies every rule in
    /// order.
    pub fn apply_all<'r>(
        &mut self,
        rules: impl IntoIterator<Item = &'r DerivationRule>,
        stats: &mut StatValues,
    ) {
        for (stat, ledgered) in &self.ledgered {
            stats.add(*stat, -ledgered);
        }
        for rule in rules {
            self.apply(rule, stats);
        }
    }

    fn apply(&mut self, rule: &DerivationRule, stats: &mut StatValues) {
        let bonus = (stats.get(rule.source_stat) as f64 * rule.percent / 100.0).floor() as i64;
        *self.gross.entry(rule.target_stat).or_insert(0) += bonus;
        stats.add(rule.target_stat, bonus);
    }

    /// Sum of bonuses computed for `target`.
    pub fn gross(&self, target: Stat) -> i64 {
        self.gross.get(&target).copied().unwrap_or(0)
    }

    /// Bonus the snapshot baseline already held for `target`.
    pub fn ledgered(&self, target: Stat) -> i64 {
        self.ledgered.get(&target).copied().unwrap_or(0)
    }

    /// Change to `target` relative to its composed value.
    pub fn net(&self, target: Stat) -> i64 {
        net_of(self.gross(target), self.ledgered(target))
    }
}
