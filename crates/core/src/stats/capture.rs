//! Snapshot capture: the only write-side operation of the engine.
//!
//! The caller persists the returned snapshot under `record.level`.

use super::compose::StatBreakdown;
use super::resolve::StatResult;
use crate::character::{CharacterRecord, LedgerEntry, Snapshot, SnapshotLedger};

/// Captures `result` as the new baseline at `record.level`.
///
/// `result` must be the resolution of `record` as it is now; the ledger
/// records exactly the bonuses contained in `result.stats`, so resolving the
/// record again right after storing the snapshot reproduces the same stats.
pub fn capture_snapshot(record: &CharacterRecord, result: &StatResult) -> Snapshot {
    let ledger: SnapshotLedger = result
        .breakdowns
        .iter()
        .map(|(stat, breakdown)| (*stat, ledger_entry(breakdown)))
        .collect();

    Snapshot {
        level: record.level,
        stats: result.stats.clone(),
        ledger,
    }
}

fn ledger_entry(breakdown: &StatBreakdown) -> LedgerEntry {
    LedgerEntry {
        raw_title_additive: Some(breakdown.title.additive),
        title_additive: breakdown.title.additive * breakdown.trait_multiplier,
        trait_multiplier: breakdown.trait_multiplier,
        title_rate: breakdown.title.rate,
        boost_additive: breakdown.boost.additive,
        boost_rate: breakdown.boost.rate,
        free_points: breakdown.baked_free_points,
        derivation_bonus: breakdown.derivation_bonus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Stat, Title, TitleBonus};
    use crate::stats::resolve;

    #[test]
    fn ledger_records_current_totals() {
        let mut record = CharacterRecord::new("Mira").with_level(7);
        record.free_points.set(Stat::Strength, 5);
        record.titles.push(Title::new(
            "Brawler",
            vec![TitleBonus::new(Stat::Strength, 2.0, 0.1)],
        ));

        let result = resolve(&record);
        let snapshot = capture_snapshot(&record, &result);
        let entry = snapshot.entry(Stat::Strength);

        assert_eq!(snapshot.level, 7);
        assert_eq!(snapshot.stats, result.stats);
        assert_eq!(entry.raw_title_additive, Some(2.0));
        assert_eq!(entry.title_rate, 0.1);
        assert_eq!(entry.free_points, 5);
        assert_eq!(entry.trait_multiplier, 1.0);
    }
}
