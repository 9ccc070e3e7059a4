//! Invariant checks over a [`CharacterRecord`].

use super::record::{CharacterRecord, DerivationRule, Effect};
use crate::error::RecordIssue;

impl CharacterRecord {
    /// Lists every violated record invariant, in record order.
    ///
    /// An empty list means the record is consistent. Issues never block
    /// resolution; see [`RecordIssue`].
    pub fn validate(&self) -> Vec<RecordIssue> {
        let mut issues = Vec::new();

        if self.level == 0 {
            issues.push(RecordIssue::ZeroLevel);
        }

        let mut previous_start = None;
        for phase in &self.growth_history {
            if previous_start.is_some_and(|start| phase.start_level < start) {
                issues.push(RecordIssue::UnsortedPhase {
                    name: phase.name.clone(),
                    start_level: phase.start_level,
                });
            }
            previous_start = Some(phase.start_level);

            if let Some(end_level) = phase.end_level
                && end_level < phase.start_level
            {
                issues.push(RecordIssue::InvertedPhase {
                    name: phase.name.clone(),
                    start_level: phase.start_level,
                    end_level,
                });
            }
        }

        let open = self
            .growth_history
            .iter()
            .filter(|phase| phase.end_level.is_none())
            .count();
        if open > 1 {
            issues.push(RecordIssue::MultipleOpenPhases { count: open });
        }

        for (&key, snapshot) in &self.snapshots {
            if key > self.level {
                issues.push(RecordIssue::SnapshotAboveLevel {
                    snapshot_level: key,
                    level: self.level,
                });
            }
            if snapshot.level != key {
                issues.push(RecordIssue::SnapshotLevelMismatch {
                    key,
                    recorded: snapshot.level,
                });
            }
        }

        let trait_rules = self.traits.iter().flat_map(|t| &t.effects).filter_map(|e| match e {
            Effect::StatDerivation(rule) => Some(rule),
            Effect::StatMultiplier { .. } | Effect::RedirectFreePoints { .. } => None,
        });
        for rule in trait_rules.chain(&self.stat_derivations) {
            if rule.percent < 0.0 {
                issues.push(negative(rule));
            }
        }

        issues
    }
}

fn negative(rule: &DerivationRule) -> RecordIssue {
    RecordIssue::NegativeDerivation {
        source_stat: rule.source_stat,
        target_stat: rule.target_stat,
        percent: rule.percent,
    }
}
