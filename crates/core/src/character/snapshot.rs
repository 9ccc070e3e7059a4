//! Snapshots and the ledger of bonuses baked into them.
//!
//! A snapshot stores final stat values at capture time. Because those values
//! already contain title, boost, free-point and derivation bonuses, each
//! snapshot carries a [`SnapshotLedger`] recording exactly how much of every
//! bonus was folded in. Later resolutions add only the difference between the
//! current bonus and the ledgered one.

use std::collections::BTreeMap;

use super::stat::{Stat, StatValues};

/// Immutable stat baseline captured at a specific level.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub level: u32,
    pub stats: StatValues,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ledger: SnapshotLedger,
}

impl Snapshot {
    /// Ledger entry for `stat`; a neutral entry when nothing was recorded.
    pub fn entry(&self, stat: Stat) -> LedgerEntry {
        self.ledger.entry(stat)
    }
}

/// Per-stat record of what a snapshot's `stats` already include.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SnapshotLedger(BTreeMap<Stat, LedgerEntry>);

impl SnapshotLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, stat: Stat) -> LedgerEntry {
        self.0.get(&stat).copied().unwrap_or_default()
    }

    pub fn insert(&mut self, stat: Stat, entry: LedgerEntry) {
        self.0.insert(stat, entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, &LedgerEntry)> {
        self.0.iter().map(|(stat, entry)| (*stat, entry))
    }
}

impl FromIterator<(Stat, LedgerEntry)> for SnapshotLedger {
    fn from_iter<I: IntoIterator<Item = (Stat, LedgerEntry)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Bonuses already folded into one stat of a snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct LedgerEntry {
    /// Title additive before the trait multiplier. Absent in records written
    /// before this field existed.
    pub raw_title_additive: Option<f64>,
    /// Title additive after the trait multiplier.
    pub title_additive: f64,
    /// Trait multiplier active at capture.
    pub trait_multiplier: f64,
    pub title_rate: f64,
    pub boost_additive: f64,
    pub boost_rate: f64,
    /// Manual free points included in the baseline.
    pub free_points: i64,
    /// Gross derivation bonus included with this stat as target.
    pub derivation_bonus: i64,
}

impl Default for LedgerEntry {
    fn default() -> Self {
        Self {
            raw_title_additive: None,
            title_additive: 0.0,
            trait_multiplier: 1.0,
            title_rate: 0.0,
            boost_additive: 0.0,
            boost_rate: 0.0,
            free_points: 0,
            derivation_bonus: 0,
        }
    }
}
