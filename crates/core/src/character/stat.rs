//! Stat identifiers and stat-keyed value maps.

use std::collections::BTreeMap;

/// The six attributes shown on a status screen.
///
/// Serialized in lowercase (`"strength"`); parsing is case-insensitive so that
/// hand-edited records and CLI arguments both work.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Stat {
    Strength,
    Agility,
    /// Feeds max HP.
    Constitution,
    Intelligence,
    Wisdom,
    /// Feeds max MP.
    Mana,
}

impl Stat {
    /// Display label used by the status screen ("Strength").
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Agility => "Agility",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Mana => "Mana",
        }
    }
}

/// Integer values keyed by [`Stat`].
///
/// A missing entry reads as 0, so callers never have to distinguish between
/// "not recorded" and "zero".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct StatValues(BTreeMap<Stat, i64>);

impl StatValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `stat`, or 0 if none is recorded.
    pub fn get(&self, stat: Stat) -> i64 {
        self.0.get(&stat).copied().unwrap_or(0)
    }

    pub fn set(&mut self, stat: Stat, value: i64) {
        self.0.insert(stat, value);
    }

    /// Adds `delta` to the current value (missing counts as 0).
    pub fn add(&mut self, stat: Stat, delta: i64) {
        *self.0.entry(stat).or_insert(0) += delta;
    }

    /// Builder-style setter.
    pub fn with(mut self, stat: Stat, value: i64) -> Self {
        self.set(stat, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, i64)> + '_ {
        self.0.iter().map(|(stat, value)| (*stat, *value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(Stat, i64)> for StatValues {
    fn from_iter<I: IntoIterator<Item = (Stat, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
