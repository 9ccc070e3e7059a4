//! The character record: everything the engine reads about one character.

use std::collections::BTreeMap;

use super::snapshot::Snapshot;
use super::stat::{Stat, StatValues};
use crate::config::EngineRules;

/// Raw, user-edited state of one character.
///
/// Only `level` is required when deserializing; every other field defaults to
/// empty. Records are passed by reference into the engine and never mutated by
/// it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CharacterRecord {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    pub level: u32,

    /// Class/evolution phases, sorted by `start_level`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub growth_history: Vec<GrowthPhase>,

    /// Captured baselines keyed by the level they were taken at.
    #[cfg_attr(feature = "serde", serde(default))]
    pub snapshots: BTreeMap<u32, Snapshot>,

    /// Manually allocated points not explained by growth.
    #[cfg_attr(feature = "serde", serde(default))]
    pub free_points: StatValues,

    #[cfg_attr(feature = "serde", serde(default))]
    pub traits: Vec<Trait>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub titles: Vec<Title>,

    /// Bonuses outside the title system; never exported.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stat_boosts: Vec<StatBoost>,

    /// Character-level derivations, applied after trait-sourced ones.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stat_derivations: Vec<DerivationRule>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<Skill>,

    /// Last stored current HP/MP.
    #[cfg_attr(feature = "serde", serde(default))]
    pub resources: StoredResources,
}

impl CharacterRecord {
    /// A fresh character at the starting level with empty history.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: EngineRules::STARTING_LEVEL,
            growth_history: Vec::new(),
            snapshots: BTreeMap::new(),
            free_points: StatValues::new(),
            traits: Vec::new(),
            titles: Vec::new(),
            stat_boosts: Vec::new(),
            stat_derivations: Vec::new(),
            skills: Vec::new(),
            resources: StoredResources::default(),
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// The most recent snapshot taken at or below the current level.
    pub fn applicable_snapshot(&self) -> Option<&Snapshot> {
        self.snapshots
            .range(..=self.level)
            .next_back()
            .map(|(_, snapshot)| snapshot)
    }

    /// The phase with no end level, if any.
    pub fn active_phase(&self) -> Option<&GrowthPhase> {
        self.growth_history
            .iter()
            .rev()
            .find(|phase| phase.end_level.is_none())
    }
}

/// A level range during which a class or evolution grants fixed per-level
/// deltas.
///
/// The start level itself grants nothing; the end level (inclusive) does.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GrowthPhase {
    pub name: String,
    pub start_level: u32,
    /// `None` marks the active (open-ended) phase.
    #[cfg_attr(feature = "serde", serde(default))]
    pub end_level: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub per_level_deltas: StatValues,
}

impl GrowthPhase {
    pub fn new(name: impl Into<String>, start_level: u32, end_level: Option<u32>) -> Self {
        Self {
            name: name.into(),
            start_level,
            end_level,
            per_level_deltas: StatValues::new(),
        }
    }

    pub fn with_delta(mut self, stat: Stat, per_level: i64) -> Self {
        self.per_level_deltas.set(stat, per_level);
        self
    }
}

/// A named modifier bundle.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trait {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<Effect>,
}

impl Trait {
    pub fn new(name: impl Into<String>, effects: Vec<Effect>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            effects,
        }
    }
}

/// One effect of a trait, tagged by `type` in JSON.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all_fields = "camelCase")
)]
pub enum Effect {
    /// Multiplies gains of `stat`; compounds across traits.
    StatMultiplier { stat: Stat, multiplier: f64 },

    /// Funnels per-level free points into `to_stat` instead of the manual map.
    RedirectFreePoints { to_stat: Stat },

    /// Moves `percent` of one resolved stat into another.
    StatDerivation(DerivationRule),
}

/// `percent`% of `source_stat`'s resolved value is added to `target_stat`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DerivationRule {
    pub source_stat: Stat,
    pub target_stat: Stat,
    pub percent: f64,
}

impl DerivationRule {
    pub const fn new(source_stat: Stat, target_stat: Stat, percent: f64) -> Self {
        Self {
            source_stat,
            target_stat,
            percent,
        }
    }
}

/// A title with per-stat bonuses. Titles appear on the exported screen.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Title {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default = "enabled_by_default"))]
    pub enabled: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: Vec<TitleBonus>,
}

impl Title {
    pub fn new(name: impl Into<String>, bonuses: Vec<TitleBonus>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            bonuses,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Additive points plus a multiplier *rate* (0.1 = +10%).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TitleBonus {
    pub stat: Stat,
    #[cfg_attr(feature = "serde", serde(default))]
    pub additive: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub multiplier: f64,
}

impl TitleBonus {
    pub const fn new(stat: Stat, additive: f64, multiplier: f64) -> Self {
        Self {
            stat,
            additive,
            multiplier,
        }
    }
}

/// A bonus independent of titles. Never exported.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBoost {
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub stat: Stat,
    #[cfg_attr(feature = "serde", serde(default))]
    pub additive: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub multiplier: f64,
    #[cfg_attr(feature = "serde", serde(default = "enabled_by_default"))]
    pub enabled: bool,
}

impl StatBoost {
    pub fn new(stat: Stat, additive: f64, multiplier: f64) -> Self {
        Self {
            description: String::new(),
            stat,
            additive,
            multiplier,
            enabled: true,
        }
    }
}

/// A learned skill, shown on the exported screen only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub level: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// Stored current HP/MP. `None` means "at max".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoredResources {
    #[cfg_attr(feature = "serde", serde(default))]
    pub hp: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mp: Option<i64>,
}

#[cfg(feature = "serde")]
fn enabled_by_default() -> bool {
    true
}
