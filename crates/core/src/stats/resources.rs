//! Derived Resource Calculator.
//!
//! Resource pools are partially stored:
//! - Maximum values: computed from resolved stats (NOT stored)
//! - Current values: user state (stored on the record)
//!
//! Formulas:
//! - HP_max = (CON + borrowed CON) × 10
//! - MP_max = (MANA + borrowed MANA) × 10

use super::bond::{BondShare, borrowed};
use crate::character::{Stat, StatValues, StoredResources};
use crate::config::EngineRules;

/// Individual resource pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE")]
pub enum ResourceKind {
    /// Health points.
    Hp,
    /// Magic points (mana).
    Mp,
}

impl ResourceKind {
    /// Stat the pool's maximum is derived from.
    pub const fn source_stat(self) -> Stat {
        match self {
            Self::Hp => Stat::Constitution,
            Self::Mp => Stat::Mana,
        }
    }

    pub const fn per_point(self) -> i64 {
        match self {
            Self::Hp => EngineRules::HP_PER_CONSTITUTION,
            Self::Mp => EngineRules::MP_PER_MANA,
        }
    }

    /// Maximum for this pool from resolved stats plus any borrowed shares.
    pub fn maximum(self, stats: &StatValues, shares: &[BondShare]) -> i64 {
        let stat = self.source_stat();
        (stats.get(stat) + borrowed(shares, stat)) * self.per_point()
    }
}

/// Current and maximum value of one pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: i64,
    pub max: i64,
}

impl ResourceMeter {
    /// Meter with `stored` clamped to `max`; no stored value means full.
    ///
    /// Recomputation may lower the current value when the maximum shrank but
    /// never raises it.
    pub fn clamped(stored: Option<i64>, max: i64) -> Self {
        Self {
            current: stored.unwrap_or(max).min(max),
            max,
        }
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Percentage of the maximum, 100 for an empty pool.
    pub fn percent(&self) -> i64 {
        if self.max <= 0 {
            return 100;
        }
        self.current * 100 / self.max
    }
}

/// HP and MP meters for one character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedResources {
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
}

impl DerivedResources {
    pub fn compute(stats: &StatValues, shares: &[BondShare], stored: &StoredResources) -> Self {
        Self {
            hp: ResourceMeter::clamped(stored.hp, ResourceKind::Hp.maximum(stats, shares)),
            mp: ResourceMeter::clamped(stored.mp, ResourceKind::Mp.maximum(stats, shares)),
        }
    }

    pub fn get(&self, kind: ResourceKind) -> ResourceMeter {
        match kind {
            ResourceKind::Hp => self.hp,
            ResourceKind::Mp => self.mp,
        }
    }
}
