//! Trait Effect Resolver.
//!
//! Folds a character's traits into the three effect kinds the engine knows:
//! gain multipliers, free-point redirection and stat derivations.

use std::collections::BTreeMap;

use crate::character::{DerivationRule, Effect, Stat, Trait};
use crate::config::EngineRules;

/// Effects of all traits, collected once per resolution.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TraitEffects {
    multipliers: BTreeMap<Stat, f64>,
    redirect: Option<Stat>,
    derivations: Vec<DerivationRule>,
}

impl TraitEffects {
    pub fn collect(traits: &[Trait]) -> Self {
        let mut effects = Self::default();

        for effect in traits.iter().flat_map(|t| &t.effects) {
            match effect {
                Effect::StatMultiplier { stat, multiplier } => {
                    *effects.multipliers.entry(*stat).or_insert(1.0) *= multiplier;
                }
                Effect::RedirectFreePoints { to_stat } => {
                    // Only the first redirect counts.
                    effects.redirect.get_or_insert(*to_stat);
                }
                Effect::StatDerivation(rule) => effects.derivations.push(*rule),
            }
        }

        effects
    }

    /// Compound gain multiplier for `stat`; 1 when no trait touches it.
    pub fn multiplier(&self, stat: Stat) -> f64 {
        self.multipliers.get(&stat).copied().unwrap_or(1.0)
    }

    /// Stat receiving redirected free points, if any trait redirects them.
    pub fn redirect_target(&self) -> Option<Stat> {
        self.redirect
    }

    /// Trait-sourced derivation rules, in trait order.
    pub fn derivations(&self) -> &[DerivationRule] {
        &self.derivations
    }

    /// Free points redirected into `stat` for the level-ups since the
    /// snapshot. Zero for every stat but the redirect target.
    pub fn redirected_points(&self, stat: Stat, snapshot_level: Option<u32>, level: u32) -> i64 {
        if self.redirect != Some(stat) {
            return 0;
        }
        EngineRules::FREE_POINTS_PER_LEVEL * i64::from(level_ups_since(snapshot_level, level))
    }
}

/// Level-ups between the baseline (snapshot level, or the starting level) and
/// `level`.
pub fn level_ups_since(snapshot_level: Option<u32>, level: u32) -> u32 {
    level.saturating_sub(snapshot_level.unwrap_or(EngineRules::STARTING_LEVEL))
}
