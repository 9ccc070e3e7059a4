//! Character record types.
//!
//! These are the engine's inputs. They are owned by the persistence layer and
//! serialize to the JSON documents edited by the UI (camelCase keys).

mod record;
mod snapshot;
mod stat;
mod validate;

pub use record::{
    CharacterRecord, DerivationRule, Effect, GrowthPhase, Skill, StatBoost, StoredResources,
    Title, TitleBonus, Trait,
};
pub use snapshot::{LedgerEntry, Snapshot, SnapshotLedger};
pub use stat::{Stat, StatValues};
