//! Stat derivation engine for the status screen tracker.
//!
//! `status-core` turns a character's raw history (level, growth phases,
//! traits, titles, free points, stat boosts and captured snapshots) into the
//! attribute values shown on the status screen. Every public operation is a
//! pure function of a [`CharacterRecord`]: nothing here performs I/O, and a
//! lookup miss always degrades to a neutral value instead of failing.
//!
//! The entry points are [`resolve`] (record -> [`StatResult`]),
//! [`capture_snapshot`] (record + result -> [`Snapshot`]) and
//! [`DerivedResources::compute`] for HP/MP.
pub mod character;
pub mod config;
pub mod error;
pub mod export;
pub mod stats;

pub use character::{
    CharacterRecord, DerivationRule, Effect, GrowthPhase, LedgerEntry, Skill, Snapshot,
    SnapshotLedger, Stat, StatBoost, StatValues, StoredResources, Title, TitleBonus, Trait,
};
pub use config::EngineRules;
pub use error::{IssueSeverity, RecordIssue};
pub use export::status_screen;
pub use stats::{
    BondRule, BondShare, BonusPair, DerivedResources, ResourceKind, ResourceMeter,
    ShareRounding, StatBreakdown, StatResult, TraitEffects, capture_snapshot, resolve,
};
