//! Stat Derivation Engine.
//!
//! # Architecture
//!
//! ```text
//! [ Growth ] [ Traits ] [ Titles / Boosts ]     per stat
//!      \         |         /
//!       [ Delta Composer ] <── snapshot baseline + ledger
//!              ↓
//!       [ Derivations ]                          across stats
//!              ↓
//!        StatResult ──> [ Snapshot capture ]
//!              ↓
//!   [ Bond share ] ──> [ HP / MP ]
//! ```
//!
//! ## Principles
//!
//! 1. **Pure**: every operation is a function of the record; no I/O
//! 2. **No double counting**: snapshot values are a baseline, and only the
//!    difference against the snapshot ledger is added on top
//! 3. **Never fails**: a missing entry means "no effect"
//! 4. **Round-trip**: capture followed by resolve reproduces the stats

pub mod bond;
pub mod bonus;
pub mod capture;
pub mod compose;
pub mod derivation;
pub mod growth;
pub mod ledger;
pub mod resolve;
pub mod resources;
pub mod traits;

pub use bond::{BondRule, BondShare, ShareRounding};
pub use bonus::{BonusPair, BonusSource, BonusTotals};
pub use capture::capture_snapshot;
pub use compose::{ComposeContext, StatBreakdown, compose_stat};
pub use derivation::DerivationPass;
pub use growth::growth_between;
pub use ledger::net_of;
pub use resolve::{StatResult, resolve};
pub use resources::{DerivedResources, ResourceKind, ResourceMeter};
pub use traits::TraitEffects;
