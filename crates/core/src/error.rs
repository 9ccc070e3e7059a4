//! Record consistency issues.
//!
//! The engine itself never fails: a malformed record still resolves, with
//! misses degrading to neutral values. [`RecordIssue`] exists so that callers
//! (the store, the CLI) can surface inconsistencies to the user without
//! rejecting the record.

use crate::character::Stat;

/// How much an issue can distort resolved values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IssueSeverity {
    /// Data is ignored or redundant; resolved values are unaffected.
    Notice,

    /// Resolution proceeds, but values may differ from what the user expects.
    ///
    /// Examples: overlapping open growth phases, negative derivation percent
    Inconsistent,
}

impl IssueSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Notice => "notice",
            Self::Inconsistent => "inconsistent",
        }
    }
}

/// A violated record invariant.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RecordIssue {
    #[error("character level is 0; levels start at 1")]
    ZeroLevel,

    #[error("growth phase '{name}' starts at level {start_level}, before the previous phase")]
    UnsortedPhase { name: String, start_level: u32 },

    #[error("growth phase '{name}' ends at level {end_level}, before it starts at {start_level}")]
    InvertedPhase {
        name: String,
        start_level: u32,
        end_level: u32,
    },

    #[error("{count} growth phases have no end level; at most one may be active")]
    MultipleOpenPhases { count: usize },

    #[error("snapshot at level {snapshot_level} is above the current level {level} and is ignored")]
    SnapshotAboveLevel { snapshot_level: u32, level: u32 },

    #[error("snapshot stored under level {key} records level {recorded}")]
    SnapshotLevelMismatch { key: u32, recorded: u32 },

    #[error("derivation {source_stat} -> {target_stat} uses negative percent {percent}")]
    NegativeDerivation {
        source_stat: Stat,
        target_stat: Stat,
        percent: f64,
    },
}

impl RecordIssue {
    pub fn severity(&self) -> IssueSeverity {
        match self {
            Self::SnapshotAboveLevel { .. } | Self::SnapshotLevelMismatch { .. } => {
                IssueSeverity::Notice
            }
            Self::ZeroLevel
            | Self::UnsortedPhase { .. }
            | Self::InvertedPhase { .. }
            | Self::MultipleOpenPhases { .. }
            | Self::NegativeDerivation { .. } => IssueSeverity::Inconsistent,
        }
    }
}
