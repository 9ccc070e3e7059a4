//! Application service tying the repository to the stat engine.

use serde::Serialize;
use status_core::{
    BondRule, BondShare, CharacterRecord, DerivedResources, IssueSeverity, RecordIssue, Snapshot,
    StatResult, capture_snapshot, resolve, status_screen,
};
use thiserror::Error;

use crate::repository::{CharacterRepository, RepositoryError};

/// Errors raised by [`StatusService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("character '{0}' not found")]
    CharacterNotFound(String),

    #[error("character '{id}' already has a snapshot at level {level}")]
    SnapshotExists { id: String, level: u32 },

    #[error("character '{0}' already exists")]
    CharacterExists(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Everything the status screen shows for one character.
#[derive(Clone, Debug, Serialize)]
pub struct CharacterStatus {
    pub id: String,
    pub record: CharacterRecord,
    pub result: StatResult,
    pub resources: DerivedResources,
    /// Share borrowed from a bonded partner, if one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bond: Option<BondShare>,
    #[serde(skip)]
    pub issues: Vec<RecordIssue>,
}

impl CharacterStatus {
    fn new(id: &str, record: CharacterRecord, bond: Option<BondShare>) -> Self {
        let result = resolve(&record);
        let shares: Vec<BondShare> = bond.into_iter().collect();
        let resources = DerivedResources::compute(&result.stats, &shares, &record.resources);
        let issues = record.validate();

        Self {
            id: id.to_string(),
            record,
            result,
            resources,
            bond,
            issues,
        }
    }

    /// Plain-text status screen.
    pub fn screen(&self) -> String {
        status_screen(&self.record, &self.result, &self.resources)
    }
}

/// Loads records, resolves them and persists snapshot captures.
pub struct StatusService<R: CharacterRepository> {
    repo: R,
}

impl<R: CharacterRepository> StatusService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Stores a fresh level-1 record under `id`.
    pub fn create(&self, id: &str, name: &str) -> Result<CharacterRecord> {
        if self.repo.exists(id) {
            return Err(ServiceError::CharacterExists(id.to_string()));
        }

        let record = CharacterRecord::new(name);
        self.repo.save(id, &record)?;
        tracing::info!("Created character[{}] '{}'", id, name);

        Ok(record)
    }

    /// Loads a record, logging any inconsistencies found in it.
    pub fn load(&self, id: &str) -> Result<CharacterRecord> {
        let record = self
            .repo
            .load(id)?
            .ok_or_else(|| ServiceError::CharacterNotFound(id.to_string()))?;

        for issue in record.validate() {
            match issue.severity() {
                IssueSeverity::Inconsistent => {
                    tracing::warn!("character[{}]: {}", id, issue)
                }
                IssueSeverity::Notice => tracing::debug!("character[{}]: {}", id, issue),
            }
        }

        Ok(record)
    }

    pub fn status(&self, id: &str) -> Result<CharacterStatus> {
        let record = self.load(id)?;
        Ok(CharacterStatus::new(id, record, None))
    }

    /// Status of `id` with a share of `partner`'s resolved stat applied to
    /// its resources. The partner's record is read, never written.
    pub fn bonded_status(
        &self,
        id: &str,
        partner: &str,
        rule: BondRule,
    ) -> Result<CharacterStatus> {
        let record = self.load(id)?;
        let partner_record = self.load(partner)?;
        let share = rule.borrow(&resolve(&partner_record).stats);

        tracing::debug!(
            "character[{}] borrows {} {} from character[{}]",
            id,
            share.amount,
            share.stat,
            partner
        );

        Ok(CharacterStatus::new(id, record, Some(share)))
    }

    /// Captures a snapshot at the character's current level and saves it.
    ///
    /// Snapshots are append-only: a second capture at the same level is
    /// rejected.
    pub fn take_snapshot(&self, id: &str) -> Result<Snapshot> {
        let mut record = self.load(id)?;
        let level = record.level;

        if record.snapshots.contains_key(&level) {
            return Err(ServiceError::SnapshotExists {
                id: id.to_string(),
                level,
            });
        }

        let result = resolve(&record);
        let snapshot = capture_snapshot(&record, &result);
        record.snapshots.insert(level, snapshot.clone());
        self.repo.save(id, &record)?;

        tracing::info!(
            "Captured snapshot for character[{}] at level {} ({} snapshots)",
            id,
            level,
            record.snapshots.len()
        );

        Ok(snapshot)
    }

    pub fn export(&self, id: &str) -> Result<String> {
        Ok(self.status(id)?.screen())
    }

    pub fn list(&self) -> Result<Vec<String>> {
        Ok(self.repo.list_ids()?)
    }
}
