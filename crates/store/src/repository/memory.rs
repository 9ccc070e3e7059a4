//! In-memory CharacterRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use status_core::CharacterRecord;

use super::error::{RepositoryError, Result};
use super::traits::{CharacterRepository, validate_id};

/// In-memory implementation of CharacterRepository.
pub struct InMemoryCharacterRepo {
    records: RwLock<HashMap<String, CharacterRecord>>,
}

impl InMemoryCharacterRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Create with initial records.
    pub fn with_records(records: impl IntoIterator<Item = (String, CharacterRecord)>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().collect()),
        }
    }
}

impl Default for InMemoryCharacterRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterRepository for InMemoryCharacterRepo {
    fn save(&self, id: &str, record: &CharacterRecord) -> Result<()> {
        validate_id(id)?;
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.insert(id.to_string(), record.clone());
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Option<CharacterRecord>> {
        validate_id(id)?;
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.get(id).cloned())
    }

    fn exists(&self, id: &str) -> bool {
        if validate_id(id).is_err() {
            return false;
        }
        self.records
            .read()
            .map(|records| records.contains_key(id))
            .unwrap_or(false)
    }

    fn delete(&self, id: &str) -> Result<()> {
        validate_id(id)?;
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.remove(id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<String>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<String> = records.keys().cloned().collect();
        ids.sort_unstable();
        Ok(ids)
    }
}
