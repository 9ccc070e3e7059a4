//! Repository contract for character records.

use status_core::CharacterRecord;

use super::error::{RepositoryError, Result};

/// Repository for character record persistence.
///
/// Records are whole documents: a save replaces the stored record, and a
/// reader sees either the old or the new version, never a mix.
pub trait CharacterRepository: Send + Sync {
    /// Save a record under `id`, replacing any previous version
    fn save(&self, id: &str, record: &CharacterRecord) -> Result<()>;

    /// Load the record stored under `id`
    fn load(&self, id: &str) -> Result<Option<CharacterRecord>>;

    /// Check if a record exists
    fn exists(&self, id: &str) -> bool;

    /// Delete a record; deleting a missing record is not an error
    fn delete(&self, id: &str) -> Result<()>;

    /// List all stored ids, sorted
    fn list_ids(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}

/// Rejects ids that could escape the storage directory or collide after
/// normalization.
pub fn validate_id(id: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidId(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_ids() {
        assert!(validate_id("mira").is_ok());
        assert!(validate_id("party_01-b").is_ok());
    }

    #[test]
    fn rejects_path_like_ids() {
        for id in ["", "../mira", "a/b", "mira.json", "mi ra"] {
            assert!(
                matches!(validate_id(id), Err(RepositoryError::InvalidId(_))),
                "{id:?} should be rejected"
            );
        }
    }
}
