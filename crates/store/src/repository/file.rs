//! File-based CharacterRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use status_core::CharacterRecord;

use super::error::{RepositoryError, Result};
use super::traits::{CharacterRepository, validate_id};

/// File-based implementation of CharacterRepository.
///
/// Stores each character as an individual JSON document.
///
/// # File Format
///
/// Records are stored as `character_{id}.json`, pretty-printed so they stay
/// readable and hand-editable.
pub struct FileCharacterRepository {
    base_dir: PathBuf,
}

impl FileCharacterRepository {
    /// Create a new file-based character repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a character file.
    fn record_path(&self, id: &str) -> PathBuf {
        self.base_dir.join(format!("character_{}.json", id))
    }
}

impl CharacterRepository for FileCharacterRepository {
    fn save(&self, id: &str, record: &CharacterRecord) -> Result<()> {
        validate_id(id)?;
        let path = self.record_path(id);
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved character[{}] to {}", id, path.display());

        Ok(())
    }

    fn load(&self, id: &str) -> Result<Option<CharacterRecord>> {
        validate_id(id)?;
        let path = self.record_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path).map_err(RepositoryError::Io)?;
        let record: CharacterRecord =
            serde_json::from_str(&json).map_err(|e| RepositoryError::Json(e.to_string()))?;

        tracing::debug!(
            "Loaded character[{}] from {} ({} snapshots)",
            id,
            path.display(),
            record.snapshots.len()
        );

        Ok(Some(record))
    }

    fn exists(&self, id: &str) -> bool {
        validate_id(id).is_ok() && self.record_path(id).exists()
    }

    fn delete(&self, id: &str) -> Result<()> {
        validate_id(id)?;
        let path = self.record_path(id);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted character[{}]", id);
        }

        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id) = filename
                    .strip_prefix("character_")
                    .and_then(|s| s.strip_suffix(".json"))
                && validate_id(id).is_ok()
            {
                ids.push(id.to_string());
            }
        }

        ids.sort();
        Ok(ids)
    }
}
