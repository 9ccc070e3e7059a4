//! Store configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

/// Where character records live on disk.
#[derive(Clone, Debug, Default)]
pub struct StoreConfig {
    /// Explicit data directory; `None` falls back to the platform default.
    pub data_dir: Option<PathBuf>,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `STATUS_DATA_DIR` - Directory for character records (default: platform-specific)
    pub fn from_env() -> Self {
        Self {
            data_dir: read_env::<PathBuf>("STATUS_DATA_DIR"),
        }
    }

    /// Resolved data directory.
    ///
    /// Follows platform conventions:
    /// - macOS: `~/Library/Application Support/status-screen`
    /// - Linux: `~/.local/share/status-screen` (or `$XDG_DATA_HOME/status-screen`)
    /// - Windows: `%APPDATA%\status-screen`
    /// - Fallback: `./status_data`
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", "status-screen")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("./status_data"))
        })
    }

    /// Directory holding `character_<id>.json` files.
    pub fn characters_dir(&self) -> PathBuf {
        self.data_dir().join("characters")
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().filter(|v| !v.is_empty())?.parse().ok()
}
