//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific log directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/status-screen/logs`
/// - Linux: `~/.cache/status-screen/logs` (or `$XDG_CACHE_HOME/status-screen/logs`)
/// - Windows: `%LOCALAPPDATA%\status-screen\logs`
/// - Fallback: `/tmp/status-screen/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", "status-screen")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/status-screen"));

    base_dir.join("logs")
}
