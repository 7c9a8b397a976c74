//! File System Utilities
//!
//! Configuration and data directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "mono-ui", "mono-ui").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/mono-ui/` or `$XDG_CONFIG_HOME/mono-ui/`
/// - **macOS**: `~/Library/Application Support/dev.mono-ui.mono-ui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\mono-ui\mono-ui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let config_dir = dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get the data directory, used for log files
///
/// - **Linux**: `~/.local/share/mono-ui/`
/// - **macOS**: `~/Library/Application Support/dev.mono-ui.mono-ui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\mono-ui\mono-ui\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let data_dir = dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
