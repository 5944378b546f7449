//! User preferences persistence.
//!
//! Stores user preferences in `~/.acrostic/preferences.json`.

use acrostic_external::ExportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Error type for preferences operations.
#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// User preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Format used by `export` when neither `--format` nor the output extension decide.
    #[serde(default)]
    pub export_format: ExportFormat,
    /// Print the label overlay in `check` without passing `--labels`.
    #[serde(default)]
    pub show_labels: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            export_format: ExportFormat::Json,
            show_labels: false,
        }
    }
}

/// Get the preferences file path (`~/.acrostic/preferences.json`).
pub fn preferences_path() -> Result<PathBuf, PreferencesError> {
    let home = dirs::home_dir().ok_or(PreferencesError::NoHomeDir)?;
    Ok(home.join(".acrostic").join("preferences.json"))
}

/// Load preferences from disk.
///
/// Returns default preferences if the file doesn't exist or can't be read.
pub fn load_preferences() -> Preferences {
    let path = match preferences_path() {
        Ok(p) => p,
        Err(_) => return Preferences::default(),
    };

    if !path.exists() {
        return Preferences::default();
    }

    let contents = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("could not read {}: {}", path.display(), e);
            return Preferences::default();
        }
    };

    parse_preferences(&contents)
}

fn parse_preferences(contents: &str) -> Preferences {
    serde_json::from_str(contents).unwrap_or_else(|e| {
        log::warn!("ignoring malformed preferences: {}", e);
        Preferences::default()
    })
}

/// Save preferences to disk.
pub fn save_preferences(prefs: &Preferences) -> Result<(), PreferencesError> {
    let path = preferences_path()?;

    // Ensure the directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(prefs)?;
    std::fs::write(&path, json)?;

    Ok(())
}
