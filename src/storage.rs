//! Preference persistence.
//!
//! A single JSON file under the data directory holds the display
//! preferences (currently just the theme flag). It is read once at
//! startup and written on every toggle. A missing or corrupt file is not
//! an error: the defaults apply silently.

use color_eyre::{eyre::WrapErr, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::theme::Theme;

const PREFS_FILE: &str = "prefs.json";

/// Persisted display preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

/// Get the base data directory for the application, creating it if
/// needed.
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = PathBuf::from("data");
    if !data_dir.exists() {
        fs::create_dir(&data_dir).wrap_err("Failed to create data directory")?;
    }
    Ok(data_dir)
}

/// Load preferences from `dir`. Missing or unparseable files fall back
/// to the defaults.
pub fn load_preferences(dir: &Path) -> Preferences {
    let file_path = dir.join(PREFS_FILE);
    let Ok(json) = fs::read_to_string(&file_path) else {
        return Preferences::default();
    };
    match serde_json::from_str(&json) {
        Ok(prefs) => prefs,
        Err(e) => {
            tracing::warn!("Ignoring corrupt preferences file {:?}: {}", file_path, e);
            Preferences::default()
        }
    }
}

/// Save preferences to `dir` as pretty JSON.
pub fn save_preferences(dir: &Path, prefs: &Preferences) -> Result<()> {
    let file_path = dir.join(PREFS_FILE);
    let json = serde_json::to_string_pretty(prefs).wrap_err("Failed to serialize preferences")?;
    fs::write(&file_path, json)
        .wrap_err(format!("Failed to write preferences to {:?}", file_path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = load_preferences(dir.path());
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences { theme: Theme::Light };
        save_preferences(dir.path(), &prefs).unwrap();
        assert_eq!(load_preferences(dir.path()), prefs);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PREFS_FILE), "{not json").unwrap();
        assert_eq!(load_preferences(dir.path()).theme, Theme::Dark);
    }
}
