//! User preferences, persisted as TOML in the platform config folder.
//!
//! - macOS: ~/Library/Application Support/org.demog.Demographics-Dashboard/
//! - Windows: %APPDATA%/demog/Demographics Dashboard/config/
//! - Linux: ~/.config/demographicsdashboard/

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "demog";
const APP_NAME: &str = "Demographics Dashboard";
const PREFERENCES_FILENAME: &str = "preferences.toml";

/// Preferences remembered between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Dark mode enabled; `None` follows the dashboard configuration.
    pub dark_mode: Option<bool>,
    /// Data directory of the last successful load.
    pub last_data_dir: Option<PathBuf>,
}

/// Path of the preferences file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn preferences_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(PREFERENCES_FILENAME))
}

/// Load preferences, falling back to defaults on any problem.
pub fn load_preferences() -> Preferences {
    let Some(path) = preferences_path() else {
        tracing::warn!("Could not determine preferences path, using defaults");
        return Preferences::default();
    };
    load_preferences_from(&path)
}

/// Load preferences from `path`, falling back to defaults on any problem.
pub fn load_preferences_from(path: &Path) -> Preferences {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(preferences) => {
                tracing::info!(path = %path.display(), "loaded preferences");
                preferences
            }
            Err(e) => {
                tracing::warn!("Failed to parse preferences file: {}, using defaults", e);
                Preferences::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no preferences file, using defaults");
            Preferences::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read preferences file: {}, using defaults", e);
            Preferences::default()
        }
    }
}

/// Save preferences to the platform config folder.
pub fn save_preferences(preferences: &Preferences) -> Result<()> {
    let path = preferences_path().context("could not determine preferences path")?;
    save_preferences_to(preferences, &path)
}

/// Save preferences to `path`, creating the parent directory if needed.
pub fn save_preferences_to(preferences: &Preferences, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(preferences).context("serialize preferences")?;
    fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), "saved preferences");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(PREFERENCES_FILENAME);
        let preferences = Preferences {
            dark_mode: Some(true),
            last_data_dir: Some(PathBuf::from("/srv/stats")),
        };

        save_preferences_to(&preferences, &path).unwrap();

        assert_eq!(load_preferences_from(&path), preferences);
    }

    #[test]
    fn test_missing_or_broken_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PREFERENCES_FILENAME);
        assert_eq!(load_preferences_from(&path), Preferences::default());

        fs::write(&path, "dark_mode = \"sometimes\"").unwrap();
        assert_eq!(load_preferences_from(&path), Preferences::default());
    }
}
