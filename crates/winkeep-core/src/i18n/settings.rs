//! Settings file persistence.
//!
//! Settings live in their own JSON file, separate from the catalog, and
//! get the same resilience treatment: absent or corrupt means defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::i18n::errors::I18nError;

pub const DEFAULT_LANG: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lang: default_lang(),
        }
    }
}

/// Load settings; an absent or corrupt file yields the defaults.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(
                event = "core.i18n.settings_read_failed",
                file = %path.display(),
                error = %e,
                message = "Failed to read settings file, using defaults"
            );
            return Settings::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(
                event = "core.i18n.settings_corrupt",
                file = %path.display(),
                error = %e,
                message = "Settings file is not valid JSON, using defaults"
            );
            Settings::default()
        }
    }
}

/// Overwrite the settings file, creating the parent directory if missing.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), I18nError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| I18nError::IoError { source: e })?;
    }

    let json =
        serde_json::to_string_pretty(settings).map_err(|e| I18nError::SerializationFailed {
            message: e.to_string(),
        })?;

    fs::write(path, json).map_err(|e| I18nError::IoError { source: e })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_settings_default_to_en() {
        let dir = tempdir().unwrap();
        let settings = load_settings(&dir.path().join("settings.json"));
        assert_eq!(settings.lang, "en");
    }

    #[test]
    fn test_corrupt_settings_default_to_en() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "oops").unwrap();
        assert_eq!(load_settings(&path).lang, "en");
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            lang: "cs".to_string(),
        };
        save_settings(&path, &settings).unwrap();
        assert_eq!(load_settings(&path), settings);
    }
}
