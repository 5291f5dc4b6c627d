//! Label lookup tables loaded from per-language JSON files.
//!
//! Each `<code>.json` file in the translations directory is a flat map of
//! label key to display string. Adding a language is dropping in a file.
//! Lookup is a pure function over the loaded tables: requested language,
//! then the default language, then a bracket-wrapped placeholder so a
//! missing key is visible instead of invisible.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::i18n::settings::DEFAULT_LANG;

#[derive(Debug, Clone, Default)]
pub struct Translations {
    tables: HashMap<String, HashMap<String, String>>,
}

/// Labels that ship with the binary so the default language works without
/// any translation files installed. An `en.json` on disk overrides these
/// key by key.
fn builtin_en() -> HashMap<String, String> {
    [
        ("active_windows", "Windows on screen:"),
        ("saved_windows", "Saved windows:"),
        ("no_windows", "No windows found."),
        ("no_saved", "No saved windows."),
        ("current_language", "Current language"),
        ("available_languages", "Available languages"),
        ("unknown_language", "No translations for language"),
        ("watch_started", "Watching for saved windows (Ctrl-C to stop)"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Translations {
    /// Load every `<code>.json` file in the directory. Files that cannot
    /// be read or parsed are skipped individually.
    pub fn load(dir: &Path) -> Self {
        let mut tables = HashMap::from([(DEFAULT_LANG.to_string(), builtin_en())]);

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(
                    event = "core.i18n.translations_dir_absent",
                    dir = %dir.display(),
                    error = %e,
                    message = "No translations directory, using built-in labels"
                );
                return Self { tables };
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let Some(code) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!(
                        event = "core.i18n.translation_read_failed",
                        file = %path.display(),
                        error = %e,
                        message = "Failed to read translation file, skipping"
                    );
                    continue;
                }
            };

            match serde_json::from_str::<HashMap<String, String>>(&content) {
                Ok(table) => {
                    tables.entry(code.to_string()).or_default().extend(table);
                }
                Err(e) => {
                    warn!(
                        event = "core.i18n.translation_invalid_json",
                        file = %path.display(),
                        error = %e,
                        message = "Translation file is not a flat JSON object, skipping"
                    );
                }
            }
        }

        debug!(
            event = "core.i18n.translations_loaded",
            language_count = tables.len()
        );
        Self { tables }
    }

    /// Available language codes, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.tables.keys().cloned().collect();
        codes.sort();
        codes
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.tables.contains_key(lang)
    }

    /// Look up a label: requested language, then the default language,
    /// then `[key]`.
    pub fn lookup(&self, lang: &str, key: &str) -> String {
        if let Some(value) = self.tables.get(lang).and_then(|t| t.get(key)) {
            return value.clone();
        }
        if lang != DEFAULT_LANG {
            if let Some(value) = self.tables.get(DEFAULT_LANG).and_then(|t| t.get(key)) {
                return value.clone();
            }
        }
        format!("[{}]", key)
    }

    #[cfg(test)]
    pub fn from_tables(tables: HashMap<String, HashMap<String, String>>) -> Self {
        Self { tables }
    }
}
