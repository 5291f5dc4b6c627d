//! Catalog file persistence
//!
//! The catalog is one JSON file holding an ordered array of entries;
//! insertion order is the only ordering. Every mutation rewrites the whole
//! file through a temp-file rename.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::catalog::{errors::CatalogError, types::SavedGeometry};

/// Load the catalog.
///
/// An absent or unreadable or corrupt file yields an empty catalog: the
/// file is simply rewritten on the next save. Corruption is logged but
/// never surfaced to callers.
pub fn load_catalog(path: &Path) -> Vec<SavedGeometry> {
    if !path.exists() {
        return Vec::new();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(
                event = "core.catalog.read_failed",
                file = %path.display(),
                error = %e,
                message = "Failed to read catalog file, treating as empty"
            );
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<SavedGeometry>>(&content) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(
                event = "core.catalog.corrupt",
                file = %path.display(),
                error = %e,
                message = "Catalog file is not valid JSON, treating as empty"
            );
            Vec::new()
        }
    }
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        warn!(
            event = "core.catalog.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err,
            message = "Failed to clean up temp file after write error"
        );
    }
}

/// Overwrite the catalog file with the given entries.
///
/// Creates the parent directory if missing and writes through a temp file
/// so a crash mid-write never leaves a half-written catalog behind.
pub fn save_catalog(path: &Path, entries: &[SavedGeometry]) -> Result<(), CatalogError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| CatalogError::IoError { source: e })?;
    }

    let json = serde_json::to_string_pretty(entries).map_err(|e| {
        CatalogError::SerializationFailed {
            message: e.to_string(),
        }
    })?;

    let temp_file = path.with_extension("json.tmp");

    if let Err(e) = fs::write(&temp_file, &json) {
        cleanup_temp_file(&temp_file, &e);
        return Err(CatalogError::IoError { source: e });
    }

    if let Err(e) = fs::rename(&temp_file, path) {
        cleanup_temp_file(&temp_file, &e);
        return Err(CatalogError::IoError { source: e });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(title: &str) -> SavedGeometry {
        SavedGeometry {
            title: title.to_string(),
            x: 1,
            y: 2,
            w: 300,
            h: 400,
            saved_at: Some("2026-01-01T00:00:00+00:00".to_string()),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let entries = load_catalog(&dir.path().join("catalog.json"));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "{ not json ]").unwrap();
        assert!(load_catalog(&path).is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let entries = vec![entry("First"), entry("Second"), entry("Third")];

        save_catalog(&path, &entries).unwrap();
        let loaded = load_catalog(&path);
        assert_eq!(loaded, entries);

        // save(load()) is a no-op on the stored bytes
        let before = fs::read_to_string(&path).unwrap();
        save_catalog(&path, &loaded).unwrap();
        let after = fs::read_to_string(&path).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.json");
        save_catalog(&path, &[entry("One")]).unwrap();
        assert_eq!(load_catalog(&path).len(), 1);
    }

    #[test]
    fn test_save_cleans_up_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        save_catalog(&path, &[entry("One")]).unwrap();
        assert!(!dir.path().join("catalog.json.tmp").exists());
    }

    #[test]
    fn test_save_overwrites_whole_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        save_catalog(&path, &[entry("One"), entry("Two")]).unwrap();
        save_catalog(&path, &[entry("Three")]).unwrap();

        let loaded = load_catalog(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Three");
    }
}
