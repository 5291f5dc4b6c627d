//! Catalog mutations: read-modify-write operations on the catalog file.

use std::path::Path;

use tracing::info;

use crate::catalog::errors::CatalogError;
use crate::catalog::persistence::{load_catalog, save_catalog};
use crate::catalog::types::SavedGeometry;

/// Append a record unless an entry with the same title already exists.
///
/// Titles are the identity of catalog entries; exact-match dedup keeps
/// them unique. Returns `true` if the record was inserted.
pub fn append_if_absent(path: &Path, record: SavedGeometry) -> Result<bool, CatalogError> {
    let mut entries = load_catalog(path);

    if entries.iter().any(|e| e.title == record.title) {
        info!(
            event = "core.catalog.append_duplicate",
            title = %record.title
        );
        return Ok(false);
    }

    info!(
        event = "core.catalog.entry_appended",
        title = %record.title,
        geometry = %record.geometry()
    );
    entries.push(record);
    save_catalog(path, &entries)?;
    Ok(true)
}

/// Remove the entry at `index`, preserving the order of the rest.
///
/// An out-of-range index returns `None` and leaves the catalog unchanged.
pub fn delete_at(path: &Path, index: usize) -> Result<Option<SavedGeometry>, CatalogError> {
    let mut entries = load_catalog(path);

    if index >= entries.len() {
        return Ok(None);
    }

    let removed = entries.remove(index);
    save_catalog(path, &entries)?;

    info!(
        event = "core.catalog.entry_deleted",
        title = %removed.title,
        index
    );
    Ok(Some(removed))
}
