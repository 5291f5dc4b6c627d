//! Default implementations for configuration types.
//!
//! This module contains all `Default` implementations and helper functions
//! for providing default values in serde deserialization.

use std::path::PathBuf;

use crate::config::types::{ApplyConfig, ApplyMode, Config, WatchConfig};
use crate::control::types::Geometry;

/// Returns the default reconciliation interval in seconds (3).
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_interval_secs() -> u64 {
    3
}

/// Returns the default settle delay in milliseconds (200).
///
/// This is the pause between clearing the fullscreen/maximized flags and
/// issuing the geometry request. Some window managers need the gap or
/// they apply the geometry to the still-maximized frame.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_settle_delay_ms() -> u64 {
    200
}

/// Returns the default target geometry for restores.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_geometry() -> Geometry {
    Geometry::new(3482, 36, 2428, 1405)
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl Default for ApplyConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            mode: ApplyMode::Default,
            default_geometry: default_geometry(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".winkeep");

        Self {
            catalog_path: base_dir.join("catalog.json"),
            settings_path: base_dir.join("settings.json"),
            translations_dir: base_dir.join("translations"),
            base_dir,
        }
    }
}
