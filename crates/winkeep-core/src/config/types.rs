//! Configuration type definitions for winkeep.
//!
//! These types are serialized/deserialized from the TOML config file at
//! `~/.winkeep/config.toml`.
//!
//! # Example Configuration
//!
//! ```toml
//! [watch]
//! interval_secs = 3
//!
//! [apply]
//! settle_delay_ms = 200
//! mode = "default"
//! default_geometry = { x = 3482, y = 36, w = 2428, h = 1405 }
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::control::types::Geometry;

/// Runtime configuration: resolved file locations.
///
/// Derived from the home directory and config overrides, not persisted
/// itself.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for all winkeep data (default: ~/.winkeep)
    pub base_dir: PathBuf,
    /// Catalog of saved window geometries
    pub catalog_path: PathBuf,
    /// Settings file ({"lang": code})
    pub settings_path: PathBuf,
    /// Directory of <code>.json translation files
    pub translations_dir: PathBuf,
}

impl Config {
    /// Apply `[paths]` overrides from the file config. Relative overrides
    /// are taken as-is, so they resolve against the working directory.
    pub fn with_overrides(mut self, paths: &PathsConfig) -> Self {
        if let Some(catalog) = &paths.catalog {
            self.catalog_path = catalog.clone();
        }
        if let Some(settings) = &paths.settings {
            self.settings_path = settings.clone();
        }
        if let Some(translations) = &paths.translations {
            self.translations_dir = translations.clone();
        }
        self
    }
}

/// Main configuration loaded from the TOML config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WinkeepConfig {
    /// Reconciliation loop settings
    #[serde(default)]
    pub watch: WatchConfig,

    /// Geometry apply settings
    #[serde(default)]
    pub apply: ApplyConfig,

    /// Optional file location overrides
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional overrides for the files winkeep reads and writes.
///
/// Anything left unset keeps its default location under the base
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathsConfig {
    // skip_serializing_if: TOML cannot represent a bare None
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<PathBuf>,
}

/// Reconciliation loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Seconds between reconciliation ticks.
    /// Default: 3.
    #[serde(default = "super::defaults::default_interval_secs")]
    pub interval_secs: u64,
}

/// Which geometry a restore applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplyMode {
    /// Always apply the configured default geometry, ignoring the values
    /// stored in the catalog entry. This mirrors the behavior the tool
    /// grew up with: saved entries act as triggers, the target geometry
    /// is global.
    #[default]
    Default,
    /// Apply the geometry stored in each catalog entry.
    Stored,
}

/// Geometry apply configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyConfig {
    /// Milliseconds to wait between clearing window state flags and
    /// issuing the geometry request.
    /// Default: 200.
    #[serde(default = "super::defaults::default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Restore mode: "default" (global target geometry) or "stored"
    /// (per-entry geometry).
    #[serde(default)]
    pub mode: ApplyMode,

    /// The global target geometry used in "default" mode.
    #[serde(default = "super::defaults::default_geometry")]
    pub default_geometry: Geometry,
}

impl ApplyConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl WatchConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}
