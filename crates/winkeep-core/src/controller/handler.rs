//! The command API the presentation layer calls.
//!
//! Thin façades over the enumerator, catalog store and geometry control.
//! Commands run synchronously on the caller's thread; nothing here
//! overlaps a reconciliation tick unless the caller makes it so.

use std::path::PathBuf;

use tracing::info;

use crate::catalog::errors::CatalogError;
use crate::catalog::handler::{append_if_absent, delete_at};
use crate::catalog::persistence::load_catalog;
use crate::catalog::types::SavedGeometry;
use crate::config::types::{ApplyMode, Config, WinkeepConfig};
use crate::control::handler::GeometryControl;
use crate::control::types::Geometry;
use crate::events::EventSink;
use crate::i18n::errors::I18nError;
use crate::i18n::settings::{load_settings, save_settings, Settings};
use crate::reconcile::matching::find_match;
use crate::windows::enumerate::WindowSource;
use crate::windows::types::WindowHandle;

use super::types::CommandOutcome;

pub struct Controller<S: WindowSource, C: GeometryControl> {
    source: S,
    control: C,
    catalog_path: PathBuf,
    settings_path: PathBuf,
    mode: ApplyMode,
    default_geometry: Geometry,
    /// Live list from the most recent refresh; save indices resolve
    /// against this snapshot, not a fresh enumeration.
    last_active: Vec<WindowHandle>,
}

impl<S: WindowSource, C: GeometryControl> Controller<S, C> {
    pub fn new(source: S, control: C, runtime: &Config, config: &WinkeepConfig) -> Self {
        Self {
            source,
            control,
            catalog_path: runtime.catalog_path.clone(),
            settings_path: runtime.settings_path.clone(),
            mode: config.apply.mode,
            default_geometry: config.apply.default_geometry,
            last_active: Vec::new(),
        }
    }

    /// Re-enumerate live windows and return the fresh list for display.
    pub fn refresh_active(&mut self) -> &[WindowHandle] {
        self.last_active = self.source.list_windows();
        &self.last_active
    }

    /// Reload the catalog for display.
    pub fn refresh_saved(&self) -> Vec<SavedGeometry> {
        load_catalog(&self.catalog_path)
    }

    /// Save the window at `index` in the last-refreshed live list.
    pub fn save_selected(
        &mut self,
        index: usize,
        sink: &mut dyn EventSink,
    ) -> Result<CommandOutcome, CatalogError> {
        let Some(window) = self.last_active.get(index) else {
            return Ok(CommandOutcome::NoSelection);
        };

        let title = window.title.clone();
        let inserted = append_if_absent(&self.catalog_path, SavedGeometry::from_window(window))?;

        let outcome = if inserted {
            CommandOutcome::Saved { title }
        } else {
            CommandOutcome::AlreadyExists { title }
        };
        sink.on_event(&outcome.to_string());
        Ok(outcome)
    }

    /// Apply the catalog entry at `index` to its live match, if any.
    ///
    /// Manual applies bypass the watcher's applied-set and may repeat.
    /// The handle is re-queried here: handles from earlier enumerations
    /// are stale the moment a window moves or closes.
    pub fn apply_selected(&mut self, index: usize, sink: &mut dyn EventSink) -> CommandOutcome {
        let entries = load_catalog(&self.catalog_path);
        let Some(entry) = entries.get(index) else {
            return CommandOutcome::NoSelection;
        };

        let windows = self.source.list_windows();
        let Some(window) = find_match(&entry.title, &windows) else {
            info!(
                event = "core.controller.apply_no_match",
                title = %entry.title
            );
            let outcome = CommandOutcome::TargetNotRunning {
                title: entry.title.clone(),
            };
            sink.on_event(&outcome.to_string());
            return outcome;
        };

        let geometry = match self.mode {
            ApplyMode::Default => self.default_geometry,
            ApplyMode::Stored => entry.geometry(),
        };
        let result = self.control.apply(window, geometry);
        sink.on_event(&result.message);

        if result.applied {
            CommandOutcome::Applied {
                message: result.message,
            }
        } else {
            CommandOutcome::ApplyFailed {
                message: result.message,
            }
        }
    }

    /// Delete the catalog entry at `index`.
    pub fn delete_selected(
        &mut self,
        index: usize,
        sink: &mut dyn EventSink,
    ) -> Result<CommandOutcome, CatalogError> {
        let outcome = match delete_at(&self.catalog_path, index)? {
            Some(removed) => CommandOutcome::Deleted {
                title: removed.title,
            },
            None => CommandOutcome::NoSelection,
        };
        sink.on_event(&outcome.to_string());
        Ok(outcome)
    }

    /// Persist a new display language.
    pub fn change_language(&self, code: &str) -> Result<CommandOutcome, I18nError> {
        save_settings(
            &self.settings_path,
            &Settings {
                lang: code.to_string(),
            },
        )?;
        info!(event = "core.controller.language_changed", code);
        Ok(CommandOutcome::LanguageChanged {
            code: code.to_string(),
        })
    }

    /// Current display language from the settings file.
    pub fn current_language(&self) -> String {
        load_settings(&self.settings_path).lang
    }
}
