//! The reconciliation loop: periodically match catalog entries against
//! live windows and auto-apply geometry at most once per title.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::catalog::persistence::load_catalog;
use crate::catalog::types::SavedGeometry;
use crate::config::types::ApplyMode;
use crate::control::handler::GeometryControl;
use crate::control::types::Geometry;
use crate::events::EventSink;
use crate::reconcile::matching::find_match;
use crate::windows::enumerate::WindowSource;

/// Periodic match-and-apply driver.
///
/// Owns the set of titles already auto-applied this process lifetime.
/// Membership only grows: a title stays in the set even if its window
/// closes and reopens, so auto-apply fires at most once per title per
/// process. Restart the process to re-arm. Failures count as attempts
/// and are not retried.
pub struct Watcher<S: WindowSource, C: GeometryControl> {
    source: S,
    control: C,
    catalog_path: PathBuf,
    mode: ApplyMode,
    default_geometry: Geometry,
    applied: HashSet<String>,
}

impl<S: WindowSource, C: GeometryControl> Watcher<S, C> {
    pub fn new(
        source: S,
        control: C,
        catalog_path: PathBuf,
        mode: ApplyMode,
        default_geometry: Geometry,
    ) -> Self {
        Self {
            source,
            control,
            catalog_path,
            mode,
            default_geometry,
            applied: HashSet::new(),
        }
    }

    /// Titles already auto-applied this process lifetime.
    pub fn applied_titles(&self) -> &HashSet<String> {
        &self.applied
    }

    fn target_geometry(&self, entry: &SavedGeometry) -> Geometry {
        match self.mode {
            ApplyMode::Default => self.default_geometry,
            ApplyMode::Stored => entry.geometry(),
        }
    }

    /// Run one reconciliation tick. Returns the number of apply attempts
    /// made during this tick.
    ///
    /// Ticks never run concurrently: the caller drives them one at a time
    /// from a single thread (see [`Watcher::run`]).
    pub fn tick(&mut self, sink: &mut dyn EventSink) -> usize {
        let entries = load_catalog(&self.catalog_path);
        if entries.is_empty() {
            return 0;
        }

        let windows = self.source.list_windows();
        let mut attempts = 0;

        for entry in &entries {
            if self.applied.contains(&entry.title) {
                continue;
            }

            let Some(window) = find_match(&entry.title, &windows) else {
                continue;
            };

            let geometry = self.target_geometry(entry);
            let outcome = self.control.apply(window, geometry);

            info!(
                event = "core.reconcile.auto_apply",
                title = %entry.title,
                matched_title = %window.title,
                target = %geometry,
                applied = outcome.applied
            );
            sink.on_event(&format!("auto-apply: {}", outcome.message));

            // One automatic attempt per title per process lifetime,
            // success or not.
            self.applied.insert(entry.title.clone());
            attempts += 1;
        }

        debug!(event = "core.reconcile.tick_completed", attempts);
        attempts
    }

    /// Drive ticks forever at a fixed interval.
    ///
    /// Blocks the calling thread between ticks, which is also what keeps
    /// reconciliation single-flight.
    pub fn run(&mut self, interval: Duration, sink: &mut dyn EventSink) {
        info!(
            event = "core.reconcile.watch_started",
            interval_secs = interval.as_secs(),
            mode = ?self.mode
        );
        loop {
            self.tick(sink);
            std::thread::sleep(interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::persistence::save_catalog;
    use crate::control::types::ApplyOutcome;
    use crate::windows::types::WindowHandle;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::tempdir;

    struct StaticSource {
        windows: Vec<WindowHandle>,
    }

    impl WindowSource for StaticSource {
        fn list_windows(&self) -> Vec<WindowHandle> {
            self.windows.clone()
        }
    }

    struct RecordingControl {
        log: Rc<RefCell<Vec<(String, Geometry)>>>,
        succeed: bool,
    }

    impl GeometryControl for RecordingControl {
        fn apply(&self, window: &WindowHandle, geometry: Geometry) -> ApplyOutcome {
            self.log.borrow_mut().push((window.title.clone(), geometry));
            if self.succeed {
                ApplyOutcome::applied(&window.title, geometry)
            } else {
                ApplyOutcome::failed(&window.title)
            }
        }
    }

    struct CollectingSink {
        messages: Vec<String>,
    }

    impl EventSink for CollectingSink {
        fn on_event(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }

    fn window(title: &str) -> WindowHandle {
        WindowHandle {
            id: "0x2".to_string(),
            id_numeric: "2".to_string(),
            title: title.to_string(),
            x: 0,
            y: 0,
            w: 640,
            h: 480,
        }
    }

    fn entry(title: &str, x: i32, y: i32, w: i32, h: i32) -> SavedGeometry {
        SavedGeometry {
            title: title.to_string(),
            x,
            y,
            w,
            h,
            saved_at: None,
        }
    }

    fn watcher_with(
        windows: Vec<WindowHandle>,
        entries: &[SavedGeometry],
        mode: ApplyMode,
        succeed: bool,
    ) -> (
        Watcher<StaticSource, RecordingControl>,
        Rc<RefCell<Vec<(String, Geometry)>>>,
        tempfile::TempDir,
    ) {
        let dir = tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.json");
        save_catalog(&catalog_path, entries).unwrap();

        let log = Rc::new(RefCell::new(Vec::new()));
        let watcher = Watcher::new(
            StaticSource { windows },
            RecordingControl {
                log: Rc::clone(&log),
                succeed,
            },
            catalog_path,
            mode,
            Geometry::new(3482, 36, 2428, 1405),
        );
        (watcher, log, dir)
    }

    #[test]
    fn test_tick_applies_default_geometry_not_stored_values() {
        let (mut watcher, log, _dir) = watcher_with(
            vec![window("My Game Window")],
            &[entry("Game", 0, 0, 800, 600)],
            ApplyMode::Default,
            true,
        );
        let mut sink = CollectingSink { messages: vec![] };

        assert_eq!(watcher.tick(&mut sink), 1);

        let calls = log.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "My Game Window");
        assert_eq!(calls[0].1, Geometry::new(3482, 36, 2428, 1405));
    }

    #[test]
    fn test_stored_mode_applies_entry_geometry() {
        let (mut watcher, log, _dir) = watcher_with(
            vec![window("My Game Window")],
            &[entry("Game", 0, 0, 800, 600)],
            ApplyMode::Stored,
            true,
        );
        let mut sink = CollectingSink { messages: vec![] };

        watcher.tick(&mut sink);
        assert_eq!(log.borrow()[0].1, Geometry::new(0, 0, 800, 600));
    }

    #[test]
    fn test_auto_apply_at_most_once_across_ticks() {
        let (mut watcher, log, _dir) = watcher_with(
            vec![window("My Game Window")],
            &[entry("Game", 0, 0, 800, 600)],
            ApplyMode::Default,
            true,
        );
        let mut sink = CollectingSink { messages: vec![] };

        assert_eq!(watcher.tick(&mut sink), 1);
        for _ in 0..5 {
            assert_eq!(watcher.tick(&mut sink), 0);
        }
        assert_eq!(log.borrow().len(), 1);
        assert!(watcher.applied_titles().contains("Game"));
    }

    #[test]
    fn test_failed_attempt_is_not_retried() {
        let (mut watcher, log, _dir) = watcher_with(
            vec![window("My Game Window")],
            &[entry("Game", 0, 0, 800, 600)],
            ApplyMode::Default,
            false,
        );
        let mut sink = CollectingSink { messages: vec![] };

        assert_eq!(watcher.tick(&mut sink), 1);
        assert_eq!(watcher.tick(&mut sink), 0);
        assert_eq!(log.borrow().len(), 1);
        assert!(watcher.applied_titles().contains("Game"));
    }

    #[test]
    fn test_empty_catalog_is_noop() {
        let (mut watcher, log, _dir) = watcher_with(
            vec![window("My Game Window")],
            &[],
            ApplyMode::Default,
            true,
        );
        let mut sink = CollectingSink { messages: vec![] };

        assert_eq!(watcher.tick(&mut sink), 0);
        assert!(log.borrow().is_empty());
        assert!(sink.messages.is_empty());
    }

    #[test]
    fn test_unmatched_entry_stays_armed() {
        let (mut watcher, log, _dir) = watcher_with(
            vec![window("Browser")],
            &[entry("Game", 0, 0, 800, 600)],
            ApplyMode::Default,
            true,
        );
        let mut sink = CollectingSink { messages: vec![] };

        // No live match: nothing happens, and the title is NOT marked applied
        assert_eq!(watcher.tick(&mut sink), 0);
        assert!(log.borrow().is_empty());
        assert!(!watcher.applied_titles().contains("Game"));
    }

    #[test]
    fn test_tick_emits_event_per_attempt() {
        let (mut watcher, _log, _dir) = watcher_with(
            vec![window("My Game Window")],
            &[entry("Game", 0, 0, 800, 600)],
            ApplyMode::Default,
            true,
        );
        let mut sink = CollectingSink { messages: vec![] };

        watcher.tick(&mut sink);
        assert_eq!(sink.messages.len(), 1);
        assert!(sink.messages[0].starts_with("auto-apply: "));
        assert!(sink.messages[0].contains("My Game Window"));
    }
}
