//! winkeep-core: Core library for saving and restoring window geometry
//!
//! winkeep watches the desktop for windows whose titles match a saved
//! catalog entry and moves/resizes them through external window-manager
//! tools (wmctrl with an xdotool fallback). It is used by the CLI.
//!
//! # Main Entry Points
//!
//! - [`windows`] - Enumerate live top-level windows
//! - [`catalog`] - Persist named window geometries
//! - [`control`] - Issue move/resize requests through WM backends
//! - [`reconcile`] - Periodic match-and-apply loop
//! - [`controller`] - Command API used by the presentation layer
//! - [`config`] - Configuration management

pub mod catalog;
pub mod config;
pub mod control;
pub mod controller;
pub mod errors;
pub mod events;
pub mod i18n;
pub mod logging;
pub mod reconcile;
pub mod windows;

// Re-export commonly used types at crate root for convenience
pub use catalog::types::SavedGeometry;
pub use config::{ApplyMode, Config, WinkeepConfig};
pub use control::types::{ApplyOutcome, Geometry};
pub use control::{GeometryControl, SystemControl};
pub use controller::types::CommandOutcome;
pub use controller::Controller;
pub use events::EventSink;
pub use i18n::settings::Settings;
pub use i18n::translations::Translations;
pub use reconcile::Watcher;
pub use windows::types::WindowHandle;
pub use windows::{WindowSource, WmctrlSource};

// Re-export logging initialization
pub use logging::init_logging;
