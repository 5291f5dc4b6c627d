//! Backend seams for the two window-control mechanisms.
//!
//! The primary backend (wmctrl) addresses windows by their hex handle and
//! sets position and size in one atomic gravity+geometry call. The
//! fallback backend (xdotool) addresses windows by the decimal handle and
//! exposes activate, resize and move as three separate calls. The apply
//! algorithm in [`crate::control::handler`] is written against these
//! traits so the fallback ordering is testable without either tool.

use crate::control::errors::ControlError;
use crate::control::types::Geometry;
use crate::windows::types::WindowHandle;

/// Surface of the primary control backend.
pub trait PrimaryBackend {
    fn name(&self) -> &'static str;

    fn is_available(&self) -> bool;

    /// Remove the fullscreen state flag. Best-effort in the apply sequence.
    fn clear_fullscreen(&self, window: &WindowHandle) -> Result<(), ControlError>;

    /// Remove both maximized state flags. Best-effort in the apply sequence.
    fn clear_maximized(&self, window: &WindowHandle) -> Result<(), ControlError>;

    fn activate(&self, window: &WindowHandle) -> Result<(), ControlError>;

    /// Set position and size in a single call.
    fn set_geometry(&self, window: &WindowHandle, geometry: Geometry) -> Result<(), ControlError>;
}

/// Surface of the fallback control backend.
pub trait FallbackBackend {
    fn name(&self) -> &'static str;

    fn is_available(&self) -> bool;

    fn activate(&self, window: &WindowHandle) -> Result<(), ControlError>;

    fn resize(&self, window: &WindowHandle, w: i32, h: i32) -> Result<(), ControlError>;

    fn move_to(&self, window: &WindowHandle, x: i32, y: i32) -> Result<(), ControlError>;
}
