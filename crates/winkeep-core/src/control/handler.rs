//! Geometry apply sequence with primary/fallback backend strategy.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::control::backends::{WmctrlBackend, XdotoolBackend};
use crate::control::traits::{FallbackBackend, PrimaryBackend};
use crate::control::types::{ApplyOutcome, Geometry};
use crate::windows::types::WindowHandle;

/// Seam used by the reconciliation loop and the controller to request a
/// geometry change without knowing about concrete backends.
pub trait GeometryControl {
    fn apply(&self, window: &WindowHandle, geometry: Geometry) -> ApplyOutcome;
}

/// Production control path: wmctrl primary, xdotool fallback.
pub struct SystemControl {
    settle_delay: Duration,
}

impl SystemControl {
    pub fn new(settle_delay: Duration) -> Self {
        Self { settle_delay }
    }
}

impl GeometryControl for SystemControl {
    fn apply(&self, window: &WindowHandle, geometry: Geometry) -> ApplyOutcome {
        apply_geometry(window, geometry, self.settle_delay)
    }
}

/// Apply a geometry to a live window using the system backends.
pub fn apply_geometry(
    window: &WindowHandle,
    geometry: Geometry,
    settle_delay: Duration,
) -> ApplyOutcome {
    apply_with_backends(
        &WmctrlBackend,
        &XdotoolBackend,
        window,
        geometry,
        settle_delay,
    )
}

/// The apply sequence:
///
/// 1. Clear the fullscreen flag (best-effort, failure logged).
/// 2. Clear the maximized flags (best-effort, failure logged).
/// 3. Sleep briefly so the window manager processes the flag changes
///    before the geometry request lands. Without this delay some WMs
///    apply the geometry to the still-maximized frame and then discard it.
/// 4. Primary backend: activate, then set position+size in one call. Both
///    must report success.
/// 5. If the primary path fails and the fallback tool is present: issue
///    activate, resize and move as three separate calls. Per-call failures
///    are logged but the outcome is still reported as applied - the
///    fallback path has no way to verify the result.
/// 6. Neither path available: applied=false with the window title in the
///    message.
pub fn apply_with_backends<P: PrimaryBackend, F: FallbackBackend>(
    primary: &P,
    fallback: &F,
    window: &WindowHandle,
    geometry: Geometry,
    settle_delay: Duration,
) -> ApplyOutcome {
    info!(
        event = "core.control.apply_started",
        title = %window.title,
        handle = %window.id,
        target = %geometry
    );

    if let Err(e) = primary.clear_fullscreen(window) {
        debug!(
            event = "core.control.clear_fullscreen_failed",
            title = %window.title,
            error = %e
        );
    }
    if let Err(e) = primary.clear_maximized(window) {
        debug!(
            event = "core.control.clear_maximized_failed",
            title = %window.title,
            error = %e
        );
    }

    if !settle_delay.is_zero() {
        std::thread::sleep(settle_delay);
    }

    if primary.is_available() {
        let attempt = primary
            .activate(window)
            .and_then(|()| primary.set_geometry(window, geometry));

        match attempt {
            Ok(()) => {
                info!(
                    event = "core.control.apply_completed",
                    title = %window.title,
                    backend = primary.name()
                );
                return ApplyOutcome::applied(&window.title, geometry);
            }
            Err(e) => {
                warn!(
                    event = "core.control.primary_failed",
                    title = %window.title,
                    backend = primary.name(),
                    error = %e,
                    message = "Primary backend failed, trying fallback"
                );
            }
        }
    } else {
        debug!(
            event = "core.control.primary_unavailable",
            backend = primary.name()
        );
    }

    if fallback.is_available() {
        // Exit statuses are checked per call, but a nonzero status does not
        // flip the outcome: this path reports applied without verification.
        if let Err(e) = fallback.activate(window) {
            debug!(
                event = "core.control.fallback_activate_failed",
                title = %window.title,
                error = %e
            );
        }
        if let Err(e) = fallback.resize(window, geometry.w, geometry.h) {
            debug!(
                event = "core.control.fallback_resize_failed",
                title = %window.title,
                error = %e
            );
        }
        if let Err(e) = fallback.move_to(window, geometry.x, geometry.y) {
            debug!(
                event = "core.control.fallback_move_failed",
                title = %window.title,
                error = %e
            );
        }

        info!(
            event = "core.control.apply_completed",
            title = %window.title,
            backend = fallback.name()
        );
        return ApplyOutcome::applied(&window.title, geometry);
    }

    warn!(
        event = "core.control.apply_failed",
        title = %window.title,
        message = "No control backend available"
    );
    ApplyOutcome::failed(&window.title)
}
