use tracing::{error, info};

/// Sink for presentation-facing event messages.
///
/// Every apply attempt (manual or automatic) and every save/delete outcome
/// is pushed through this callback. Rendering is the presentation layer's
/// job; the core only produces the message strings.
pub trait EventSink {
    fn on_event(&mut self, message: &str);
}

/// Sink that forwards presentation events to the structured log.
///
/// Used by quiet watch runs, where stdout output is unwanted (e.g. under
/// a service manager).
pub struct LogSink;

impl EventSink for LogSink {
    fn on_event(&mut self, message: &str) {
        info!(event = "core.app.presentation_event", message = %message);
    }
}

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}
