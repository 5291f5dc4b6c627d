pub mod backends;
pub mod errors;
pub mod handler;
pub mod traits;
pub mod types;

// Re-export commonly used types and functions
pub use errors::ControlError;
pub use handler::{apply_geometry, GeometryControl, SystemControl};
pub use traits::{FallbackBackend, PrimaryBackend};
pub use types::{ApplyOutcome, Geometry};
