pub mod handler;
pub mod types;

// Re-export commonly used types and functions
pub use handler::Controller;
pub use types::CommandOutcome;
