pub mod defaults;
pub mod loading;
pub mod types;

// Re-export commonly used types and functions
pub use loading::load_config;
pub use types::{ApplyConfig, ApplyMode, Config, PathsConfig, WatchConfig, WinkeepConfig};
