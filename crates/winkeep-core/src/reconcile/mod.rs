pub mod matching;
pub mod watcher;

// Re-export commonly used types and functions
pub use matching::find_match;
pub use watcher::Watcher;
