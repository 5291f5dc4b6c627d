pub mod enumerate;
pub mod types;

// Re-export commonly used types and functions
pub use enumerate::{list_windows, WindowSource, WmctrlSource};
pub use types::WindowHandle;
