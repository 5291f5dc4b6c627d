pub mod errors;
pub mod handler;
pub mod persistence;
pub mod types;

// Re-export commonly used types and functions
pub use errors::CatalogError;
pub use handler::{append_if_absent, delete_at};
pub use persistence::{load_catalog, save_catalog};
pub use types::SavedGeometry;
