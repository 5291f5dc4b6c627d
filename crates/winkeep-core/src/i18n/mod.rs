pub mod errors;
pub mod settings;
pub mod translations;

// Re-export commonly used types and functions
pub use errors::I18nError;
pub use settings::Settings;
pub use translations::Translations;
