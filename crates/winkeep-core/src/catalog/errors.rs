use crate::errors::WinkeepError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to serialize catalog: {message}")]
    SerializationFailed { message: String },

    #[error("IO operation failed: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl WinkeepError for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            CatalogError::SerializationFailed { .. } => "CATALOG_SERIALIZATION_FAILED",
            CatalogError::IoError { .. } => "CATALOG_IO_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let error = CatalogError::SerializationFailed {
            message: "bad value".to_string(),
        };
        assert_eq!(error.to_string(), "Failed to serialize catalog: bad value");
        assert_eq!(error.error_code(), "CATALOG_SERIALIZATION_FAILED");
        assert!(!error.is_user_error());
    }
}
