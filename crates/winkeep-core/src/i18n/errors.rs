use crate::errors::WinkeepError;

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("Failed to serialize settings: {message}")]
    SerializationFailed { message: String },

    #[error("IO operation failed: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl WinkeepError for I18nError {
    fn error_code(&self) -> &'static str {
        match self {
            I18nError::SerializationFailed { .. } => "I18N_SERIALIZATION_FAILED",
            I18nError::IoError { .. } => "I18N_IO_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i18n_error_code() {
        let error = I18nError::SerializationFailed {
            message: "bad".to_string(),
        };
        assert_eq!(error.error_code(), "I18N_SERIALIZATION_FAILED");
    }
}
