use crate::errors::WinkeepError;

#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("Control tool '{tool}' not found on PATH")]
    ToolUnavailable { tool: &'static str },

    #[error("'{tool}' command failed: {message}")]
    CommandFailed { tool: &'static str, message: String },

    #[error("Failed to spawn '{tool}': {source}")]
    SpawnError {
        tool: &'static str,
        source: std::io::Error,
    },
}

impl WinkeepError for ControlError {
    fn error_code(&self) -> &'static str {
        match self {
            ControlError::ToolUnavailable { .. } => "CONTROL_TOOL_UNAVAILABLE",
            ControlError::CommandFailed { .. } => "CONTROL_COMMAND_FAILED",
            ControlError::SpawnError { .. } => "CONTROL_SPAWN_ERROR",
        }
    }
}
