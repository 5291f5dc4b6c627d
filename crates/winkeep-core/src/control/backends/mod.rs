mod wmctrl;
mod xdotool;

pub use wmctrl::WmctrlBackend;
pub use xdotool::XdotoolBackend;

use std::process::Command;

use crate::control::errors::ControlError;

/// Run an external control command and map its result to a ControlError.
///
/// Only the exit status is inspected; none of the backends parse output.
pub(crate) fn run_tool(tool: &'static str, args: &[&str]) -> Result<(), ControlError> {
    let output = Command::new(tool)
        .args(args)
        .output()
        .map_err(|source| ControlError::SpawnError { tool, source })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(ControlError::CommandFailed {
            tool,
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Check whether an external control tool is on PATH.
pub(crate) fn tool_on_path(tool: &str) -> bool {
    which::which(tool).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tool_missing_binary() {
        let result = run_tool("winkeep-no-such-tool-12345", &[]);
        assert!(matches!(result, Err(ControlError::SpawnError { .. })));
    }

    #[test]
    fn test_tool_on_path_missing_binary() {
        assert!(!tool_on_path("winkeep-no-such-tool-12345"));
    }
}
