//! xdotool backend - the fallback window-control mechanism.
//!
//! Addresses windows by the decimal handle form and issues activate,
//! resize and move as three separate calls.

use crate::control::backends::{run_tool, tool_on_path};
use crate::control::errors::ControlError;
use crate::control::traits::FallbackBackend;
use crate::windows::types::WindowHandle;

pub struct XdotoolBackend;

const TOOL: &str = "xdotool";

impl FallbackBackend for XdotoolBackend {
    fn name(&self) -> &'static str {
        TOOL
    }

    fn is_available(&self) -> bool {
        tool_on_path(TOOL)
    }

    fn activate(&self, window: &WindowHandle) -> Result<(), ControlError> {
        run_tool(TOOL, &["windowactivate", &window.id_numeric])
    }

    fn resize(&self, window: &WindowHandle, w: i32, h: i32) -> Result<(), ControlError> {
        run_tool(
            TOOL,
            &[
                "windowsize",
                &window.id_numeric,
                &w.to_string(),
                &h.to_string(),
            ],
        )
    }

    fn move_to(&self, window: &WindowHandle, x: i32, y: i32) -> Result<(), ControlError> {
        run_tool(
            TOOL,
            &[
                "windowmove",
                &window.id_numeric,
                &x.to_string(),
                &y.to_string(),
            ],
        )
    }
}
