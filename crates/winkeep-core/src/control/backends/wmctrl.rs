//! wmctrl backend - the primary window-control mechanism.
//!
//! All operations address the window by its hex handle (`-i -r <id>` /
//! `-i -a <id>`). Geometry is set in one call via `-e gravity,x,y,w,h`.

use crate::control::backends::{run_tool, tool_on_path};
use crate::control::errors::ControlError;
use crate::control::traits::PrimaryBackend;
use crate::control::types::Geometry;
use crate::windows::types::WindowHandle;

pub struct WmctrlBackend;

const TOOL: &str = "wmctrl";

impl PrimaryBackend for WmctrlBackend {
    fn name(&self) -> &'static str {
        TOOL
    }

    fn is_available(&self) -> bool {
        tool_on_path(TOOL)
    }

    fn clear_fullscreen(&self, window: &WindowHandle) -> Result<(), ControlError> {
        run_tool(TOOL, &["-i", "-r", &window.id, "-b", "remove,fullscreen"])
    }

    fn clear_maximized(&self, window: &WindowHandle) -> Result<(), ControlError> {
        run_tool(
            TOOL,
            &[
                "-i",
                "-r",
                &window.id,
                "-b",
                "remove,maximized_vert,maximized_horz",
            ],
        )
    }

    fn activate(&self, window: &WindowHandle) -> Result<(), ControlError> {
        run_tool(TOOL, &["-i", "-a", &window.id])
    }

    fn set_geometry(&self, window: &WindowHandle, geometry: Geometry) -> Result<(), ControlError> {
        run_tool(TOOL, &["-i", "-r", &window.id, "-e", &geometry.wmctrl_arg()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_name() {
        assert_eq!(WmctrlBackend.name(), "wmctrl");
    }

    #[test]
    fn test_geometry_arg_is_single_atomic_string() {
        // The whole move+resize goes through one -e argument
        let geometry = Geometry::new(3482, 36, 2428, 1405);
        assert_eq!(geometry.wmctrl_arg(), "0,3482,36,2428,1405");
    }
}
