use std::fmt;

use serde::{Deserialize, Serialize};

/// Screen position and size of a window, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Geometry {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Argument form for `wmctrl -e`: `gravity,x,y,w,h` with gravity 0
    /// (keep the window manager's current gravity).
    pub fn wmctrl_arg(&self) -> String {
        format!("0,{},{},{},{}", self.x, self.y, self.w, self.h)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} @ {},{}", self.w, self.h, self.x, self.y)
    }
}

/// Result of one apply attempt.
///
/// `applied` reflects what the backends reported, not verified window
/// state: the fallback path cannot distinguish failure from success.
/// `message` is ready for the presentation layer's log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub applied: bool,
    pub message: String,
}

impl ApplyOutcome {
    pub fn applied(title: &str, geometry: Geometry) -> Self {
        Self {
            applied: true,
            message: format!("{} -> {}", title, geometry),
        }
    }

    pub fn failed(title: &str) -> Self {
        Self {
            applied: false,
            message: format!("{}: geometry change failed", title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_display() {
        let geometry = Geometry::new(3482, 36, 2428, 1405);
        assert_eq!(geometry.to_string(), "2428x1405 @ 3482,36");
    }

    #[test]
    fn test_wmctrl_arg_format() {
        let geometry = Geometry::new(10, -20, 800, 600);
        assert_eq!(geometry.wmctrl_arg(), "0,10,-20,800,600");
    }

    #[test]
    fn test_outcome_messages_include_title() {
        let ok = ApplyOutcome::applied("Game", Geometry::new(0, 0, 800, 600));
        assert!(ok.applied);
        assert_eq!(ok.message, "Game -> 800x600 @ 0,0");

        let failed = ApplyOutcome::failed("Game");
        assert!(!failed.applied);
        assert!(failed.message.contains("Game"));
    }

    #[test]
    fn test_geometry_serde_round_trip() {
        let geometry = Geometry::new(1, 2, 3, 4);
        let json = serde_json::to_string(&geometry).unwrap();
        let parsed: Geometry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, geometry);
    }
}
