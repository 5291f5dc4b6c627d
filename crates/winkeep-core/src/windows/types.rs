use serde::Serialize;

/// A live top-level window as reported by the window manager.
///
/// Handles are ephemeral: they are only valid for the enumeration that
/// produced them and must be re-queried before every apply. They are
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowHandle {
    /// Backend-native handle in hex form (e.g. "0x03a00007"), used by wmctrl.
    pub id: String,
    /// Decimal form of the handle, used by xdotool.
    pub id_numeric: String,
    /// Display title. Not guaranteed unique across windows.
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowHandle {
    /// One-line summary for list output: `title (WxH @ x,y)`.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}x{} @ {},{})",
            self.title, self.w, self.h, self.x, self.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_handle_summary() {
        let handle = WindowHandle {
            id: "0x03a00007".to_string(),
            id_numeric: "60817415".to_string(),
            title: "Notepad - file.txt".to_string(),
            x: 10,
            y: 20,
            w: 800,
            h: 600,
        };
        assert_eq!(handle.summary(), "Notepad - file.txt (800x600 @ 10,20)");
    }
}
