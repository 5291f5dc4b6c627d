use serde::{Deserialize, Serialize};

use crate::control::types::Geometry;
use crate::windows::types::WindowHandle;

/// One persisted catalog entry.
///
/// The title is the match key. The geometry fields record what the window
/// looked like at save time; whether they are used at restore time depends
/// on the configured apply mode (the default mode overrides them with a
/// global target geometry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGeometry {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    /// RFC3339 save timestamp. Absent in catalogs written by older versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl SavedGeometry {
    /// Capture a live window's title and geometry as a new catalog entry.
    pub fn from_window(window: &WindowHandle) -> Self {
        Self {
            title: window.title.clone(),
            x: window.x,
            y: window.y,
            w: window.w,
            h: window.h,
            saved_at: Some(chrono::Utc::now().to_rfc3339()),
        }
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.x, self.y, self.w, self.h)
    }

    /// One-line summary for list output: `title (WxH @ x,y)`.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}x{} @ {},{})",
            self.title, self.w, self.h, self.x, self.y
        )
    }
}
