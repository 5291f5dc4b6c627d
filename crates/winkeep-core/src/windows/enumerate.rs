//! Window enumeration via `wmctrl -lG`.
//!
//! An empty result means "no information available", not "no windows open":
//! a missing or failing wmctrl yields an empty list, and callers are
//! expected to treat that as a no-op rather than an error.

use std::process::Command;

use tracing::{debug, warn};

use crate::windows::types::WindowHandle;

/// Source of live window handles.
///
/// Seam for the reconciliation loop and the controller so they can be
/// tested without a running window manager.
pub trait WindowSource {
    fn list_windows(&self) -> Vec<WindowHandle>;
}

/// Production source backed by `wmctrl -lG`.
pub struct WmctrlSource;

impl WindowSource for WmctrlSource {
    fn list_windows(&self) -> Vec<WindowHandle> {
        list_windows()
    }
}

/// Enumerate the currently open top-level windows.
///
/// Malformed lines in the wmctrl output are skipped individually; a single
/// bad row never aborts the whole enumeration.
pub fn list_windows() -> Vec<WindowHandle> {
    let output = match Command::new("wmctrl").arg("-lG").output() {
        Ok(output) => output,
        Err(e) => {
            warn!(
                event = "core.windows.wmctrl_unavailable",
                error = %e,
                message = "wmctrl not found - window list unavailable"
            );
            return Vec::new();
        }
    };

    if !output.status.success() {
        warn!(
            event = "core.windows.wmctrl_failed",
            exit_code = ?output.status.code(),
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            message = "wmctrl exited nonzero - window list unavailable"
        );
        return Vec::new();
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut handles = Vec::new();

    for line in stdout.lines() {
        match parse_listing_line(line) {
            Some(handle) => handles.push(handle),
            None => {
                if !line.trim().is_empty() {
                    debug!(
                        event = "core.windows.line_skipped",
                        line = %line,
                        message = "Malformed wmctrl listing line, skipping"
                    );
                }
            }
        }
    }

    debug!(
        event = "core.windows.enumeration_completed",
        window_count = handles.len()
    );

    handles
}

/// Parse one `wmctrl -lG` line: `id desktop x y w h host title...`.
///
/// The first seven columns are whitespace-delimited; everything after the
/// host column is the title, with its internal whitespace preserved.
pub fn parse_listing_line(line: &str) -> Option<WindowHandle> {
    let mut rest = line;
    let mut fields: [&str; 7] = [""; 7];

    for field in fields.iter_mut() {
        rest = rest.trim_start();
        let end = rest.find(char::is_whitespace)?;
        *field = &rest[..end];
        rest = &rest[end..];
    }

    let title = rest.trim();
    if title.is_empty() {
        return None;
    }

    let id = fields[0];
    let id_numeric = decimal_form(id)?;

    Some(WindowHandle {
        id: id.to_string(),
        id_numeric,
        title: title.to_string(),
        x: fields[2].parse().ok()?,
        y: fields[3].parse().ok()?,
        w: fields[4].parse().ok()?,
        h: fields[5].parse().ok()?,
    })
}

/// Convert a hex window id ("0x03a00007") to the decimal form xdotool expects.
fn decimal_form(id: &str) -> Option<String> {
    let hex = id.strip_prefix("0x").unwrap_or(id);
    u64::from_str_radix(hex, 16).ok().map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing_line() {
        let line = "0x03a00007  0 3482 36   2428 1405 myhost Notepad - file.txt";
        let handle = parse_listing_line(line).unwrap();
        assert_eq!(handle.id, "0x03a00007");
        assert_eq!(handle.id_numeric, "60817415");
        assert_eq!(handle.title, "Notepad - file.txt");
        assert_eq!(handle.x, 3482);
        assert_eq!(handle.y, 36);
        assert_eq!(handle.w, 2428);
        assert_eq!(handle.h, 1405);
    }

    #[test]
    fn test_parse_preserves_internal_title_whitespace() {
        let line = "0x1 0 0 0 1 1 host a  b";
        let handle = parse_listing_line(line).unwrap();
        assert_eq!(handle.title, "a  b");
    }

    #[test]
    fn test_parse_rejects_short_lines() {
        assert!(parse_listing_line("").is_none());
        assert!(parse_listing_line("0x1 0 0 0 1 1").is_none());
        // Seven columns but no title
        assert!(parse_listing_line("0x1 0 0 0 1 1 host").is_none());
    }

    #[test]
    fn test_parse_rejects_non_numeric_geometry() {
        let line = "0x1 0 abc 0 1 1 host Title";
        assert!(parse_listing_line(line).is_none());
    }

    #[test]
    fn test_parse_rejects_invalid_handle() {
        let line = "zzz 0 0 0 1 1 host Title";
        assert!(parse_listing_line(line).is_none());
    }

    #[test]
    fn test_parse_negative_position() {
        // Off-screen windows report negative coordinates
        let line = "0xa 1 -4 -28 1920 1080 host Game";
        let handle = parse_listing_line(line).unwrap();
        assert_eq!(handle.x, -4);
        assert_eq!(handle.y, -28);
    }

    #[test]
    fn test_decimal_form() {
        assert_eq!(decimal_form("0x03a00007").unwrap(), "60817415");
        assert_eq!(decimal_form("ff").unwrap(), "255");
        assert!(decimal_form("not-hex").is_none());
    }
}
