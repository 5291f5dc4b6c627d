//! Title matching between catalog entries and live windows.

use crate::windows::types::WindowHandle;

/// Find the live window a saved title refers to.
///
/// Policy: substring containment - the saved title must appear inside the
/// live window's title. The first match in enumeration order wins; that
/// order comes from the window manager and is not guaranteed stable, so
/// two live windows sharing a substring is a known ambiguity of this
/// scheme, not something this function resolves.
pub fn find_match<'a>(saved_title: &str, windows: &'a [WindowHandle]) -> Option<&'a WindowHandle> {
    windows.iter().find(|w| w.title.contains(saved_title))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(title: &str) -> WindowHandle {
        WindowHandle {
            id: "0x1".to_string(),
            id_numeric: "1".to_string(),
            title: title.to_string(),
            x: 0,
            y: 0,
            w: 100,
            h: 100,
        }
    }

    #[test]
    fn test_saved_title_matches_longer_live_title() {
        let windows = vec![window("Notepad - file.txt")];
        assert!(find_match("Notepad", &windows).is_some());
    }

    #[test]
    fn test_live_title_shorter_than_saved_does_not_match() {
        // Containment is one-directional: "pad" is inside "Notepad", but
        // a saved "Notepad" must not match a live window titled "pad".
        let windows = vec![window("pad")];
        assert!(find_match("Notepad", &windows).is_none());
    }

    #[test]
    fn test_first_match_wins_in_enumeration_order() {
        let mut first = window("Game - main");
        first.id = "0xa".to_string();
        let mut second = window("Game - second");
        second.id = "0xb".to_string();

        let windows = vec![first, second];
        assert_eq!(find_match("Game", &windows).unwrap().id, "0xa");
    }

    #[test]
    fn test_exact_title_matches() {
        let windows = vec![window("Game")];
        assert!(find_match("Game", &windows).is_some());
    }

    #[test]
    fn test_no_windows_no_match() {
        assert!(find_match("Game", &[]).is_none());
    }
}
