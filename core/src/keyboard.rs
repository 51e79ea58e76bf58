//! The page's two keyboard shortcuts.

/// Action bound to a global key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    /// `Escape`: empty the search field and show every review again.
    ClearSearch,
    /// `Ctrl+K` / `Cmd+K`: focus and select the search field.
    FocusSearch,
}

impl Shortcut {
    /// Maps a `KeyboardEvent.key` value and its modifier state to a shortcut.
    #[must_use]
    pub fn from_key(key: &str, ctrl: bool, meta: bool) -> Option<Self> {
        match key {
            "Escape" => Some(Self::ClearSearch),
            "k" if ctrl || meta => Some(Self::FocusSearch),
            _ => None,
        }
    }

    /// Whether the browser's default handling must be suppressed.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::FocusSearch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_clears_regardless_of_modifiers() {
        assert_eq!(Shortcut::from_key("Escape", false, false), Some(Shortcut::ClearSearch));
        assert_eq!(Shortcut::from_key("Escape", true, false), Some(Shortcut::ClearSearch));
    }

    #[test]
    fn k_needs_a_modifier() {
        assert_eq!(Shortcut::from_key("k", true, false), Some(Shortcut::FocusSearch));
        assert_eq!(Shortcut::from_key("k", false, true), Some(Shortcut::FocusSearch));
        assert_eq!(Shortcut::from_key("k", false, false), None);
        assert_eq!(Shortcut::from_key("K", true, false), None);
    }

    #[test]
    fn only_focus_prevents_default() {
        assert!(Shortcut::FocusSearch.prevents_default());
        assert!(!Shortcut::ClearSearch.prevents_default());
    }
}
