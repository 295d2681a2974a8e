//! Mutable UI state.
//!
//! The page carries exactly one piece of mutable state: which language is
//! currently displayed. It lives on the GUI thread and is only written by
//! the toggle handler.

use crate::i18n::Language;

/// Currently selected display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    current: Language,
}

impl Selection {
    /// Creates a selection starting at the given language.
    pub fn new(default: Language) -> Self {
        Self { current: default }
    }

    /// Returns the active language.
    pub fn language(&self) -> Language {
        self.current
    }

    /// Switches to the next language in cycle order and returns it.
    ///
    /// Total: every call produces a valid language, there is no failure mode.
    pub fn toggle(&mut self) -> Language {
        self.current = self.current.next();
        self.current
    }

    /// Returns the label for the toggle button.
    ///
    /// The button shows the language a click would switch *to*, not the one
    /// currently active.
    pub fn toggle_label(&self) -> &'static str {
        self.current.next().toggle_label()
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_english() {
        assert_eq!(Selection::default().language(), Language::English);
    }

    #[test]
    fn test_toggle_switches_language() {
        let mut selection = Selection::new(Language::English);
        assert_eq!(selection.toggle(), Language::Macedonian);
        assert_eq!(selection.language(), Language::Macedonian);
    }

    #[test]
    fn test_toggle_is_involutive() {
        for start in Language::all() {
            let mut selection = Selection::new(*start);
            selection.toggle();
            selection.toggle();
            assert_eq!(selection.language(), *start);
        }
    }

    #[test]
    fn test_toggle_is_total() {
        let mut selection = Selection::default();
        for _ in 0..100 {
            let language = selection.toggle();
            assert!(Language::all().contains(&language));
        }
    }

    #[test]
    fn test_toggle_label_shows_target_language() {
        let mut selection = Selection::new(Language::English);
        assert_eq!(selection.toggle_label(), "MK");

        selection.toggle();
        assert_eq!(selection.toggle_label(), "EN");
    }
}
