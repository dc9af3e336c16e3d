//! Keyboard shortcuts of the reference page.

/// A key press with its modifier state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    /// Key value as reported by the host, e.g. `"k"` or `"Escape"`.
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// What a shortcut asks the page to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Focus the search input and select its text.
    FocusSearch,
    /// Start a PDF export.
    Export,
    /// Clear the search and blur the input.
    ClearSearch,
}

/// Maps a key press to an action.
///
/// Ctrl/Cmd+K and Ctrl/Cmd+P work anywhere and suppress the host's default
/// behaviour; Escape only acts while the search input has focus.
pub fn resolve(press: &KeyPress, search_focused: bool) -> Option<Action> {
    match press.key.as_str() {
        "k" if press.command() => Some(Action::FocusSearch),
        "p" if press.command() => Some(Action::Export),
        "Escape" if search_focused => Some(Action::ClearSearch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_shortcuts() {
        assert_eq!(
            resolve(&KeyPress::new("k").with_ctrl(), false),
            Some(Action::FocusSearch)
        );
        assert_eq!(
            resolve(&KeyPress::new("p").with_meta(), true),
            Some(Action::Export)
        );
        assert_eq!(resolve(&KeyPress::new("k"), false), None);
    }

    #[test]
    fn escape_needs_focus() {
        assert_eq!(
            resolve(&KeyPress::new("Escape"), true),
            Some(Action::ClearSearch)
        );
        assert_eq!(resolve(&KeyPress::new("Escape"), false), None);
    }
}
