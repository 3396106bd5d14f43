use std::collections::BTreeSet;

use serde::Deserialize;

/// A global keydown, reduced to what the shortcuts look at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyPress {
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
}

impl KeyPress {
    #[must_use]
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+K
    FocusSearch,
    /// Escape
    CloseOverlays,
}

impl Shortcut {
    #[must_use]
    pub fn from_key(press: &KeyPress) -> Option<Self> {
        if press.ctrl && press.key == "k" {
            return Some(Shortcut::FocusSearch);
        }
        if press.key == "Escape" {
            return Some(Shortcut::CloseOverlays);
        }
        None
    }

    /// Whether the browser default for the key must be suppressed.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Shortcut::FocusSearch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutOutcome {
    /// Focus moved to the search field, if the page has one.
    SearchFocused(bool),
    Closed { modals: usize, search_cleared: bool },
}

/// Page elements the shortcuts act on: open modals and the search field.
#[derive(Debug, Clone, Default)]
pub struct Overlays {
    active_modals: BTreeSet<String>,
    search: Option<String>,
}

impl Overlays {
    /// A page that renders a search field.
    #[must_use]
    pub fn with_search() -> Self {
        Self {
            active_modals: BTreeSet::new(),
            search: Some(String::new()),
        }
    }

    pub fn open_modal(&mut self, id: impl Into<String>) {
        self.active_modals.insert(id.into());
    }

    pub fn close_modal(&mut self, id: &str) -> bool {
        self.active_modals.remove(id)
    }

    #[must_use]
    pub fn is_modal_active(&self, id: &str) -> bool {
        self.active_modals.contains(id)
    }

    #[must_use]
    pub fn has_search(&self) -> bool {
        self.search.is_some()
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        if let Some(search) = self.search.as_mut() {
            *search = query.into();
        }
    }

    pub fn apply(&mut self, shortcut: Shortcut) -> ShortcutOutcome {
        match shortcut {
            Shortcut::FocusSearch => ShortcutOutcome::SearchFocused(self.has_search()),
            Shortcut::CloseOverlays => {
                let modals = self.active_modals.len();
                self.active_modals.clear();
                let search_cleared = match self.search.as_mut() {
                    Some(search) => {
                        search.clear();
                        true
                    }
                    None => false,
                };
                ShortcutOutcome::Closed {
                    modals,
                    search_cleared,
                }
            }
        }
    }
}
