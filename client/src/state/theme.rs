//! Shared light/dark theme flag.
//!
//! The app provides one `RwSignal<ThemeState>` as context. Every reader
//! (section backgrounds, canvas visuals) subscribes to that signal, so a
//! toggle re-renders all of them without a reload.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use crate::util::dark_mode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
}

impl ThemeState {
    /// Value for the `data-theme` attribute.
    pub fn attribute(self) -> &'static str {
        if self.dark { "dark" } else { "light" }
    }

    /// Label for the toggle button, naming the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        if self.dark { "Switch to light theme" } else { "Switch to dark theme" }
    }
}

/// Flip the theme, apply it to the document, and persist the preference.
pub fn toggle_theme(theme: RwSignal<ThemeState>) {
    let next = dark_mode::toggle(theme.get_untracked().dark);
    theme.set(ThemeState { dark: next });
}
