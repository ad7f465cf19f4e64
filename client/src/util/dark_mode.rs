//! Theme preference persistence.
//!
//! The stored value wins over the system color scheme. The chosen theme is
//! written to `data-theme` on `<html>` so the stylesheet can switch palettes
//! before any component renders.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort and browser-only; SSR paths no-op so server
//! rendering always produces the light theme.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "bharat3d_dark";

/// Resolve the effective preference from a stored value and the system
/// color scheme. Unknown stored values fall through to the system.
pub fn resolve_preference(stored: Option<&str>, system_dark: bool) -> bool {
    match stored {
        Some("true") => true,
        Some("false") => false,
        _ => system_dark,
    }
}

/// Encode a preference for storage.
pub fn encode_preference(dark: bool) -> &'static str {
    if dark { "true" } else { "false" }
}

/// Read the dark mode preference from localStorage or the system scheme.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        let system_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        resolve_preference(stored.as_deref(), system_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set `data-theme` on the document element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", if dark { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, apply it, and persist the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, encode_preference(next));
        }
    }
    next
}
