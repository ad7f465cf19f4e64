//! Media element and fullscreen helpers.
//!
//! `play()` returns a promise that browsers reject under autoplay policy;
//! rejections are logged at debug level and otherwise ignored.

use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlMediaElement};

pub fn play(media: &HtmlMediaElement) {
    match media.play() {
        Ok(promise) => leptos::task::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::debug!("media play rejected: {err:?}");
            }
        }),
        Err(err) => log::debug!("media play failed: {err:?}"),
    }
}

pub fn pause(media: &HtmlMediaElement) {
    if let Err(err) = media.pause() {
        log::debug!("media pause failed: {err:?}");
    }
}

/// Play or pause to match `playing`.
pub fn sync_playing(media: &HtmlMediaElement, playing: bool) {
    if playing {
        play(media);
    } else {
        pause(media);
    }
}

pub fn is_fullscreen() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .is_some_and(|d| d.fullscreen_element().is_some())
}

/// Enter fullscreen on `el`, or leave it if anything is already fullscreen.
pub fn toggle_fullscreen(el: &Element) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if doc.fullscreen_element().is_some() {
        doc.exit_fullscreen();
    } else if let Err(err) = el.request_fullscreen() {
        log::debug!("fullscreen request failed: {err:?}");
    }
}
