//! Leptos application for the 3D Bharat marketing site.
//!
//! The same crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Browser-only concerns (canvas visuals, timers, media
//! elements, `localStorage`, outbound HTTP) are gated behind `hydrate` and
//! degrade to no-ops during server rendering.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | HTML shell, router and theme context |
//! | [`pages`] | Home, video gallery and measurement pages |
//! | [`components`] | Page sections and reusable widgets |
//! | [`content`] | Static copy and media catalogs |
//! | [`state`] | Plain state types driven by signals |
//! | [`net`] | Enquiry email request and transport |
//! | [`util`] | Browser helpers (theme persistence, media, timers) |

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
