//! Fixed top navigation with theme toggle and mobile menu.
//!
//! The bar gains a solid background once the page scrolls past
//! [`SCROLL_THRESHOLD_PX`].

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::components::common::Icon;
use crate::content::sections::{NAV_ITEMS, PAGE_LINKS};
use crate::state::theme::{ThemeState, toggle_theme};

pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

fn nav_class(scrolled: bool, menu_open: bool) -> &'static str {
    match (scrolled || menu_open, menu_open) {
        (true, true) => "navbar navbar-solid navbar-open",
        (true, false) => "navbar navbar-solid",
        _ => "navbar",
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            let next = is_scrolled(y);
            if scrolled.get_untracked() != next {
                scrolled.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let close_menu = move |_| menu_open.set(false);

    view! {
        <nav class=move || nav_class(scrolled.get(), menu_open.get())>
            <div class="navbar-inner">
                <a href="/#home" class="navbar-brand">
                    <span class="brand-mark">"3D"</span>
                    <span class="brand-name">"Bharat"</span>
                </a>

                <div class="navbar-links">
                    {NAV_ITEMS
                        .iter()
                        .chain(PAGE_LINKS.iter())
                        .map(|item| view! { <a href=item.href class="navbar-link">{item.label}</a> })
                        .collect_view()}
                </div>

                <div class="navbar-actions">
                    <button
                        class="theme-toggle"
                        title=move || theme.get().toggle_label()
                        aria-label=move || theme.get().toggle_label()
                        on:click=move |_| toggle_theme(theme)
                    >
                        {move || if theme.get().dark { view! { <Icon name="sun"/> } } else { view! { <Icon name="moon"/> } }}
                    </button>
                    <a href="/#enquiry" class="btn-primary navbar-cta">"Get Started"</a>
                    <button
                        class="navbar-menu-toggle"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { view! { <Icon name="x"/> } } else { view! { <Icon name="menu"/> } }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar-mobile">
                    {NAV_ITEMS
                        .iter()
                        .chain(PAGE_LINKS.iter())
                        .map(|item| view! { <a href=item.href class="navbar-mobile-link" on:click=close_menu>{item.label}</a> })
                        .collect_view()}
                    <a href="/#enquiry" class="btn-primary" on:click=close_menu>"Get Started"</a>
                </div>
            </Show>
        </nav>
    }
}
