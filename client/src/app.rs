//! Root application component with routing and the theme context.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::{home::HomePage, measurement::MeasurementPage, videos::VideosPage};
use crate::state::theme::ThemeState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Navbar/>
        <main class="page page-not-found">
            <h1 class="page-title">"Page not found"</h1>
            <a href="/" class="btn-primary">"Back to home"</a>
        </main>
        <Footer/>
    }
}

/// Root application component.
///
/// Provides the theme context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    provide_context(theme);

    // The stored preference is only readable in the browser; apply it after
    // hydration so the server-rendered markup stays deterministic.
    Effect::new(move |_| {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        theme.set(ThemeState { dark });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/bharat3d.css"/>
        <Title text="3D Bharat | Reimagining India in 3D"/>
        <Meta
            name="description"
            content="Convert drone images into interactive point-cloud visualizations and track real-world project progress with precision."
        />

        <div class="app" data-theme=move || theme.get().attribute()>
            <Router>
                <Routes fallback=NotFound>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("videos") view=VideosPage/>
                    <Route path=StaticSegment("measurement") view=MeasurementPage/>
                </Routes>
            </Router>
        </div>
    }
}
