//! Full-height hero with the pointer-reactive point cloud.

use leptos::prelude::*;

use crate::components::scene_host::{SceneHost, SceneKind};

/// Track the window pointer as a normalized position, coalescing moves to at
/// most one signal update per animation frame.
fn pointer_signal() -> Signal<(f64, f64)> {
    let pointer = RwSignal::new((0.0, 0.0));

    #[cfg(feature = "hydrate")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        use wasm_bindgen::{JsCast, closure::Closure};

        use crate::util::pointer::normalize_pointer;

        let latest = Rc::new(Cell::new((0.0, 0.0)));
        let pending = Rc::new(Cell::new(false));
        let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            latest.set(normalize_pointer(f64::from(ev.client_x()), f64::from(ev.client_y()), width, height));
            if pending.replace(true) {
                return;
            }
            let latest = Rc::clone(&latest);
            let pending = Rc::clone(&pending);
            let flush = Closure::once_into_js(move || {
                pending.set(false);
                pointer.try_set(latest.get());
            });
            if window.request_animation_frame(flush.unchecked_ref()).is_err() {
                pending.set(false);
            }
        });
        on_cleanup(move || handle.remove());
    }

    pointer.into()
}

#[component]
pub fn Hero() -> impl IntoView {
    let pointer = pointer_signal();

    view! {
        <section id="home" class="hero">
            <div class="hero-scene">
                <SceneHost kind=SceneKind::PointCloudSphere pointer=pointer/>
            </div>
            <div class="hero-overlay"></div>

            <div class="hero-content">
                <h1 class="hero-title">
                    <span class="text-gradient">"Reimagining"</span>
                    <br/>
                    <span>"India in 3D"</span>
                </h1>
                <p class="hero-text">
                    "Convert drone images into interactive point-cloud visualizations and "
                    "track real-world project progress with precision."
                </p>
                <div class="hero-actions">
                    <a href="#create" class="btn-primary">"Explore Point Cloud"</a>
                    <a href="#about" class="btn-outline">"See Demo"</a>
                </div>
            </div>

            <div class="scroll-indicator" aria-hidden="true">
                <span>"Scroll"</span>
                <div class="scroll-mouse">
                    <div class="scroll-dot"></div>
                </div>
            </div>
        </section>
    }
}
