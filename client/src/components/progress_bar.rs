//! Clickable playback progress bar.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::player::click_fraction;

/// Renders `percent` as a filled track. A click reports the clicked fraction
/// of the track width through `on_seek`.
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<f64>, on_seek: Callback<f64>) -> impl IntoView {
    let track = NodeRef::<leptos::html::Div>::new();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(track) = track.get_untracked() {
                let rect = track.get_bounding_client_rect();
                on_seek.run(click_fraction(f64::from(ev.client_x()) - rect.left(), rect.width()));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, on_seek);
        }
    };

    view! {
        <div class="progress-track" node_ref=track on:click=on_click>
            <div class="progress-fill" style:width=move || format!("{:.2}%", percent.get())></div>
        </div>
    }
}
