use leptos::prelude::*;

use crate::components::common::Icon;
use crate::content::measurements::MeasurementImage;

/// Full-size view of `image`. Clicking the backdrop or the close button
/// clears it.
#[component]
pub fn Lightbox(image: RwSignal<Option<MeasurementImage>>) -> impl IntoView {
    let close = move |_| image.set(None);

    view! {
        {move || {
            image
                .get()
                .map(|img| {
                    view! {
                        <div class="lightbox" role="dialog" aria-modal="true" on:click=close>
                            <div class="lightbox-body" on:click=|ev| ev.stop_propagation()>
                                <button class="lightbox-close" aria-label="Close" on:click=close>
                                    <Icon name="x"/>
                                </button>
                                <img src=img.src alt=img.title/>
                                <div class="lightbox-caption">
                                    <h3>{img.title}</h3>
                                    <p>{img.description}</p>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
