//! Auto-advancing image slideshow with arrows and thumbnails.
//!
//! The slideshow restarts from the first image whenever `images` changes.
//! Arrow and thumbnail clicks are manual selections: auto-advance pauses and
//! resumes after [`RESUME_DELAY_MS`](crate::state::slideshow::RESUME_DELAY_MS).

use leptos::prelude::*;

use crate::components::common::Icon;
use crate::content::measurements::MeasurementImage;
use crate::state::slideshow::Slideshow;

#[cfg(feature = "hydrate")]
use crate::util::timers::{resume_slideshow, run_slideshow};

#[component]
pub fn ImageSlideshow(
    #[prop(into)] images: Signal<&'static [MeasurementImage]>,
    on_open: Callback<MeasurementImage>,
) -> impl IntoView {
    let show = RwSignal::new(Slideshow::new(images.get_untracked().len()));

    Effect::new(move |_| {
        let len = images.get().len();
        if let Some(epoch) = show.try_update(|s| s.reset(len)) {
            #[cfg(feature = "hydrate")]
            run_slideshow(show, epoch);
            #[cfg(not(feature = "hydrate"))]
            let _ = epoch;
        }
    });

    let manual = move |step: fn(&mut Slideshow) -> u64| {
        if let Some(epoch) = show.try_update(step) {
            #[cfg(feature = "hydrate")]
            resume_slideshow(show, epoch);
            #[cfg(not(feature = "hydrate"))]
            let _ = epoch;
        }
    };

    let select = move |index: usize| {
        if let Some(epoch) = show.try_update(|s| s.select(index)) {
            #[cfg(feature = "hydrate")]
            resume_slideshow(show, epoch);
            #[cfg(not(feature = "hydrate"))]
            let _ = epoch;
        }
    };

    let index = move || show.with(Slideshow::index);
    let current = move || images.get().get(index()).copied();

    view! {
        <div class="slideshow">
            {move || {
                current()
                    .map(|image| {
                        view! {
                            <figure class="slide" on:click=move |_| on_open.run(image)>
                                <img src=image.src alt=image.title loading="lazy"/>
                                <figcaption class="slide-caption">
                                    <Icon name=image.icon/>
                                    <div>
                                        <h3>{image.title}</h3>
                                        <p>{image.description}</p>
                                    </div>
                                </figcaption>
                            </figure>
                        }
                    })
            }}
            <button class="slide-arrow slide-prev" aria-label="Previous image" on:click=move |_| manual(Slideshow::show_previous)>
                <Icon name="chevron-left"/>
            </button>
            <button class="slide-arrow slide-next" aria-label="Next image" on:click=move |_| manual(Slideshow::show_next)>
                <Icon name="chevron-right"/>
            </button>
            <span class="slide-counter">{move || format!("{} / {}", index() + 1, images.get().len())}</span>

            <div class="slide-thumbs">
                {move || {
                    images
                        .get()
                        .iter()
                        .enumerate()
                        .map(|(i, image)| {
                            view! {
                                <button
                                    class=move || if index() == i { "slide-thumb active" } else { "slide-thumb" }
                                    aria-label=image.title
                                    on:click=move |_| select(i)
                                >
                                    <img src=image.src alt="" loading="lazy"/>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
