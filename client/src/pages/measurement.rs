//! Measurement analytics page: category tabs, railway sub-tabs, slideshow,
//! and lightbox.

use leptos::prelude::*;

use crate::components::common::Icon;
use crate::components::footer::Footer;
use crate::components::lightbox::Lightbox;
use crate::components::navbar::Navbar;
use crate::components::slideshow::ImageSlideshow;
use crate::content::measurements::{MeasurementCategory, MeasurementImage, RailwayTab};

const TECH_TAGS: [&str; 3] = ["LiDAR", "Point Cloud", "3D Scanning"];

#[component]
fn MeasurementHeader() -> impl IntoView {
    view! {
        <header class="page-header">
            <p class="section-eyebrow">"Precision Engineering"</p>
            <span class="accuracy-badge">"±0.001mm Accuracy"</span>
            <h1 class="page-title">"Measurement " <span class="text-gradient">"Analytics Hub"</span></h1>
            <p class="section-intro">
                "Advanced 3D measurement capabilities delivering sub-millimeter precision for Railway, "
                "Bridge, and Road infrastructure analysis."
            </p>
            <ul class="tag-list">
                {TECH_TAGS.iter().map(|t| view! { <li class="tag">{*t}</li> }).collect_view()}
            </ul>
            <p class="page-updated">"Updated: Jan 2026"</p>
        </header>
    }
}

#[component]
pub fn MeasurementPage() -> impl IntoView {
    let category = RwSignal::new(MeasurementCategory::default());
    let railway_tab = RwSignal::new(RailwayTab::Ohe);
    let lightbox = RwSignal::new(None::<MeasurementImage>);

    let images = Memo::new(move |_| category.get().images(railway_tab.get()));
    let on_open = Callback::new(move |image: MeasurementImage| lightbox.set(Some(image)));

    view! {
        <Navbar/>
        <main class="page page-measurement">
            <MeasurementHeader/>

            <div class="filter-tabs" role="tablist">
                {MeasurementCategory::ALL
                    .iter()
                    .map(|c| {
                        let c = *c;
                        view! {
                            <button
                                role="tab"
                                class=move || if category.get() == c { "filter-tab active" } else { "filter-tab" }
                                on:click=move |_| category.set(c)
                            >
                                <Icon name=c.icon()/>
                                {c.label()}
                                <span class="filter-count">{c.count()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || category.get() == MeasurementCategory::Railway>
                <div class="sub-tabs" role="tablist">
                    {RailwayTab::ALL
                        .iter()
                        .map(|t| {
                            let t = *t;
                            view! {
                                <button
                                    role="tab"
                                    class=move || if railway_tab.get() == t { "sub-tab active" } else { "sub-tab" }
                                    on:click=move |_| railway_tab.set(t)
                                >
                                    {t.label()}
                                    <span class="filter-count">{t.images().len()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>

            <ImageSlideshow images=images on_open=on_open/>
        </main>
        <Footer/>
        <Lightbox image=lightbox/>
    }
}
