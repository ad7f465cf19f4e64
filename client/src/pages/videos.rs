//! Video gallery page: category filter, card grid, and modal player.

use leptos::prelude::*;

use crate::components::common::Icon;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::video_modal::VideoModal;
use crate::content::LOGO_WATERMARK;
use crate::content::videos::{Video, VideoCategory};
use crate::state::gallery::{CategoryFilter, GalleryState};

#[component]
fn VideosHeader() -> impl IntoView {
    view! {
        <header class="page-header">
            <p class="section-eyebrow">"Video Gallery"</p>
            <h1 class="page-title">"Infrastructure " <span class="text-gradient">"Video Showcase"</span></h1>
            <p class="section-intro">
                "Explore detailed video demonstrations of 3D analysis showcasing Design, Material, "
                "Merger Layer, and complete infrastructure workflows."
            </p>
            <ul class="tag-list">
                {VideoCategory::ALL
                    .iter()
                    .map(|c| {
                        view! {
                            <li class="tag">
                                <Icon name=c.icon()/>
                                {c.badge()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </header>
    }
}

#[component]
fn VideoCard(video: &'static Video, gallery: RwSignal<GalleryState>) -> impl IntoView {
    let id = video.id;
    let duration = move || gallery.with(|g| g.duration_label(video));

    let on_metadata = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let media = event_target::<web_sys::HtmlMediaElement>(&ev);
            gallery.update(|g| {
                g.record_duration(id, media.duration());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <article class="video-card" on:click=move |_| {
            gallery.update(|g| {
                g.open(id);
            });
        }>
            <div class="video-card-media">
                <video src=video.url muted playsinline preload="metadata" on:loadedmetadata=on_metadata></video>
                <img class="player-watermark" src=LOGO_WATERMARK alt=""/>
                <span class="video-card-play">
                    <Icon name="play"/>
                </span>
                <span class="video-card-duration">{duration}</span>
            </div>
            <div class="video-card-body">
                <span class=format!("category-badge category-{}", video.category.id())>
                    {video.category.badge()}
                    {video.sub_category.map(|sub| format!(" · {}", sub.to_uppercase()))}
                </span>
                <h3>{video.title}</h3>
                <p>{video.description}</p>
            </div>
        </article>
    }
}

#[component]
pub fn VideosPage() -> impl IntoView {
    let gallery = RwSignal::new(GalleryState::default());
    let filter = move || gallery.with(|g| g.filter);

    view! {
        <Navbar/>
        <main class="page page-videos">
            <VideosHeader/>

            <div class="filter-tabs" role="tablist">
                {CategoryFilter::TABS
                    .iter()
                    .map(|tab| {
                        let tab = *tab;
                        view! {
                            <button
                                role="tab"
                                class=move || if filter() == tab { "filter-tab active" } else { "filter-tab" }
                                aria-selected=move || (filter() == tab).to_string()
                                on:click=move |_| gallery.update(|g| g.set_filter(tab))
                            >
                                {tab.label()}
                                <span class="filter-count">{tab.count()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                let videos = gallery.with(GalleryState::visible);
                if videos.is_empty() {
                    view! { <p class="empty-state">"No videos found in this category."</p> }.into_any()
                } else {
                    view! {
                        <div class="video-grid">
                            {videos.into_iter().map(|v| view! { <VideoCard video=v gallery=gallery/> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </main>
        <Footer/>
        <VideoModal gallery=gallery/>
    }
}
