//! Floating preview card with one random showcase video.
//!
//! The pick happens in the browser after hydration, so server-rendered HTML
//! never contains the card.

use leptos::prelude::*;

use crate::components::common::Icon;
use crate::state::gallery::ShowcaseState;

#[cfg(feature = "hydrate")]
use crate::util::media;

#[component]
pub fn VideoShowcase() -> impl IntoView {
    let state = RwSignal::new(None::<ShowcaseState>);
    let video = NodeRef::<leptos::html::Video>::new();

    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::gallery::pick_showcase;

            if let Some(picked) = pick_showcase(js_sys::Math::random()) {
                state.set(Some(ShowcaseState::new(picked.id)));
            }
        }
    });

    let toggle_play = move |_| {
        let playing = state.try_update(|s| s.as_mut().map(ShowcaseState::toggle_play)).flatten();
        #[cfg(feature = "hydrate")]
        {
            if let (Some(el), Some(playing)) = (video.get_untracked(), playing) {
                media::sync_playing(&el, playing);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = playing;
    };

    let close = move |_| {
        state.update(|s| {
            if let Some(s) = s.as_mut() {
                s.close();
            }
        });
    };

    let shown = Memo::new(move |_| state.with(|s| s.filter(|s| s.visible).and_then(|s| s.video())));
    let playing = move || state.with(|s| s.is_some_and(|s| s.playing));
    let status = move || state.with(|s| s.map_or("", |s| s.status_label()));

    view! {
        {move || {
            shown
                .get()
                .map(|v| {
                    view! {
                        <aside class="showcase">
                            <div class="showcase-header">
                                <span class="showcase-title">{v.title}</span>
                                <span class=format!("category-badge category-{}", v.category.id())>
                                    {v.category.badge()}
                                </span>
                                <button class="showcase-close" aria-label="Close preview" on:click=close>
                                    <Icon name="x"/>
                                </button>
                            </div>
                            <div class="showcase-media">
                                <video
                                    node_ref=video
                                    src=v.url
                                    autoplay
                                    muted
                                    playsinline
                                    on:ended=move |_| {
                                        #[cfg(feature = "hydrate")]
                                        {
                                            if let Some(el) = video.get_untracked() {
                                                el.set_current_time(0.0);
                                                media::play(&el);
                                            }
                                        }
                                    }
                                ></video>
                            </div>
                            <div class="showcase-footer">
                                <button
                                    class="video-control"
                                    aria-label=move || if playing() { "Pause" } else { "Play" }
                                    on:click=toggle_play
                                >
                                    {move || if playing() { view! { <Icon name="pause"/> } } else { view! { <Icon name="play"/> } }}
                                </button>
                                <span class=move || if playing() { "showcase-status live" } else { "showcase-status" }>
                                    {status}
                                </span>
                                <a href="/videos" class="showcase-more">"See More"</a>
                            </div>
                        </aside>
                    }
                })
        }}
    }
}
