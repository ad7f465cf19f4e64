//! Official presentation video with auto-hiding controls.

use leptos::prelude::*;

use crate::components::common::Icon;
use crate::components::progress_bar::ProgressBar;
use crate::content::videos::OFFICIAL_VIDEO_URL;
use crate::state::player::OfficialVideoState;

#[cfg(feature = "hydrate")]
use crate::util::{media, timers::hide_controls_later};

const HIGHLIGHTS: [&str; 3] = ["Infrastructure Monitoring", "3D Visualization", "Precision Measurement"];

#[component]
pub fn OfficialVideo() -> impl IntoView {
    let state = RwSignal::new(OfficialVideoState::default());
    let video = NodeRef::<leptos::html::Video>::new();

    // Record activity and schedule the matching hide.
    let interact = move || {
        if let Some(seq) = state.try_update(OfficialVideoState::interact) {
            #[cfg(feature = "hydrate")]
            hide_controls_later(state, seq);
            #[cfg(not(feature = "hydrate"))]
            let _ = seq;
        }
    };

    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = video.get() {
                el.set_loop(true);
            }
        }
        interact();
    });

    let toggle_play = move |_| {
        let Some(seq) = state.try_update(OfficialVideoState::toggle_play) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = video.get_untracked() {
                media::sync_playing(&el, state.with_untracked(|s| s.player.playing));
            }
            hide_controls_later(state, seq);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = seq;
    };

    let toggle_mute = move |_| {
        let muted = state.try_update(|s| s.player.toggle_mute()).unwrap_or(true);
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = video.get_untracked() {
                el.set_muted(muted);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = muted;
    };

    let on_seek = Callback::new(move |fraction: f64| {
        let target = state.with_untracked(|s| s.player.seek_target(fraction));
        #[cfg(feature = "hydrate")]
        {
            if let (Some(el), Some(t)) = (video.get_untracked(), target) {
                el.set_current_time(t);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = target;
    });

    let on_time_update = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = video.get_untracked() {
                state.update(|s| s.player.on_time_update(el.current_time(), el.duration()));
            }
        }
    };

    let open_overlay = move |_| {
        state.update(OfficialVideoState::open_overlay);
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = video.get_untracked() {
                media::play(&el);
            }
        }
    };

    let playing = move || state.with(|s| s.player.playing);
    let muted = move || state.with(|s| s.player.muted);
    let progress = Signal::derive(move || state.with(|s| s.player.progress_percent()));

    view! {
        <section id="official-video" class="section section-official-video">
            <div class="container">
                <header class="section-header">
                    <p class="section-eyebrow pulse">"Official Presentation"</p>
                    <h2 class="section-title">"Discover " <span class="text-gradient">"3D Bharat"</span></h2>
                    <p class="section-intro">
                        "Experience India's most advanced infrastructure monitoring platform through our official showcase video"
                    </p>
                </header>

                <div class="video-frame" on:mouseenter=move |_| interact() on:mousemove=move |_| interact()>
                    <video
                        node_ref=video
                        src=OFFICIAL_VIDEO_URL
                        autoplay
                        playsinline
                        preload="auto"
                        prop:muted=muted
                        on:play=move |_| state.update(|s| s.player.playing = true)
                        on:pause=move |_| state.update(|s| s.player.playing = false)
                        on:timeupdate=on_time_update
                    ></video>

                    <Show when=move || !playing()>
                        <div class="video-paused-overlay">
                            <button class="video-big-play" aria-label="Play" on:click=toggle_play>
                                <Icon name="play"/>
                            </button>
                        </div>
                    </Show>

                    <Show when=move || state.with(OfficialVideoState::controls_shown)>
                        <div class="video-controls">
                            <ProgressBar percent=progress on_seek=on_seek/>
                            <div class="video-controls-row">
                                <div class="video-controls-group">
                                    <button class="video-control" aria-label="Pause" on:click=toggle_play>
                                        <Icon name="pause"/>
                                    </button>
                                    <button
                                        class="video-control"
                                        aria-label=move || state.with(|s| s.player.mute_label())
                                        on:click=toggle_mute
                                    >
                                        {move || if muted() { view! { <Icon name="volume-x"/> } } else { view! { <Icon name="volume"/> } }}
                                    </button>
                                </div>
                                <button class="video-control" aria-label="Fullscreen" on:click=open_overlay>
                                    <Icon name="maximize"/>
                                </button>
                            </div>
                        </div>
                    </Show>

                    <span class="video-brand">"3D BHARAT"</span>
                    <span class="video-badge">"Official Video"</span>
                </div>

                <ul class="video-highlights">
                    {HIGHLIGHTS.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                </ul>
            </div>

            <Show when=move || state.with(|s| s.overlay_open)>
                <div class="video-overlay" role="dialog" aria-modal="true">
                    <button
                        class="video-overlay-close"
                        aria-label="Close"
                        on:click=move |_| state.update(OfficialVideoState::close_overlay)
                    >
                        <Icon name="x"/>
                    </button>
                    <video src=OFFICIAL_VIDEO_URL autoplay playsinline controls></video>
                </div>
            </Show>
        </section>
    }
}
