//! Modal player for a gallery video.
//!
//! The modal opens paused. Player state is rebuilt each time a different
//! video is selected.

use leptos::prelude::*;

use crate::components::common::Icon;
use crate::components::progress_bar::ProgressBar;
use crate::content::LOGO_WATERMARK;
use crate::state::gallery::GalleryState;
use crate::state::player::{PlayerState, SKIP_SECS};
use crate::util::time_format::format_time;

#[cfg(feature = "hydrate")]
use crate::util::media;

#[component]
pub fn VideoModal(gallery: RwSignal<GalleryState>) -> impl IntoView {
    let player = RwSignal::new(PlayerState::default());
    let video = NodeRef::<leptos::html::Video>::new();
    let container = NodeRef::<leptos::html::Div>::new();

    let selected = Memo::new(move |_| gallery.with(GalleryState::selected_video));

    Effect::new(move |_| {
        selected.track();
        player.set(PlayerState::default());
    });

    let close = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = video.get_untracked() {
                media::pause(&el);
            }
        }
        gallery.update(GalleryState::close);
    };

    let toggle_play = move |_| {
        let playing = player.try_update(PlayerState::toggle_play).unwrap_or(false);
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = video.get_untracked() {
                media::sync_playing(&el, playing);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = playing;
    };

    let toggle_mute = move |_| {
        let muted = player.try_update(PlayerState::toggle_mute).unwrap_or(false);
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = video.get_untracked() {
                el.set_muted(muted);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = muted;
    };

    let seek_to = move |target: f64| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = video.get_untracked() {
                el.set_current_time(target);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = target;
    };

    let skip = move |delta: f64| seek_to(player.with_untracked(|p| p.skip_target(delta)));

    let on_seek = Callback::new(move |fraction: f64| {
        if let Some(target) = player.with_untracked(|p| p.seek_target(fraction)) {
            seek_to(target);
        }
    });

    let toggle_fullscreen = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = container.get_untracked() {
                media::toggle_fullscreen(&el);
            }
        }
    };

    let on_time_update = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = video.get_untracked() {
                player.update(|p| p.on_time_update(el.current_time(), el.duration()));
            }
        }
    };

    let on_metadata = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = video.get_untracked() {
                player.update(|p| p.on_metadata(el.duration()));
            }
        }
    };

    let on_fullscreen_change = move |_| {
        #[cfg(feature = "hydrate")]
        player.update(|p| p.fullscreen = media::is_fullscreen());
    };

    let playing = move || player.with(|p| p.playing);
    let fullscreen = move || player.with(|p| p.fullscreen);
    let progress = Signal::derive(move || player.with(PlayerState::progress_percent));

    view! {
        {move || {
            selected
                .get()
                .map(|v| {
                    view! {
                        <div class="modal-backdrop" role="dialog" aria-modal="true" on:click=close>
                            <div class="modal" on:click=|ev| ev.stop_propagation()>
                                <button class="modal-close" aria-label="Close" on:click=close>
                                    <Icon name="x"/>
                                </button>

                                <div
                                    class=move || if fullscreen() { "player player-fullscreen" } else { "player" }
                                    node_ref=container
                                    on:fullscreenchange=on_fullscreen_change
                                >
                                    <video
                                        node_ref=video
                                        src=v.url
                                        controlslist="nodownload"
                                        on:click=toggle_play
                                        on:play=move |_| player.update(|p| p.playing = true)
                                        on:pause=move |_| player.update(|p| p.playing = false)
                                        on:timeupdate=on_time_update
                                        on:loadedmetadata=on_metadata
                                    ></video>
                                    <img class="player-watermark" src=LOGO_WATERMARK alt=""/>

                                    <div class="player-controls">
                                        <ProgressBar percent=progress on_seek=on_seek/>
                                        <div class="player-controls-row">
                                            <div class="player-controls-group">
                                                <button class="video-control" aria-label="Back 10 seconds" on:click=move |_| skip(-SKIP_SECS)>
                                                    <Icon name="skip-back"/>
                                                </button>
                                                <button
                                                    class="video-control video-control-primary"
                                                    aria-label=move || player.with(|p| p.play_label())
                                                    on:click=toggle_play
                                                >
                                                    {move || if playing() { view! { <Icon name="pause"/> } } else { view! { <Icon name="play"/> } }}
                                                </button>
                                                <button class="video-control" aria-label="Forward 10 seconds" on:click=move |_| skip(SKIP_SECS)>
                                                    <Icon name="skip-forward"/>
                                                </button>
                                                <span class="player-time">
                                                    {move || format_time(player.with(|p| p.current_time))}
                                                    " / "
                                                    {move || format_time(player.with(|p| p.duration))}
                                                </span>
                                            </div>
                                            <div class="player-controls-group">
                                                <button
                                                    class="video-control"
                                                    aria-label=move || player.with(|p| p.mute_label())
                                                    on:click=toggle_mute
                                                >
                                                    {move || {
                                                        if player.with(|p| p.muted) {
                                                            view! { <Icon name="volume-x"/> }
                                                        } else {
                                                            view! { <Icon name="volume"/> }
                                                        }
                                                    }}
                                                </button>
                                                <button class="video-control" aria-label="Fullscreen" on:click=toggle_fullscreen>
                                                    <Icon name="maximize"/>
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                </div>

                                <div class="modal-info">
                                    <span class=format!("category-badge category-{}", v.category.id())>{v.category.badge()}</span>
                                    <h3>{v.title}</h3>
                                    <p>{v.description}</p>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
