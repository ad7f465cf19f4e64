//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns per-frame animation and drawing. This host creates
//! one engine per `<canvas>`, drives it from a `requestAnimationFrame` loop,
//! and forwards theme, pointer, and viewport changes into it. The loop stops
//! when the component is cleaned up.

use leptos::prelude::*;

use crate::state::theme::ThemeState;

#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use canvas::camera::Point as CanvasPoint;
#[cfg(feature = "hydrate")]
use canvas::engine::Engine;
#[cfg(feature = "hydrate")]
use canvas::visuals::VisualKind;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Which decorative visual a [`SceneHost`] renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
    PointCloudSphere,
    ChaosParticles,
    DataFlow,
    Merger,
    Globe,
}

impl SceneKind {
    #[cfg(feature = "hydrate")]
    fn visual(self) -> VisualKind {
        match self {
            Self::PointCloudSphere => VisualKind::PointCloudSphere,
            Self::ChaosParticles => VisualKind::ChaosParticles,
            Self::DataFlow => VisualKind::DataFlow,
            Self::Merger => VisualKind::Merger,
            Self::Globe => VisualKind::Globe,
        }
    }

    /// Whether the visual draws country outlines.
    pub fn wants_outlines(self) -> bool {
        matches!(self, Self::Globe)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::PointCloudSphere => "scene scene-point-cloud",
            Self::ChaosParticles => "scene scene-chaos",
            Self::DataFlow => "scene scene-data-flow",
            Self::Merger => "scene scene-merger",
            Self::Globe => "scene scene-globe",
        }
    }
}

#[cfg(feature = "hydrate")]
type SharedEngine = Rc<RefCell<Option<Engine>>>;

#[cfg(feature = "hydrate")]
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[cfg(feature = "hydrate")]
fn sync_viewport(engine: &mut Engine, canvas: &web_sys::HtmlCanvasElement) {
    let rect = canvas.get_bounding_client_rect();
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    engine.set_viewport(rect.width(), rect.height(), dpr);
}

#[cfg(feature = "hydrate")]
fn request_frame(callback: &FrameCallback) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(cb) = callback.borrow().as_ref() {
        if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {err:?}");
        }
    }
}

/// Run the frame loop until `alive` clears. Time is measured from the first
/// frame so every visual starts at `elapsed = 0`.
#[cfg(feature = "hydrate")]
fn start_loop(engine: SharedEngine, alive: Arc<AtomicBool>) {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let callback_for_frame = Rc::clone(&callback);
    let started = Cell::new(None::<f64>);
    let frame = Closure::wrap(Box::new(move |ts: f64| {
        if !alive.load(Ordering::Relaxed) {
            engine.borrow_mut().take();
            callback_for_frame.borrow_mut().take();
            return;
        }
        let origin = started.get().unwrap_or(ts);
        started.set(Some(origin));
        if let Some(engine) = engine.borrow_mut().as_mut() {
            if let Err(err) = engine.frame((ts - origin) / 1000.0) {
                log::warn!("scene frame failed: {err:?}");
            }
        }
        request_frame(&callback_for_frame);
    }) as Box<dyn FnMut(f64)>);
    *callback.borrow_mut() = Some(frame);
    request_frame(&callback);
}

#[cfg(feature = "hydrate")]
fn load_outlines(engine: SharedEngine) {
    leptos::task::spawn_local(async move {
        let text = match crate::net::assets::fetch_text(crate::content::sections::COUNTRIES_GEOJSON).await {
            Ok(text) => text,
            Err(err) => {
                log::debug!("country outlines unavailable: {err}");
                return;
            }
        };
        if let Some(engine) = engine.borrow_mut().as_mut() {
            match engine.load_country_outlines(&text) {
                Ok(count) => log::debug!("loaded {count} country outlines"),
                Err(err) => log::warn!("country outlines rejected: {err}"),
            }
        }
    });
}

/// Canvas that renders one decorative visual.
///
/// `pointer` is a normalized `[-1, 1]` position (y up); visuals that ignore
/// the pointer are unaffected by it.
#[component]
pub fn SceneHost(kind: SceneKind, #[prop(optional)] pointer: Option<Signal<(f64, f64)>>) -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = Arc::clone(&alive);
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    #[cfg(feature = "hydrate")]
    {
        let engine: SharedEngine = Rc::new(RefCell::new(None));

        {
            let engine = Rc::clone(&engine);
            Effect::new(move |_| {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                if engine.borrow().is_some() {
                    return;
                }
                let mut created = Engine::new(canvas.clone(), kind.visual());
                created.set_theme(theme.get_untracked().dark);
                sync_viewport(&mut created, &canvas);
                *engine.borrow_mut() = Some(created);
                start_loop(Rc::clone(&engine), Arc::clone(&alive));
                if kind.wants_outlines() {
                    load_outlines(Rc::clone(&engine));
                }
            });
        }

        {
            let engine = Rc::clone(&engine);
            Effect::new(move |_| {
                let dark = theme.get().dark;
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.set_theme(dark);
                }
            });
        }

        if let Some(pointer) = pointer {
            let engine = Rc::clone(&engine);
            Effect::new(move |_| {
                let (x, y) = pointer.get();
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.set_pointer(CanvasPoint::new(x, y));
                }
            });
        }

        let resize = window_event_listener(leptos::ev::resize, move |_| {
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            if let Some(engine) = engine.borrow_mut().as_mut() {
                sync_viewport(engine, &canvas);
            }
        });
        on_cleanup(move || resize.remove());
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (theme, pointer, &alive);
    }

    view! { <canvas node_ref=canvas_ref class=kind.css_class() aria-hidden="true"></canvas> }
}
