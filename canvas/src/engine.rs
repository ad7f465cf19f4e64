use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::consts::POINTER_LIMIT;
use crate::render;
use crate::scene::{Scene, Theme};
use crate::visuals::globe::{GeoJsonError, parse_countries};
use crate::visuals::{Visual, VisualKind};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

fn limit_pointer_axis(v: f64) -> f64 {
    if v.is_finite() { v.clamp(-POINTER_LIMIT, POINTER_LIMIT) } else { 0.0 }
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub kind: VisualKind,
    visual: Box<dyn Visual>,
    pub theme: Theme,
    pub pointer: Point,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    pub elapsed: f64,
}

impl EngineCore {
    #[must_use]
    pub fn new(kind: VisualKind) -> Self {
        Self {
            kind,
            visual: kind.build(),
            theme: Theme::default(),
            pointer: Point::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            elapsed: 0.0,
        }
    }

    // --- Inputs ---

    /// Switch palettes. Takes effect on the next scene.
    pub fn set_theme(&mut self, dark: bool) {
        self.theme = Theme::from_dark(dark);
    }

    /// Update the normalized pointer, clamped to the unit square.
    /// Non-finite components read as centered.
    pub fn set_pointer(&mut self, pointer: Point) {
        self.pointer = Point::new(limit_pointer_axis(pointer.x), limit_pointer_axis(pointer.y));
    }

    /// Record viewport size in CSS pixels and the device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    }

    /// Advance the visual to `elapsed` seconds. Time never runs backwards.
    pub fn advance(&mut self, elapsed: f64) {
        if elapsed.is_finite() && elapsed >= self.elapsed {
            self.elapsed = elapsed;
        }
        self.visual.tick(self.elapsed, self.pointer);
    }

    /// Parse a GeoJSON country collection and hand it to the visual.
    ///
    /// # Errors
    ///
    /// Returns the parse error; the visual keeps whatever it had before.
    pub fn load_country_outlines(&mut self, geojson: &str) -> Result<usize, GeoJsonError> {
        let outlines = parse_countries(geojson)?;
        let count = outlines.len();
        self.visual.set_outlines(outlines);
        Ok(count)
    }

    // --- Queries ---

    #[must_use]
    pub fn scene(&self) -> Scene {
        self.visual.scene(self.theme)
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.visual.camera()
    }

    /// Backing-store size in device pixels for the current viewport.
    #[must_use]
    pub fn backing_size(&self) -> (u32, u32) {
        let to_px = |css: f64| (css * self.dpr).round().clamp(1.0, f64::from(u32::MAX)) as u32;
        (to_px(self.viewport_width), to_px(self.viewport_height))
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, kind: VisualKind) -> Self {
        Self { canvas, core: EngineCore::new(kind) }
    }

    // --- Delegated inputs ---

    pub fn set_theme(&mut self, dark: bool) {
        self.core.set_theme(dark);
    }

    pub fn set_pointer(&mut self, pointer: Point) {
        self.core.set_pointer(pointer);
    }

    /// Update viewport dimensions and resize the canvas backing store to match.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        let (w, h) = self.core.backing_size();
        if self.canvas.width() != w {
            self.canvas.set_width(w);
        }
        if self.canvas.height() != h {
            self.canvas.set_height(h);
        }
    }

    /// Parse and install country outlines.
    ///
    /// # Errors
    ///
    /// See [`EngineCore::load_country_outlines`].
    pub fn load_country_outlines(&mut self, geojson: &str) -> Result<usize, GeoJsonError> {
        self.core.load_country_outlines(geojson)
    }

    // --- Render ---

    /// Advance to `elapsed` seconds and draw the frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn frame(&mut self, elapsed: f64) -> Result<(), JsValue> {
        self.core.advance(elapsed);
        self.render()
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        render::draw(
            &ctx,
            &self.core.scene(),
            &self.core.camera(),
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }
}
