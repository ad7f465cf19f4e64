//! Rendering: paints a [`Scene`] to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only scene and camera and produces pixels. It does not
//! mutate any visual state.
//!
//! Projection and depth sorting are plain functions so they can be tested
//! natively; only the `draw_*` functions need a browser.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Camera, Point};
use crate::consts::{MAX_POINT_PX, MIN_POINT_PX};
use crate::geometry::Vec3;
use crate::scene::{Blend, Glow, LineLayer, PointLayer, Polyline, Rgb, Scene};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// A point ready to paint: screen position, size, and style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub screen: Point,
    pub depth: f64,
    pub size_px: f64,
    pub color: Rgb,
    pub opacity: f64,
    pub blend: Blend,
}

/// Draw the full scene.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    camera: &Camera,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    for glow in &scene.glows {
        draw_glow(ctx, glow, camera, viewport_w, viewport_h)?;
    }
    for polyline in &scene.polylines {
        draw_polyline(ctx, polyline, camera, viewport_w, viewport_h)?;
    }
    for layer in &scene.lines {
        draw_lines(ctx, layer, camera, viewport_w, viewport_h)?;
    }
    draw_points(ctx, &project_points(&scene.points, camera, viewport_w, viewport_h))?;

    set_blend(ctx, Blend::Normal)?;
    ctx.set_global_alpha(1.0);
    Ok(())
}

// =============================================================
// Projection helpers
// =============================================================

/// Project every point of every layer and sort far-to-near.
#[must_use]
pub fn project_points(layers: &[PointLayer], camera: &Camera, viewport_w: f64, viewport_h: f64) -> Vec<ScreenPoint> {
    let mut out = Vec::with_capacity(layers.iter().map(|l| l.positions.len()).sum());
    for layer in layers {
        for (i, &p) in layer.positions.iter().enumerate() {
            let Some(proj) = camera.project(p, viewport_w, viewport_h) else {
                continue;
            };
            out.push(ScreenPoint {
                screen: proj.screen,
                depth: proj.depth,
                size_px: (layer.size * proj.scale).clamp(MIN_POINT_PX, MAX_POINT_PX),
                color: layer.colors.at(i),
                opacity: layer.opacity,
                blend: layer.blend,
            });
        }
    }
    out.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    out
}

/// Project a polyline, splitting it wherever a vertex falls behind the camera.
#[must_use]
pub fn project_runs(points: &[Vec3], camera: &Camera, viewport_w: f64, viewport_h: f64) -> Vec<Vec<Point>> {
    let mut runs = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    for &p in points {
        if let Some(proj) = camera.project(p, viewport_w, viewport_h) {
            current.push(proj.screen);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Total on-screen length of a run, including the closing edge when `closed`.
#[must_use]
pub fn screen_length(points: &[Point], closed: bool) -> f64 {
    let dist = |a: &Point, b: &Point| (b.x - a.x).hypot(b.y - a.y);
    let open: f64 = points.windows(2).map(|w| dist(&w[0], &w[1])).sum();
    match (closed, points.first(), points.last()) {
        (true, Some(first), Some(last)) if points.len() > 2 => open + dist(last, first),
        _ => open,
    }
}

// =============================================================
// Drawing
// =============================================================

fn set_blend(ctx: &CanvasRenderingContext2d, blend: Blend) -> Result<(), JsValue> {
    ctx.set_global_composite_operation(match blend {
        Blend::Normal => "source-over",
        Blend::Additive => "lighter",
    })
}

fn trace_path(ctx: &CanvasRenderingContext2d, points: &[Point], closed: bool) {
    ctx.begin_path();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        ctx.move_to(first.x, first.y);
    }
    for p in iter {
        ctx.line_to(p.x, p.y);
    }
    if closed {
        ctx.close_path();
    }
}

fn draw_glow(
    ctx: &CanvasRenderingContext2d,
    glow: &Glow,
    camera: &Camera,
    viewport_w: f64,
    viewport_h: f64,
) -> Result<(), JsValue> {
    let Some(proj) = camera.project(glow.center, viewport_w, viewport_h) else {
        return Ok(());
    };
    let radius = glow.radius * proj.scale;
    if radius <= 0.0 || glow.opacity <= 0.0 {
        return Ok(());
    }
    let Point { x, y } = proj.screen;
    let gradient = ctx.create_radial_gradient(x, y, 0.0, x, y, radius)?;
    gradient.add_color_stop(0.0, &glow.color.to_css(glow.opacity))?;
    gradient.add_color_stop(0.6, &glow.color.to_css(glow.opacity * 0.4))?;
    gradient.add_color_stop(1.0, &glow.color.to_css(0.0))?;

    set_blend(ctx, glow.blend)?;
    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    ctx.arc(x, y, radius, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

fn draw_polyline(
    ctx: &CanvasRenderingContext2d,
    polyline: &Polyline,
    camera: &Camera,
    viewport_w: f64,
    viewport_h: f64,
) -> Result<(), JsValue> {
    let runs = project_runs(&polyline.points, camera, viewport_w, viewport_h);
    // A loop that lost a vertex behind the camera is no longer closed.
    let closed = polyline.closed && runs.len() == 1 && runs[0].len() == polyline.points.len();

    set_blend(ctx, polyline.blend)?;
    ctx.set_global_alpha(polyline.opacity.clamp(0.0, 1.0));
    ctx.set_line_width(polyline.width_px);

    for run in runs.iter().filter(|r| r.len() > 1) {
        trace_path(ctx, run, closed);
        if let (Some(fill), true) = (polyline.fill, closed) {
            ctx.set_fill_style_str(&fill.to_css(1.0));
            ctx.fill();
        }
        if let Some(dash) = polyline.dash {
            let length = screen_length(run, closed);
            let pattern = js_sys::Array::new();
            pattern.push(&(dash.on * length).into());
            pattern.push(&(dash.off * length).into());
            ctx.set_line_dash(&pattern)?;
            ctx.set_line_dash_offset(-dash.phase * length);
        }
        ctx.set_stroke_style_str(&polyline.color.to_css(1.0));
        ctx.stroke();
        if polyline.dash.is_some() {
            ctx.set_line_dash(&js_sys::Array::new())?;
            ctx.set_line_dash_offset(0.0);
        }
    }
    Ok(())
}

fn draw_lines(
    ctx: &CanvasRenderingContext2d,
    layer: &LineLayer,
    camera: &Camera,
    viewport_w: f64,
    viewport_h: f64,
) -> Result<(), JsValue> {
    if layer.segments.is_empty() {
        return Ok(());
    }
    set_blend(ctx, layer.blend)?;
    ctx.set_global_alpha(layer.opacity.clamp(0.0, 1.0));
    ctx.set_line_width(layer.width_px);
    ctx.set_stroke_style_str(&layer.color.to_css(1.0));

    // One path for the whole layer.
    ctx.begin_path();
    for &(a, b) in &layer.segments {
        let (Some(pa), Some(pb)) =
            (camera.project(a, viewport_w, viewport_h), camera.project(b, viewport_w, viewport_h))
        else {
            continue;
        };
        ctx.move_to(pa.screen.x, pa.screen.y);
        ctx.line_to(pb.screen.x, pb.screen.y);
    }
    ctx.stroke();
    Ok(())
}

fn draw_points(ctx: &CanvasRenderingContext2d, points: &[ScreenPoint]) -> Result<(), JsValue> {
    let mut style: Option<(Rgb, Blend)> = None;
    let mut alpha = f64::NAN;
    for p in points {
        if style != Some((p.color, p.blend)) {
            set_blend(ctx, p.blend)?;
            ctx.set_fill_style_str(&p.color.to_css(1.0));
            style = Some((p.color, p.blend));
        }
        if (alpha - p.opacity).abs() > f64::EPSILON || alpha.is_nan() {
            alpha = p.opacity.clamp(0.0, 1.0);
            ctx.set_global_alpha(alpha);
        }
        let half = p.size_px * 0.5;
        ctx.fill_rect(p.screen.x - half, p.screen.y - half, p.size_px, p.size_px);
    }
    Ok(())
}
