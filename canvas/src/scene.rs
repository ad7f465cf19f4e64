//! Renderable primitives produced by visuals once per frame.
//!
//! DESIGN
//! ======
//! Visuals never talk to the 2D context. Each frame they emit a [`Scene`] of
//! world-space primitives with colors already resolved for the active theme;
//! [`crate::render`] projects and paints it. This keeps every visual testable
//! as plain data.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::geometry::Vec3;

/// Light or dark page theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Pick between a dark-theme and a light-theme value.
    #[must_use]
    pub fn pick<T>(self, dark: T, light: T) -> T {
        if self.is_dark() { dark } else { light }
    }
}

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn hex(value: u32) -> Self {
        Self { r: ((value >> 16) & 0xff) as u8, g: ((value >> 8) & 0xff) as u8, b: (value & 0xff) as u8 }
    }

    /// Build from unit-range channels, clamping out-of-range input.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self { r: unit_to_byte(r), g: unit_to_byte(g), b: unit_to_byte(b) }
    }

    /// Gray level in `[0, 1]`.
    #[must_use]
    pub fn gray(level: f64) -> Self {
        Self::from_unit(level, level, level)
    }

    /// Multiply every channel by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::from_unit(
            f64::from(self.r) / 255.0 * factor,
            f64::from(self.g) / 255.0 * factor,
            f64::from(self.b) / 255.0 * factor,
        )
    }

    /// Linear blend toward `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |a: u8, b: u8| f64::from(a) / 255.0 + (f64::from(b) - f64::from(a)) / 255.0 * t;
        Self::from_unit(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// CSS `rgba()` string with the given alpha.
    #[must_use]
    pub fn to_css(self, alpha: f64) -> String {
        let alpha = alpha.clamp(0.0, 1.0);
        format!("rgba({}, {}, {}, {alpha:.3})", self.r, self.g, self.b)
    }
}

fn unit_to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// How a primitive combines with what is already on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Blend {
    #[default]
    Normal,
    /// Colors add up; overlapping primitives glow.
    Additive,
}

/// Point coloring: one color for the layer or one per point.
#[derive(Debug, Clone, PartialEq)]
pub enum PointColors {
    Uniform(Rgb),
    PerPoint(Vec<Rgb>),
}

impl PointColors {
    #[must_use]
    pub fn at(&self, index: usize) -> Rgb {
        match self {
            Self::Uniform(c) => *c,
            Self::PerPoint(colors) => colors.get(index).copied().unwrap_or(Rgb::new(255, 255, 255)),
        }
    }
}

/// A cloud of square points with perspective-attenuated size.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLayer {
    pub positions: Vec<Vec3>,
    pub colors: PointColors,
    /// Point edge length in world units.
    pub size: f64,
    pub opacity: f64,
    pub blend: Blend,
}

/// Independent straight segments drawn in one color.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayer {
    pub segments: Vec<(Vec3, Vec3)>,
    pub color: Rgb,
    pub opacity: f64,
    pub width_px: f64,
    pub blend: Blend,
}

/// Dash pattern expressed as fractions of the polyline's on-screen length,
/// so the pattern keeps its proportions as the line grows or shrinks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dash {
    pub on: f64,
    pub off: f64,
    /// Animated phase in `[0, 1)`; advancing it moves dashes along the line.
    pub phase: f64,
}

/// A connected run of vertices, optionally closed into a loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Vec3>,
    pub closed: bool,
    pub color: Rgb,
    pub opacity: f64,
    pub width_px: f64,
    pub dash: Option<Dash>,
    pub blend: Blend,
    /// Fill the interior instead of only stroking the outline.
    pub fill: Option<Rgb>,
}

impl Polyline {
    /// Plain solid stroke with normal blending.
    #[must_use]
    pub fn stroke(points: Vec<Vec3>, closed: bool, color: Rgb, opacity: f64, width_px: f64) -> Self {
        Self { points, closed, color, opacity, width_px, dash: None, blend: Blend::Normal, fill: None }
    }
}

/// Soft radial glow standing in for a translucent sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub center: Vec3,
    /// Radius in world units.
    pub radius: f64,
    pub color: Rgb,
    pub opacity: f64,
    pub blend: Blend,
}

/// Everything a visual wants drawn this frame.
///
/// Paint order is glows, then polylines, then line layers, then points
/// depth-sorted back to front.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub glows: Vec<Glow>,
    pub polylines: Vec<Polyline>,
    pub lines: Vec<LineLayer>,
    pub points: Vec<PointLayer>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of points across all layers.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.iter().map(|layer| layer.positions.len()).sum()
    }

    /// Total number of line segments across all layers.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.lines.iter().map(|layer| layer.segments.len()).sum()
    }
}
