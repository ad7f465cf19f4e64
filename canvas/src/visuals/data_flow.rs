//! Design-framework visual: three colored particle layers circulating around
//! a shared axis, tied together by vertical connectors.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::camera::{Camera, Point};
use crate::geometry::{Euler, Transform, Vec3, circle};
use crate::scene::{Blend, LineLayer, PointColors, PointLayer, Polyline, Rgb, Scene, Theme};

use super::Visual;

#[cfg(test)]
#[path = "data_flow_test.rs"]
mod data_flow_test;

pub const PARTICLE_COUNT: usize = 500;
pub const CONNECTOR_COUNT: usize = 20;

/// Heights of the primary frame, material and measurement layers.
pub const LAYER_HEIGHTS: [f64; 3] = [1.5, 0.0, -1.5];

const TURNS: f64 = 3.0;
const FLOW_RATE: f64 = 0.3;
const SPIN_RATE: f64 = 0.1;

fn layer_colors(theme: Theme) -> [Rgb; 3] {
    match theme {
        Theme::Dark => [Rgb::from_unit(0.2, 0.8, 0.9), Rgb::from_unit(0.6, 0.3, 0.9), Rgb::from_unit(0.3, 0.9, 0.5)],
        Theme::Light => [Rgb::from_unit(0.9, 0.3, 0.2), Rgb::from_unit(0.9, 0.5, 0.1), Rgb::from_unit(0.2, 0.6, 0.4)],
    }
}

fn ring_colors(theme: Theme) -> [Rgb; 3] {
    match theme {
        Theme::Dark => [Rgb::hex(0x22_d3ee), Rgb::hex(0xa8_55f7), Rgb::hex(0x22_c55e)],
        Theme::Light => [Rgb::hex(0xdc_2626), Rgb::hex(0xea_580c), Rgb::hex(0x16_a34a)],
    }
}

/// Base angle of particle `i` along its spiral.
fn base_angle(i: usize) -> f64 {
    (i as f64 / PARTICLE_COUNT as f64) * TAU * TURNS
}

/// Position of particle `i` at time `t`, before the group spin.
#[must_use]
pub fn particle_position(i: usize, t: f64) -> Vec3 {
    let base = base_angle(i);
    let angle = base + t * FLOW_RATE;
    let radius = 2.0 + (angle * 0.5 + t).sin() * 0.5;
    let y = LAYER_HEIGHTS[i % 3] + (base * 2.0).sin() * 0.3;
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

/// Layered flow of particles.
pub struct DataFlow {
    connectors: Vec<(Vec3, Vec3)>,
    elapsed: f64,
}

impl Default for DataFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl DataFlow {
    #[must_use]
    pub fn new() -> Self {
        let mut connectors = Vec::with_capacity(CONNECTOR_COUNT * 2);
        for i in 0..CONNECTOR_COUNT {
            let angle = (i as f64 / CONNECTOR_COUNT as f64) * TAU;
            let (x, z) = (angle.cos() * 2.0, angle.sin() * 2.0);
            connectors.push((Vec3::new(x, LAYER_HEIGHTS[0], z), Vec3::new(x, LAYER_HEIGHTS[1], z)));
            connectors.push((Vec3::new(x, LAYER_HEIGHTS[1], z), Vec3::new(x, LAYER_HEIGHTS[2], z)));
        }
        Self { connectors, elapsed: 0.0 }
    }
}

impl Visual for DataFlow {
    fn tick(&mut self, elapsed: f64, _pointer: Point) {
        self.elapsed = elapsed;
    }

    fn scene(&self, theme: Theme) -> Scene {
        let t = self.elapsed;
        let group = Transform::rotation(Euler::new(0.0, t * SPIN_RATE, 0.0));
        let mut scene = Scene::new();

        // Annulus 1.8..2.2 drawn as two outlines plus a wide faint middle stroke.
        let flat = Transform::rotation(Euler::new(FRAC_PI_2, 0.0, 0.0));
        for (&y, color) in LAYER_HEIGHTS.iter().zip(ring_colors(theme)) {
            let lift = flat.with_translation(Vec3::new(0.0, y, 0.0));
            for (radius, width) in [(1.8, 1.0), (2.0, 6.0), (2.2, 1.0)] {
                let pts = circle(radius, 64).into_iter().map(|p| group.apply_nested(&lift, p)).collect();
                let opacity = if (radius - 2.0_f64).abs() < f64::EPSILON { 0.12 } else { 0.2 };
                scene.polylines.push(Polyline::stroke(pts, true, color, opacity, width));
            }
        }

        scene.lines.push(LineLayer {
            segments: self.connectors.iter().map(|&(a, b)| (group.apply(a), group.apply(b))).collect(),
            color: theme.pick(Rgb::hex(0x4a_5568), Rgb::hex(0xa8_a29e)),
            opacity: 0.3,
            width_px: 1.0,
            blend: Blend::Normal,
        });

        let colors = layer_colors(theme);
        scene.points.push(PointLayer {
            positions: (0..PARTICLE_COUNT).map(|i| group.apply(particle_position(i, t))).collect(),
            colors: PointColors::PerPoint((0..PARTICLE_COUNT).map(|i| colors[i % 3]).collect()),
            size: 0.08,
            opacity: 0.9,
            blend: Blend::Additive,
        });

        scene
    }

    fn camera(&self) -> Camera {
        Camera::new(Vec3::new(0.0, 2.0, 6.0), 50.0)
    }
}
