//! Challenges backdrop: a restless particle cloud with broken wireframe
//! fragments and flickering connection lines.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use crate::camera::{Camera, Point};
use crate::geometry::{Euler, Polyhedron, Transform, Vec3, circle};
use crate::rng::seeded_wide;
use crate::scene::{Blend, Glow, LineLayer, PointColors, PointLayer, Polyline, Rgb, Scene, Theme};

use super::Visual;

#[cfg(test)]
#[path = "chaos_particles_test.rs"]
mod chaos_particles_test;

pub const PARTICLE_COUNT: usize = 700;
pub const FRAGMENT_COUNT: usize = 15;
pub const BREAK_LINE_COUNT: usize = 20;
pub const SPHERE_RADIUS: f64 = 8.0;

/// Particles within this distance of the pointer (in the XY plane) are pushed away.
pub const REPEL_RADIUS: f64 = 3.0;
const REPEL_STRENGTH: f64 = 0.15;
const DRIFT_AMPLITUDE: f64 = 0.3;
const POINTER_REACH: f64 = 2.0;
const SPIN_RATE: f64 = 0.03;
const RING_COUNT: usize = 3;

#[derive(Debug, Clone, Copy)]
struct Fragment {
    transform: Transform,
    shape: Polyhedron,
}

/// Particle cloud whose members drift and scatter away from the pointer.
pub struct ChaosParticles {
    origin: Vec<Vec3>,
    current: Vec<Vec3>,
    fragments: Vec<Fragment>,
    break_lines: Vec<(Vec3, Vec3)>,
    elapsed: f64,
}

impl Default for ChaosParticles {
    fn default() -> Self {
        Self::new()
    }
}

impl ChaosParticles {
    #[must_use]
    pub fn new() -> Self {
        let origin: Vec<Vec3> = (0..PARTICLE_COUNT)
            .map(|i| {
                let i = i as f64;
                let theta = seeded_wide(i * 1.1) * TAU;
                let phi = (2.0 * seeded_wide(i * 2.2) - 1.0).acos();
                let r = SPHERE_RADIUS * (0.3 + seeded_wide(i * 3.3) * 0.7);
                Vec3::new(r * phi.sin() * theta.cos(), r * phi.sin() * theta.sin(), r * phi.cos())
            })
            .collect();

        let fragments = (0..FRAGMENT_COUNT)
            .map(|i| {
                let i = i as f64;
                let theta = seeded_wide(i * 10.0) * TAU;
                let phi = (2.0 * seeded_wide(i * 20.0) - 1.0).acos();
                let r = 3.0 + seeded_wide(i * 30.0) * 5.0;
                let position = Vec3::new(r * phi.sin() * theta.cos(), r * phi.sin() * theta.sin(), r * phi.cos());
                let rotation = Euler::new(
                    seeded_wide(i * 40.0) * PI,
                    seeded_wide(i * 50.0) * PI,
                    seeded_wide(i * 60.0) * PI,
                );
                Fragment {
                    transform: Transform::rotation(rotation)
                        .with_scale(0.15 + seeded_wide(i * 70.0) * 0.25)
                        .with_translation(position),
                    shape: Polyhedron::from_index((seeded_wide(i * 140.0) * 3.0) as usize),
                }
            })
            .collect();

        let break_lines = (0..BREAK_LINE_COUNT)
            .map(|i| {
                let i = i as f64;
                let a1 = seeded_wide(i * 200.0) * TAU;
                let a2 = seeded_wide(i * 201.0) * TAU;
                let r1 = 2.0 + seeded_wide(i * 202.0) * 4.0;
                let r2 = 2.0 + seeded_wide(i * 203.0) * 4.0;
                let y1 = (seeded_wide(i * 204.0) - 0.5) * 8.0;
                let y2 = (seeded_wide(i * 205.0) - 0.5) * 8.0;
                (Vec3::new(a1.cos() * r1, y1, a1.sin() * r1), Vec3::new(a2.cos() * r2, y2, a2.sin() * r2))
            })
            .collect();

        Self { current: origin.clone(), origin, fragments, break_lines, elapsed: 0.0 }
    }

    /// Current (displaced) particle positions in group-local space.
    #[must_use]
    pub fn particles(&self) -> &[Vec3] {
        &self.current
    }

    /// Index of the first particle refreshed on a frame at `elapsed`; every
    /// third particle after it is refreshed too.
    #[must_use]
    pub fn stride_start(elapsed: f64) -> usize {
        ((elapsed * 100.0).floor().max(0.0) as usize) % 3
    }
}

impl Visual for ChaosParticles {
    fn tick(&mut self, elapsed: f64, pointer: Point) {
        self.elapsed = elapsed;
        let mouse_x = pointer.x * POINTER_REACH;
        let mouse_y = -pointer.y * POINTER_REACH;

        for i in (Self::stride_start(elapsed)..PARTICLE_COUNT).step_by(3) {
            let o = self.origin[i];
            let offset = i as f64 * 0.01;
            let mut p = Vec3::new(
                o.x + (elapsed * 0.5 + offset).sin() * DRIFT_AMPLITUDE,
                o.y + (elapsed * 0.4 + offset * 1.3).cos() * DRIFT_AMPLITUDE,
                o.z + (elapsed * 0.6 + offset * 0.7).sin() * DRIFT_AMPLITUDE,
            );

            let dx = p.x - mouse_x;
            let dy = p.y - mouse_y;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq < REPEL_RADIUS * REPEL_RADIUS {
                let force = (REPEL_RADIUS - dist_sq.sqrt()) * REPEL_STRENGTH;
                p.x += dx * force;
                p.y += dy * force;
            }
            self.current[i] = p;
        }
    }

    fn scene(&self, theme: Theme) -> Scene {
        let t = self.elapsed;
        let group = Transform::rotation(Euler::new(0.0, t * SPIN_RATE, 0.0));
        let mut scene = Scene::new();

        scene.glows.push(Glow {
            center: Vec3::ZERO,
            radius: SPHERE_RADIUS * 0.85,
            color: theme.pick(Rgb::hex(0x7f_1d1d), Rgb::hex(0x99_1b1b)),
            opacity: 0.05,
            blend: Blend::Normal,
        });

        for idx in 0..RING_COUNT {
            let k = idx as f64;
            let tilt = Transform::rotation(Euler::new(FRAC_PI_2 + k * PI / 6.0, k * FRAC_PI_4, 0.0));
            let points = circle(3.04 + k * 1.5, 48).into_iter().map(|p| group.apply_nested(&tilt, p)).collect();
            scene.polylines.push(Polyline::stroke(
                points,
                true,
                theme.pick(Rgb::hex(0xf9_7316), Rgb::hex(0xc2_410c)),
                0.08,
                1.5,
            ));
        }

        let mut fragment_edges = Vec::new();
        for frag in &self.fragments {
            for (a, b) in frag.shape.edges() {
                fragment_edges.push((group.apply_nested(&frag.transform, a), group.apply_nested(&frag.transform, b)));
            }
        }
        scene.lines.push(LineLayer {
            segments: fragment_edges,
            color: theme.pick(Rgb::hex(0xef_4444), Rgb::hex(0xdc_2626)),
            opacity: 0.12,
            width_px: 1.0,
            blend: Blend::Normal,
        });

        let warning = Transform::default().with_scale(0.5);
        scene.lines.push(LineLayer {
            segments: Polyhedron::Octahedron
                .edges()
                .into_iter()
                .map(|(a, b)| (group.apply_nested(&warning, a), group.apply_nested(&warning, b)))
                .collect(),
            color: theme.pick(Rgb::hex(0xf9_7316), Rgb::hex(0xea_580c)),
            opacity: 0.25,
            width_px: 1.0,
            blend: Blend::Normal,
        });

        scene.lines.push(LineLayer {
            segments: self.break_lines.iter().map(|&(a, b)| (group.apply(a), group.apply(b))).collect(),
            color: theme.pick(Rgb::hex(0xf9_7316), Rgb::hex(0xea_580c)),
            opacity: 0.1 + (t * 0.5).sin() * 0.05,
            width_px: 1.0,
            blend: Blend::Additive,
        });

        scene.points.push(PointLayer {
            positions: self.current.iter().map(|&p| group.apply(p)).collect(),
            colors: PointColors::Uniform(theme.pick(Rgb::hex(0xef_4444), Rgb::hex(0xb9_1c1c))),
            size: 0.05,
            opacity: 0.7,
            blend: Blend::Additive,
        });

        scene
    }

    fn camera(&self) -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 12.0), 60.0)
    }
}
