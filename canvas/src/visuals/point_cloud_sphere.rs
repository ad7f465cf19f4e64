//! Hero visual: a noisy Fibonacci point-cloud sphere around a pulsing core.

use std::f64::consts::{PI, TAU};

use crate::camera::{Camera, Point};
use crate::consts::MAX_TICK_SECS;
use crate::geometry::{Euler, Transform, Vec3, fibonacci_angles, spherical};
use crate::rng::seeded;
use crate::scene::{Blend, Glow, LineLayer, PointColors, PointLayer, Rgb, Scene, Theme};

use super::{Visual, ease_toward};

#[cfg(test)]
#[path = "point_cloud_sphere_test.rs"]
mod point_cloud_sphere_test;

pub const PARTICLE_COUNT: usize = 2000;
pub const RADIUS: f64 = 2.5;
/// Sampled particle pairs closer than this are joined by a segment.
pub const CONNECTION_DISTANCE: f64 = 0.8;
pub const CORE_PARTICLE_COUNT: usize = 100;
pub const CORE_RADIUS: f64 = 0.3;
pub const RAY_COUNT: usize = 8;

const RADIAL_NOISE: f64 = 0.5;
const POINTER_TILT: f64 = 0.3;
const SPIN_RATE: f64 = 0.1;
const EASE_FACTOR: f64 = 0.05;
/// Seed stride for core radii; the core layout depends on this exact value.
#[allow(clippy::approx_constant)]
const CORE_SEED_STEP: f64 = 3.14;

/// Interactive sphere shown behind the hero copy.
pub struct PointCloudSphere {
    shell: Vec<Vec3>,
    shell_gray: Vec<f64>,
    links: Vec<(Vec3, Vec3)>,
    core: Vec<Vec3>,
    rays: Vec<(Vec3, Vec3)>,
    rotation: Euler,
    elapsed: f64,
}

impl Default for PointCloudSphere {
    fn default() -> Self {
        Self::new()
    }
}

impl PointCloudSphere {
    #[must_use]
    pub fn new() -> Self {
        let mut shell = Vec::with_capacity(PARTICLE_COUNT);
        let mut shell_gray = Vec::with_capacity(PARTICLE_COUNT);
        for i in 0..PARTICLE_COUNT {
            let (phi, theta) = fibonacci_angles(i, PARTICLE_COUNT);
            let r = RADIUS + (seeded(i as f64 * 1.5) - 0.5) * RADIAL_NOISE;
            shell.push(spherical(phi, theta, r));
            shell_gray.push(0.3 + seeded(i as f64 * 2.7) * 0.3);
        }

        let mut links = Vec::new();
        for i in (0..PARTICLE_COUNT).step_by(10) {
            for j in (i + 1..(i + 50).min(PARTICLE_COUNT)).step_by(5) {
                if shell[i].distance(shell[j]) < CONNECTION_DISTANCE {
                    links.push((shell[i], shell[j]));
                }
            }
        }

        let core = (0..CORE_PARTICLE_COUNT)
            .map(|i| {
                let (phi, theta) = fibonacci_angles(i, CORE_PARTICLE_COUNT);
                spherical(phi, theta, CORE_RADIUS * (0.5 + seeded(i as f64 * CORE_SEED_STEP) * 0.5))
            })
            .collect();

        let rays = (0..RAY_COUNT)
            .map(|i| {
                let phi = (-1.0 + (2.0 * i as f64) / RAY_COUNT as f64).acos();
                let theta = (i as f64 / RAY_COUNT as f64) * TAU;
                let end = 0.6 + seeded(i as f64 * 5.0) * 0.3;
                (spherical(phi, theta, 0.15), spherical(phi, theta, end))
            })
            .collect();

        Self { shell, shell_gray, links, core, rays, rotation: Euler::default(), elapsed: 0.0 }
    }

    /// Current eased group rotation.
    #[must_use]
    pub fn rotation(&self) -> Euler {
        self.rotation
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    fn group(&self) -> Transform {
        let breath = 1.0 + (self.elapsed * 0.5).sin() * 0.03;
        Transform::rotation(self.rotation).with_scale(breath)
    }
}

impl Visual for PointCloudSphere {
    fn tick(&mut self, elapsed: f64, pointer: Point) {
        let dt = (elapsed - self.elapsed).clamp(0.0, MAX_TICK_SECS);
        let target_x = pointer.y * POINTER_TILT;
        let target_y = pointer.x * POINTER_TILT + elapsed * SPIN_RATE;
        self.rotation.x = ease_toward(self.rotation.x, target_x, EASE_FACTOR, dt);
        self.rotation.y = ease_toward(self.rotation.y, target_y, EASE_FACTOR, dt);
        self.elapsed = elapsed;
    }

    fn scene(&self, theme: Theme) -> Scene {
        let t = self.elapsed;
        let group = self.group();
        let mut scene = Scene::new();

        // Shell glow, then the core glows on top.
        scene.glows.push(Glow {
            center: Vec3::ZERO,
            radius: 2.3 * group.scale,
            color: theme.pick(Rgb::hex(0x88_8888), Rgb::hex(0x33_3333)),
            opacity: theme.pick(0.15, 0.1),
            blend: Blend::Normal,
        });
        let outer_pulse = (t * 1.5).sin();
        scene.glows.push(Glow {
            center: Vec3::ZERO,
            radius: 0.5 * (1.0 + outer_pulse * 0.08) * group.scale,
            color: theme.pick(Rgb::hex(0xff_9500), Rgb::hex(0xcc_7700)),
            opacity: theme.pick(0.15 + outer_pulse * 0.08, 0.1 + outer_pulse * 0.05),
            blend: Blend::Additive,
        });
        let beat = (t * 2.0).sin();
        scene.glows.push(Glow {
            center: Vec3::ZERO,
            radius: 0.25 * (1.0 + (t * 2.0 + PI).sin() * 0.1) * group.scale,
            color: theme.pick(Rgb::hex(0xff_cc00), Rgb::hex(0xda_a520)),
            opacity: theme.pick(0.3 + beat * 0.15, 0.2 + beat * 0.1),
            blend: Blend::Additive,
        });
        scene.glows.push(Glow {
            center: Vec3::ZERO,
            radius: 0.12 * (1.0 + beat * 0.15) * group.scale,
            color: theme.pick(Rgb::hex(0xff_d700), Rgb::hex(0xda_a520)),
            opacity: 0.85 + beat * 0.15,
            blend: Blend::Normal,
        });

        scene.lines.push(LineLayer {
            segments: self.links.iter().map(|&(a, b)| (group.apply(a), group.apply(b))).collect(),
            color: theme.pick(Rgb::hex(0x66_6666), Rgb::hex(0x00_0000)),
            opacity: theme.pick(0.2, 0.3),
            width_px: 1.0,
            blend: Blend::Normal,
        });

        let ray_spin = Transform::rotation(Euler::new(0.0, -t * 0.2, t * 0.15));
        let ray_pulse = (t * 3.0).sin();
        scene.lines.push(LineLayer {
            segments: self
                .rays
                .iter()
                .map(|&(a, b)| (group.apply_nested(&ray_spin, a), group.apply_nested(&ray_spin, b)))
                .collect(),
            color: theme.pick(Rgb::hex(0xff_aa00), Rgb::hex(0xcc_8800)),
            opacity: theme.pick(0.4 + ray_pulse * 0.2, 0.3 + ray_pulse * 0.15),
            width_px: 1.5,
            blend: Blend::Additive,
        });

        let shell_colors = match theme {
            Theme::Dark => PointColors::PerPoint(self.shell_gray.iter().map(|&g| Rgb::gray(g)).collect()),
            Theme::Light => PointColors::Uniform(Rgb::new(0, 0, 0)),
        };
        scene.points.push(PointLayer {
            positions: self.shell.iter().map(|&p| group.apply(p)).collect(),
            colors: shell_colors,
            size: 0.03,
            opacity: 1.0,
            blend: Blend::Normal,
        });

        let core_spin = Transform::rotation(Euler::new(t * 0.3, t * 0.5, 0.0));
        scene.points.push(PointLayer {
            positions: self.core.iter().map(|&p| group.apply_nested(&core_spin, p)).collect(),
            colors: PointColors::Uniform(theme.pick(Rgb::hex(0xff_d700), Rgb::hex(0xda_a520))),
            size: 0.025,
            opacity: theme.pick(0.9, 0.7),
            blend: Blend::Additive,
        });

        scene
    }

    fn camera(&self) -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 6.0), 60.0)
    }
}
