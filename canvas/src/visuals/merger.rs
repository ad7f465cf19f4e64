//! Merger-layer visual: three point-cloud roads converge on a merger node
//! and leave as one wider road, with data particles flowing along them.

use std::f64::consts::{PI, TAU};

use crate::camera::{Camera, Point};
use crate::geometry::{Transform, Vec3, bezier_samples, quadratic_bezier};
use crate::rng::seeded;
use crate::scene::{Blend, Glow, PointColors, PointLayer, Rgb, Scene, Theme};

use super::Visual;

#[cfg(test)]
#[path = "merger_test.rs"]
mod merger_test;

pub const MERGER_POSITION: Vec3 = Vec3::ZERO;
pub const OUTPUT_END: Vec3 = Vec3::new(2.0, -0.3, 0.0);
pub const INPUT_STARTS: [Vec3; 3] =
    [Vec3::new(-2.2, 0.8, -1.2), Vec3::new(-2.2, 0.0, 0.0), Vec3::new(-2.2, -0.8, 1.2)];

pub const RUNNERS_PER_ROAD: usize = 30;
pub const OUTPUT_RUNNERS: usize = 25;
pub const MERGER_NODE_POINTS: usize = 500;
pub const MERGER_NODE_RADIUS: f64 = 0.35;

const INPUT_LIFT: f64 = 0.2;
const OUTPUT_LIFT: f64 = -0.15;
const RUNNER_HOVER: f64 = 0.02;
const GROUP_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Shape of a point-cloud road ribbon.
#[derive(Debug, Clone, Copy)]
struct RibbonSpec {
    width: f64,
    across: usize,
    divisions: usize,
    jitter: f64,
    jitter_seeds: (f64, f64, f64),
    base_brightness: f64,
}

const INPUT_RIBBON: RibbonSpec = RibbonSpec {
    width: 0.15,
    across: 5,
    divisions: 200,
    jitter: 0.01,
    jitter_seeds: (1.1, 2.2, 3.3),
    base_brightness: 0.7,
};

const OUTPUT_RIBBON: RibbonSpec = RibbonSpec {
    width: 0.22,
    across: 8,
    divisions: 150,
    jitter: 0.008,
    jitter_seeds: (1.5, 2.5, 3.5),
    base_brightness: 0.8,
};

/// Control point for a road from `start` to `end`, raised or lowered by `lift`.
#[must_use]
pub fn road_control(start: Vec3, end: Vec3, lift: f64) -> Vec3 {
    start.lerp(end, 0.5) + Vec3::new(0.0, lift, 0.0)
}

/// Points plus per-point brightness multipliers.
#[derive(Debug, Clone, Default)]
struct Cloud {
    points: Vec<Vec3>,
    brightness: Vec<f64>,
}

impl Cloud {
    fn colors(&self, color: Rgb) -> PointColors {
        PointColors::PerPoint(self.brightness.iter().map(|&b| color.scaled(b)).collect())
    }
}

fn ribbon(start: Vec3, end: Vec3, lift: f64, spec: RibbonSpec) -> Cloud {
    let centerline = bezier_samples(start, road_control(start, end, lift), end, spec.divisions);
    let mut cloud = Cloud::default();
    let last = centerline.len().saturating_sub(1);
    let span = (spec.across.max(2) - 1) as f64;
    for (i, &p) in centerline.iter().enumerate() {
        let tangent = if i < last { centerline[i + 1] - p } else { p - centerline[i.saturating_sub(1)] };
        let right = tangent.normalize().cross(Vec3::UP).normalize();
        for j in 0..spec.across {
            let idx = (i * spec.across + j) as f64;
            let lateral = j as f64 / span - 0.5;
            let jitter = Vec3::new(
                seeded(idx * spec.jitter_seeds.0) - 0.5,
                seeded(idx * spec.jitter_seeds.1) - 0.5,
                seeded(idx * spec.jitter_seeds.2) - 0.5,
            ) * spec.jitter;
            cloud.points.push(p + right * (lateral * spec.width) + jitter);
            let edge = lateral.abs() * 2.0;
            cloud.brightness.push(spec.base_brightness + edge * (1.0 - spec.base_brightness));
        }
    }
    cloud
}

/// Small spherical cluster marking a road end.
fn node_cluster(count: usize, seeds: [f64; 4], radius: (f64, f64), brightness: (f64, f64)) -> Cloud {
    let mut cloud = Cloud::default();
    for i in 0..count {
        let i = i as f64;
        let phi = seeded(i * seeds[0]) * TAU;
        let theta = seeded(i * seeds[1]) * PI;
        let r = radius.0 + seeded(i * seeds[2]) * radius.1;
        cloud.points.push(Vec3::new(theta.sin() * phi.cos() * r, theta.sin() * phi.sin() * r, theta.cos() * r));
        cloud.brightness.push(brightness.0 + seeded(i * seeds[3]) * brightness.1);
    }
    cloud
}

/// A particle travelling along a road and wrapping at its end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Runner {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
    pub speed: f64,
    pub offset: f64,
}

impl Runner {
    /// Curve parameter in `[0, 1)` at time `t`.
    #[must_use]
    pub fn progress(&self, t: f64) -> f64 {
        (t * self.speed + self.offset).rem_euclid(1.0)
    }

    #[must_use]
    pub fn position(&self, t: f64) -> Vec3 {
        quadratic_bezier(self.start, self.control, self.end, self.progress(t)) + Vec3::new(0.0, RUNNER_HOVER, 0.0)
    }
}

struct Palette {
    roads: [Rgb; 3],
    runners: [Rgb; 3],
    output: Rgb,
    accent: Rgb,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            roads: [Rgb::hex(0x22_d3ee), Rgb::hex(0xa8_55f7), Rgb::hex(0x22_c55e)],
            runners: [
                Rgb::from_unit(0.13, 0.83, 0.93),
                Rgb::from_unit(0.66, 0.33, 0.97),
                Rgb::from_unit(0.13, 0.77, 0.37),
            ],
            output: Rgb::hex(0x63_66f1),
            accent: Rgb::hex(0x8b_5cf6),
        },
        Theme::Light => Palette {
            roads: [Rgb::hex(0xdc_2626), Rgb::hex(0xea_580c), Rgb::hex(0x16_a34a)],
            runners: [
                Rgb::from_unit(0.86, 0.15, 0.15),
                Rgb::from_unit(0.92, 0.35, 0.05),
                Rgb::from_unit(0.09, 0.64, 0.29),
            ],
            output: Rgb::hex(0xdc_2626),
            accent: Rgb::hex(0xea_580c),
        },
    }
}

/// Roads merging into one. The group does not rotate.
pub struct MergerVisualization {
    inputs: Vec<Cloud>,
    output: Cloud,
    merger: Cloud,
    start_node: Cloud,
    end_node: Cloud,
    input_runners: Vec<(usize, Runner)>,
    output_runners: Vec<Runner>,
    elapsed: f64,
}

impl Default for MergerVisualization {
    fn default() -> Self {
        Self::new()
    }
}

impl MergerVisualization {
    #[must_use]
    pub fn new() -> Self {
        let inputs = INPUT_STARTS.iter().map(|&s| ribbon(s, MERGER_POSITION, INPUT_LIFT, INPUT_RIBBON)).collect();
        let output = ribbon(MERGER_POSITION, OUTPUT_END, OUTPUT_LIFT, OUTPUT_RIBBON);

        let mut merger = Cloud::default();
        for i in 0..MERGER_NODE_POINTS {
            let i = i as f64;
            let angle = seeded(i * 1.1) * TAU;
            let radius = seeded(i * 2.2) * MERGER_NODE_RADIUS;
            merger.points.push(Vec3::new(angle.cos() * radius, (seeded(i * 3.3) - 0.5) * 0.1, angle.sin() * radius));
            // Brightness slot carries the core-to-accent blend factor here.
            merger.brightness.push(radius / MERGER_NODE_RADIUS);
        }

        let mut input_runners = Vec::with_capacity(INPUT_STARTS.len() * RUNNERS_PER_ROAD);
        for (road, &start) in INPUT_STARTS.iter().enumerate() {
            for i in 0..RUNNERS_PER_ROAD {
                let idx = (road * RUNNERS_PER_ROAD + i) as f64;
                input_runners.push((
                    road,
                    Runner {
                        start,
                        control: road_control(start, MERGER_POSITION, INPUT_LIFT),
                        end: MERGER_POSITION,
                        speed: 0.12 + seeded(idx * 2.1) * 0.08,
                        offset: seeded(idx * 3.2),
                    },
                ));
            }
        }

        let output_runners = (0..OUTPUT_RUNNERS)
            .map(|i| Runner {
                start: MERGER_POSITION,
                control: road_control(MERGER_POSITION, OUTPUT_END, OUTPUT_LIFT),
                end: OUTPUT_END,
                speed: 0.1 + seeded(i as f64 * 2.3) * 0.06,
                offset: seeded(i as f64 * 3.4),
            })
            .collect();

        Self {
            inputs,
            output,
            merger,
            start_node: node_cluster(100, [1.1, 2.2, 3.3, 4.4], (0.08, 0.04), (0.7, 0.3)),
            end_node: node_cluster(120, [1.2, 2.3, 3.4, 4.5], (0.1, 0.05), (0.8, 0.2)),
            input_runners,
            output_runners,
            elapsed: 0.0,
        }
    }

    #[must_use]
    pub fn input_runners(&self) -> impl Iterator<Item = &Runner> {
        self.input_runners.iter().map(|(_, r)| r)
    }

    #[must_use]
    pub fn output_runners(&self) -> &[Runner] {
        &self.output_runners
    }
}

impl Visual for MergerVisualization {
    fn tick(&mut self, elapsed: f64, _pointer: Point) {
        self.elapsed = elapsed;
    }

    fn scene(&self, theme: Theme) -> Scene {
        let t = self.elapsed;
        let pal = palette(theme);
        let group = Transform::default().with_translation(GROUP_OFFSET);
        let place = |cloud: &Cloud, at: Vec3, scale: f64| -> Vec<Vec3> {
            cloud.points.iter().map(|&p| group.apply(p * scale + at)).collect()
        };
        let mut scene = Scene::new();

        // Glows
        for (&start, &color) in INPUT_STARTS.iter().zip(&pal.roads) {
            let pulse = 1.0 + (t * 2.5 + start.x).sin() * 0.15;
            scene.glows.push(Glow {
                center: group.apply(start),
                radius: 0.1 * pulse,
                color,
                opacity: 0.25,
                blend: Blend::Additive,
            });
        }
        scene.glows.push(Glow {
            center: group.apply(OUTPUT_END),
            radius: 0.15 * (1.0 + (t * 2.0).sin() * 0.1),
            color: pal.output,
            opacity: 0.2,
            blend: Blend::Additive,
        });
        scene.glows.push(Glow {
            center: group.apply(MERGER_POSITION),
            radius: 0.25,
            color: pal.output,
            opacity: 0.2 + (t * 2.0).sin() * 0.08,
            blend: Blend::Additive,
        });

        // Roads
        for (cloud, &color) in self.inputs.iter().zip(&pal.roads) {
            scene.points.push(PointLayer {
                positions: place(cloud, Vec3::ZERO, 1.0),
                colors: cloud.colors(color),
                size: 0.025,
                opacity: 0.9,
                blend: Blend::Normal,
            });
        }
        scene.points.push(PointLayer {
            positions: place(&self.output, Vec3::ZERO, 1.0),
            colors: self.output.colors(pal.output),
            size: 0.03,
            opacity: 0.95,
            blend: Blend::Normal,
        });

        // Nodes
        let node_pulse = 1.0 + (t * 2.0).sin() * 0.05;
        scene.points.push(PointLayer {
            positions: place(&self.merger, MERGER_POSITION, node_pulse),
            colors: PointColors::PerPoint(self.merger.brightness.iter().map(|&k| pal.output.lerp(pal.accent, k)).collect()),
            size: 0.035,
            opacity: 0.9,
            blend: Blend::Normal,
        });
        for (&start, &color) in INPUT_STARTS.iter().zip(&pal.roads) {
            scene.points.push(PointLayer {
                positions: place(&self.start_node, start, 1.0),
                colors: self.start_node.colors(color),
                size: 0.03,
                opacity: 0.9,
                blend: Blend::Normal,
            });
        }
        scene.points.push(PointLayer {
            positions: place(&self.end_node, OUTPUT_END, 1.0),
            colors: self.end_node.colors(pal.output),
            size: 0.035,
            opacity: 0.95,
            blend: Blend::Normal,
        });

        // Flow
        scene.points.push(PointLayer {
            positions: self.input_runners.iter().map(|(_, r)| group.apply(r.position(t))).collect(),
            colors: PointColors::PerPoint(self.input_runners.iter().map(|&(road, _)| pal.runners[road]).collect()),
            size: 0.05,
            opacity: 0.95,
            blend: Blend::Additive,
        });
        scene.points.push(PointLayer {
            positions: self.output_runners.iter().map(|r| group.apply(r.position(t))).collect(),
            colors: PointColors::Uniform(pal.output),
            size: 0.06,
            opacity: 0.95,
            blend: Blend::Additive,
        });

        scene
    }

    fn camera(&self) -> Camera {
        Camera::new(Vec3::new(0.0, 1.0, 5.0), 50.0)
    }
}
