//! Decorative animated visuals.
//!
//! ARCHITECTURE
//! ============
//! Each visual precomputes its geometry from the seeded generator in
//! [`crate::rng`] at construction time and keeps only a handful of animation
//! values (elapsed time, eased rotation, displaced particle buffer). `tick`
//! advances those values from the elapsed clock; `scene` turns them into
//! world-space primitives for the requested theme.

pub mod chaos_particles;
pub mod data_flow;
pub mod globe;
pub mod merger;
pub mod point_cloud_sphere;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use serde::{Deserialize, Serialize};

use crate::camera::{Camera, Point};
use crate::consts::REFERENCE_FPS;
use crate::scene::{Scene, Theme};

pub use chaos_particles::ChaosParticles;
pub use data_flow::DataFlow;
pub use globe::{CountryOutline, Globe};
pub use merger::MergerVisualization;
pub use point_cloud_sphere::PointCloudSphere;

/// A self-animating decorative scene.
pub trait Visual {
    /// Advance animation state. `elapsed` is seconds since the visual started;
    /// `pointer` is normalized to `[-1, 1]` on both axes with +Y up.
    fn tick(&mut self, elapsed: f64, pointer: Point);

    /// Primitives for the current animation state.
    fn scene(&self, theme: Theme) -> Scene;

    /// Camera the scene is meant to be viewed through.
    fn camera(&self) -> Camera;

    /// Hand over parsed country outlines. Visuals without a map ignore them.
    fn set_outlines(&mut self, _outlines: Vec<CountryOutline>) {}
}

/// Identifies which visual a canvas hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualKind {
    PointCloudSphere,
    ChaosParticles,
    DataFlow,
    Merger,
    Globe,
}

impl VisualKind {
    /// Construct a fresh instance of this visual.
    #[must_use]
    pub fn build(self) -> Box<dyn Visual> {
        match self {
            Self::PointCloudSphere => Box::new(PointCloudSphere::new()),
            Self::ChaosParticles => Box::new(ChaosParticles::new()),
            Self::DataFlow => Box::new(DataFlow::new()),
            Self::Merger => Box::new(MergerVisualization::new()),
            Self::Globe => Box::new(Globe::new()),
        }
    }
}

/// Move `current` toward `target` by `factor` per reference frame, scaled so
/// the approach rate does not depend on the actual frame rate.
#[must_use]
pub fn ease_toward(current: f64, target: f64, factor: f64, dt: f64) -> f64 {
    let frames = (dt * REFERENCE_FPS).max(0.0);
    let keep = (1.0 - factor.clamp(0.0, 1.0)).powf(frames);
    target + (current - target) * keep
}
