//! Screen points and the perspective camera used to project scenes.

use crate::consts::NEAR_PLANE;
use crate::geometry::Vec3;

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

/// A point in screen space (CSS pixels) or a normalized pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A world point after projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Position in CSS pixels, origin top-left.
    pub screen: Point,
    /// Distance along the view direction; larger is farther away.
    pub depth: f64,
    /// CSS pixels per world unit at this depth.
    pub scale: f64,
}

/// Perspective camera looking from `position` at `target`.
///
/// `fov_deg` is the vertical field of view, matching how scene cameras are
/// usually specified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_deg: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { position: Vec3::new(0.0, 0.0, 5.0), target: Vec3::ZERO, fov_deg: 50.0 }
    }
}

impl Camera {
    #[must_use]
    pub fn new(position: Vec3, fov_deg: f64) -> Self {
        Self { position, target: Vec3::ZERO, fov_deg }
    }

    /// Orthonormal (right, up, forward) basis for the view.
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.position).normalize();
        let mut right = forward.cross(Vec3::UP).normalize();
        if right == Vec3::ZERO {
            // Looking straight up or down; any horizontal right vector works.
            right = Vec3::new(1.0, 0.0, 0.0);
        }
        let up = right.cross(forward);
        (right, up, forward)
    }

    /// Focal length in CSS pixels for a viewport of `viewport_h` pixels.
    #[must_use]
    pub fn focal_px(&self, viewport_h: f64) -> f64 {
        let half_fov = (self.fov_deg.to_radians() * 0.5).max(1e-3);
        (viewport_h * 0.5) / half_fov.tan()
    }

    /// Direction from the target toward the eye.
    #[must_use]
    pub fn view_direction(&self) -> Vec3 {
        (self.position - self.target).normalize()
    }

    /// Project a world point into the viewport. Returns `None` when the point
    /// is behind the near plane.
    #[must_use]
    pub fn project(&self, world: Vec3, viewport_w: f64, viewport_h: f64) -> Option<Projected> {
        let (right, up, forward) = self.basis();
        let rel = world - self.position;
        let depth = rel.dot(forward);
        if depth <= NEAR_PLANE {
            return None;
        }
        let focal = self.focal_px(viewport_h);
        let scale = focal / depth;
        Some(Projected {
            screen: Point::new(viewport_w * 0.5 + rel.dot(right) * scale, viewport_h * 0.5 - rel.dot(up) * scale),
            depth,
            scale,
        })
    }
}
