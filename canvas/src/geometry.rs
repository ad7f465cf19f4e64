//! 3D vector math and the procedural shapes the visuals are built from.
//!
//! Coordinates follow the usual right-handed convention: +X right, +Y up,
//! +Z toward the viewer. Rotations use intrinsic XYZ order, so a rotation of
//! `(x, y, z)` applies Z first, then Y, then X to a column vector.

use std::f64::consts::{PI, TAU};
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point or direction in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0, z: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len <= f64::EPSILON { Self::ZERO } else { self * (1.0 / len) }
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    #[must_use]
    pub fn rotate_x(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self { x: self.x, y: self.y * c - self.z * s, z: self.y * s + self.z * c }
    }

    #[must_use]
    pub fn rotate_y(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self { x: self.x * c + self.z * s, y: self.y, z: -self.x * s + self.z * c }
    }

    #[must_use]
    pub fn rotate_z(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self { x: self.x * c - self.y * s, y: self.x * s + self.y * c, z: self.z }
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Euler rotation in radians, applied in XYZ order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Euler {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn apply(self, v: Vec3) -> Vec3 {
        v.rotate_z(self.z).rotate_y(self.y).rotate_x(self.x)
    }
}

/// Rotation, uniform scale and translation applied to a group of primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub rotation: Euler,
    pub scale: f64,
    pub translation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self { rotation: Euler::default(), scale: 1.0, translation: Vec3::ZERO }
    }
}

impl Transform {
    #[must_use]
    pub fn rotation(rotation: Euler) -> Self {
        Self { rotation, ..Self::default() }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    /// Scale, then rotate, then translate.
    #[must_use]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        self.rotation.apply(v * self.scale) + self.translation
    }

    /// Apply `inner` first, then `self`.
    #[must_use]
    pub fn apply_nested(&self, inner: &Transform, v: Vec3) -> Vec3 {
        self.apply(inner.apply(v))
    }
}

// =============================================================
// Spherical helpers
// =============================================================

/// Point at polar angle `phi` and azimuth `theta` on a sphere of `radius`,
/// with the pole on +Z.
#[must_use]
pub fn spherical(phi: f64, theta: f64, radius: f64) -> Vec3 {
    let (sp, cp) = phi.sin_cos();
    let (st, ct) = theta.sin_cos();
    Vec3::new(radius * sp * ct, radius * sp * st, radius * cp)
}

/// Polar and azimuth angles of sample `i` out of `n` on a Fibonacci spiral.
///
/// Samples run from the south pole (`i = 0`) to just short of the north pole
/// and cover the sphere with near-uniform density.
#[must_use]
pub fn fibonacci_angles(i: usize, n: usize) -> (f64, f64) {
    let nf = n.max(1) as f64;
    let phi = (-1.0 + (2.0 * i as f64) / nf).clamp(-1.0, 1.0).acos();
    let theta = (nf * PI).sqrt() * phi;
    (phi, theta)
}

/// Geographic coordinates to a point on a globe of `radius` with +Y as north
/// and the prime meridian facing +Z.
#[must_use]
pub fn lat_lng_to_vec(lat_deg: f64, lng_deg: f64, radius: f64) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (90.0 - lng_deg).to_radians();
    let (sp, cp) = phi.sin_cos();
    let (st, ct) = theta.sin_cos();
    Vec3::new(radius * sp * ct, radius * cp, radius * sp * st)
}

/// Spherical linear interpolation between two unit vectors.
#[must_use]
pub fn slerp(a: Vec3, b: Vec3, t: f64) -> Vec3 {
    let cos = a.dot(b).clamp(-1.0, 1.0);
    let angle = cos.acos();
    if angle.abs() < 1e-9 {
        return a.lerp(b, t).normalize();
    }
    let sin = angle.sin();
    a * (((1.0 - t) * angle).sin() / sin) + b * ((t * angle).sin() / sin)
}

/// Great-circle arc between two geographic points lifted above a globe of
/// `radius`. Peak height is `radius * altitude` at the midpoint.
#[must_use]
pub fn globe_arc(from: (f64, f64), to: (f64, f64), radius: f64, altitude: f64, segments: usize) -> Vec<Vec3> {
    let a = lat_lng_to_vec(from.0, from.1, 1.0);
    let b = lat_lng_to_vec(to.0, to.1, 1.0);
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let t = i as f64 / segments as f64;
            let lift = 1.0 + altitude * (PI * t).sin();
            slerp(a, b, t) * (radius * lift)
        })
        .collect()
}

// =============================================================
// Curves
// =============================================================

/// Point on the quadratic Bézier through `p0`, control `p1`, and `p2`.
#[must_use]
pub fn quadratic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, t: f64) -> Vec3 {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// `divisions + 1` evenly spaced samples along a quadratic Bézier.
#[must_use]
pub fn bezier_samples(p0: Vec3, p1: Vec3, p2: Vec3, divisions: usize) -> Vec<Vec3> {
    let divisions = divisions.max(1);
    (0..=divisions)
        .map(|i| quadratic_bezier(p0, p1, p2, i as f64 / divisions as f64))
        .collect()
}

/// Closed circle of `radius` in the XY plane, as `segments` vertices.
#[must_use]
pub fn circle(radius: f64, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..segments)
        .map(|i| {
            let a = TAU * i as f64 / segments as f64;
            Vec3::new(radius * a.cos(), radius * a.sin(), 0.0)
        })
        .collect()
}

// =============================================================
// Polyhedra
// =============================================================

/// Wireframe solids used for floating fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polyhedron {
    /// Unit cube centered on the origin.
    Cube,
    /// Tetrahedron inscribed in the unit sphere.
    Tetrahedron,
    /// Octahedron inscribed in the unit sphere.
    Octahedron,
}

impl Polyhedron {
    /// Pick a solid from an index, wrapping modulo three.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => Self::Cube,
            1 => Self::Tetrahedron,
            _ => Self::Octahedron,
        }
    }

    /// Edge list in local coordinates.
    #[must_use]
    pub fn edges(self) -> Vec<(Vec3, Vec3)> {
        let (verts, pairs): (Vec<Vec3>, &[(usize, usize)]) = match self {
            Self::Cube => (
                vec![
                    Vec3::new(-0.5, -0.5, -0.5),
                    Vec3::new(0.5, -0.5, -0.5),
                    Vec3::new(0.5, 0.5, -0.5),
                    Vec3::new(-0.5, 0.5, -0.5),
                    Vec3::new(-0.5, -0.5, 0.5),
                    Vec3::new(0.5, -0.5, 0.5),
                    Vec3::new(0.5, 0.5, 0.5),
                    Vec3::new(-0.5, 0.5, 0.5),
                ],
                &[(0, 1), (1, 2), (2, 3), (3, 0), (4, 5), (5, 6), (6, 7), (7, 4), (0, 4), (1, 5), (2, 6), (3, 7)],
            ),
            Self::Tetrahedron => (
                [
                    Vec3::new(1.0, 1.0, 1.0),
                    Vec3::new(-1.0, -1.0, 1.0),
                    Vec3::new(-1.0, 1.0, -1.0),
                    Vec3::new(1.0, -1.0, -1.0),
                ]
                .into_iter()
                .map(Vec3::normalize)
                .collect(),
                &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
            ),
            Self::Octahedron => (
                vec![
                    Vec3::new(1.0, 0.0, 0.0),
                    Vec3::new(-1.0, 0.0, 0.0),
                    Vec3::new(0.0, 1.0, 0.0),
                    Vec3::new(0.0, -1.0, 0.0),
                    Vec3::new(0.0, 0.0, 1.0),
                    Vec3::new(0.0, 0.0, -1.0),
                ],
                &[
                    (0, 2),
                    (0, 3),
                    (0, 4),
                    (0, 5),
                    (1, 2),
                    (1, 3),
                    (1, 4),
                    (1, 5),
                    (2, 4),
                    (4, 3),
                    (3, 5),
                    (5, 2),
                ],
            ),
        };
        pairs.iter().map(|&(a, b)| (verts[a], verts[b])).collect()
    }
}
