#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

// --- Vec3 ---

#[test]
fn cross_of_x_and_y_is_z() {
    let z = Vec3::new(1.0, 0.0, 0.0).cross(Vec3::UP);
    assert!(vec_approx_eq(z, Vec3::new(0.0, 0.0, 1.0)));
}

#[test]
fn normalize_zero_stays_zero() {
    assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
}

#[test]
fn normalize_gives_unit_length() {
    assert!(approx_eq(Vec3::new(3.0, 4.0, 12.0).normalize().length(), 1.0));
}

#[test]
fn rotate_y_quarter_turn_maps_x_to_negative_z() {
    let v = Vec3::new(1.0, 0.0, 0.0).rotate_y(FRAC_PI_2);
    assert!(vec_approx_eq(v, Vec3::new(0.0, 0.0, -1.0)));
}

#[test]
fn rotate_x_quarter_turn_maps_y_to_z() {
    let v = Vec3::UP.rotate_x(FRAC_PI_2);
    assert!(vec_approx_eq(v, Vec3::new(0.0, 0.0, 1.0)));
}

#[test]
fn euler_applies_z_before_x() {
    // Z turns +X into +Y, then X turns +Y into +Z.
    let e = Euler::new(FRAC_PI_2, 0.0, FRAC_PI_2);
    assert!(vec_approx_eq(e.apply(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(0.0, 0.0, 1.0)));
}

#[test]
fn transform_scales_before_translating() {
    let t = Transform::default().with_scale(2.0).with_translation(Vec3::new(0.0, 0.0, 1.0));
    assert!(vec_approx_eq(t.apply(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(2.0, 2.0, 3.0)));
}

// --- Sphere helpers ---

#[test]
fn fibonacci_first_sample_is_south_pole() {
    let (phi, _) = fibonacci_angles(0, 100);
    assert!(approx_eq(phi, PI));
}

#[test]
fn fibonacci_samples_lie_on_sphere() {
    for i in 0..200 {
        let (phi, theta) = fibonacci_angles(i, 200);
        assert!(approx_eq(spherical(phi, theta, 2.5).length(), 2.5));
    }
}

#[test]
fn lat_lng_equator_prime_meridian_faces_positive_z() {
    assert!(vec_approx_eq(lat_lng_to_vec(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0)));
}

#[test]
fn lat_lng_north_pole_is_up() {
    assert!(vec_approx_eq(lat_lng_to_vec(90.0, 0.0, 2.0), Vec3::new(0.0, 2.0, 0.0)));
}

#[test]
fn slerp_midpoint_stays_on_unit_sphere() {
    let a = Vec3::new(1.0, 0.0, 0.0);
    let b = Vec3::new(0.0, 0.0, 1.0);
    let mid = slerp(a, b, 0.5);
    assert!(approx_eq(mid.length(), 1.0));
    assert!(approx_eq(mid.x, mid.z));
}

#[test]
fn globe_arc_endpoints_sit_on_surface_and_middle_is_lifted() {
    let arc = globe_arc((28.6, 77.2), (19.0, 72.8), 2.0, 0.1, 20);
    assert_eq!(arc.len(), 21);
    assert!(approx_eq(arc[0].length(), 2.0));
    assert!(approx_eq(arc[20].length(), 2.0));
    assert!(approx_eq(arc[10].length(), 2.2));
}

// --- Curves ---

#[test]
fn bezier_hits_endpoints() {
    let a = Vec3::new(-2.2, 0.8, -1.2);
    let c = Vec3::new(0.0, 1.0, 0.0);
    let b = Vec3::ZERO;
    assert!(vec_approx_eq(quadratic_bezier(a, c, b, 0.0), a));
    assert!(vec_approx_eq(quadratic_bezier(a, c, b, 1.0), b));
}

#[test]
fn bezier_samples_include_both_ends() {
    let pts = bezier_samples(Vec3::ZERO, Vec3::UP, Vec3::new(2.0, 0.0, 0.0), 200);
    assert_eq!(pts.len(), 201);
    assert!(vec_approx_eq(pts[200], Vec3::new(2.0, 0.0, 0.0)));
}

#[test]
fn circle_vertices_have_requested_radius() {
    let ring = circle(1.8, 64);
    assert_eq!(ring.len(), 64);
    assert!(ring.iter().all(|p| approx_eq(p.length(), 1.8) && p.z == 0.0));
}

// --- Polyhedra ---

#[test]
fn polyhedron_edge_counts() {
    assert_eq!(Polyhedron::Cube.edges().len(), 12);
    assert_eq!(Polyhedron::Tetrahedron.edges().len(), 6);
    assert_eq!(Polyhedron::Octahedron.edges().len(), 12);
}

#[test]
fn polyhedron_from_index_wraps() {
    assert_eq!(Polyhedron::from_index(3), Polyhedron::Cube);
    assert_eq!(Polyhedron::from_index(5), Polyhedron::Octahedron);
}

#[test]
fn octahedron_edges_all_same_length() {
    let expected = 2.0_f64.sqrt();
    assert!(Polyhedron::Octahedron.edges().iter().all(|(a, b)| approx_eq(a.distance(*b), expected)));
}
