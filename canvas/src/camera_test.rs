#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

// --- Camera ---

#[test]
fn camera_default_looks_at_origin_from_positive_z() {
    let cam = Camera::default();
    assert_eq!(cam.target, Vec3::ZERO);
    assert!(cam.position.z > 0.0);
}

#[test]
fn target_projects_to_viewport_center() {
    let cam = Camera::new(Vec3::new(0.0, 0.0, 6.0), 60.0);
    let p = cam.project(Vec3::ZERO, 800.0, 600.0).unwrap();
    assert!(approx_eq(p.screen.x, 400.0));
    assert!(approx_eq(p.screen.y, 300.0));
    assert!(approx_eq(p.depth, 6.0));
}

#[test]
fn positive_y_projects_above_center() {
    let cam = Camera::default();
    let p = cam.project(Vec3::new(0.0, 1.0, 0.0), 400.0, 400.0).unwrap();
    assert!(p.screen.y < 200.0);
}

#[test]
fn positive_x_projects_right_of_center() {
    let cam = Camera::default();
    let p = cam.project(Vec3::new(1.0, 0.0, 0.0), 400.0, 400.0).unwrap();
    assert!(p.screen.x > 200.0);
}

#[test]
fn nearer_points_have_larger_scale() {
    let cam = Camera::default();
    let near = cam.project(Vec3::new(0.0, 0.0, 1.0), 400.0, 400.0).unwrap();
    let far = cam.project(Vec3::new(0.0, 0.0, -1.0), 400.0, 400.0).unwrap();
    assert!(near.scale > far.scale);
    assert!(near.depth < far.depth);
}

#[test]
fn points_behind_the_eye_are_culled() {
    let cam = Camera::default();
    assert!(cam.project(Vec3::new(0.0, 0.0, 10.0), 400.0, 400.0).is_none());
}

#[test]
fn fov_ninety_gives_half_height_focal() {
    let cam = Camera::new(Vec3::new(0.0, 0.0, 5.0), 90.0);
    assert!(approx_eq(cam.focal_px(600.0), 300.0));
}

#[test]
fn elevated_camera_still_centers_target() {
    let cam = Camera::new(Vec3::new(0.0, 2.0, 6.0), 50.0);
    let p = cam.project(Vec3::ZERO, 500.0, 500.0).unwrap();
    assert!(approx_eq(p.screen.x, 250.0));
    assert!(approx_eq(p.screen.y, 250.0));
}

#[test]
fn view_direction_points_at_eye() {
    let cam = Camera::default();
    assert_eq!(cam.view_direction(), Vec3::new(0.0, 0.0, 1.0));
}
