#![allow(clippy::float_cmp)]

use super::*;
use crate::scene::PointColors;

const W: f64 = 800.0;
const H: f64 = 600.0;

fn layer(positions: Vec<Vec3>, size: f64) -> PointLayer {
    PointLayer {
        positions,
        colors: PointColors::Uniform(Rgb::hex(0xff_8800)),
        size,
        opacity: 0.5,
        blend: Blend::Additive,
    }
}

#[test]
fn points_sort_far_to_near() {
    let camera = Camera::default();
    let near = Vec3::new(0.0, 0.0, 2.0);
    let far = Vec3::new(0.0, 0.0, -2.0);
    let out = project_points(&[layer(vec![near, far, Vec3::ZERO], 0.05)], &camera, W, H);
    assert_eq!(out.len(), 3);
    assert!(out[0].depth > out[1].depth);
    assert!(out[1].depth > out[2].depth);
}

#[test]
fn points_behind_camera_are_dropped() {
    let camera = Camera::default();
    let out = project_points(&[layer(vec![Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO], 0.05)], &camera, W, H);
    assert_eq!(out.len(), 1);
}

#[test]
fn point_size_is_clamped() {
    let camera = Camera::default();
    let tiny = project_points(&[layer(vec![Vec3::ZERO], 1e-6)], &camera, W, H);
    let huge = project_points(&[layer(vec![Vec3::ZERO], 100.0)], &camera, W, H);
    assert_eq!(tiny[0].size_px, MIN_POINT_PX);
    assert_eq!(huge[0].size_px, MAX_POINT_PX);
}

#[test]
fn point_carries_layer_style() {
    let camera = Camera::default();
    let out = project_points(&[layer(vec![Vec3::ZERO], 0.05)], &camera, W, H);
    assert_eq!(out[0].color, Rgb::hex(0xff_8800));
    assert_eq!(out[0].opacity, 0.5);
    assert_eq!(out[0].blend, Blend::Additive);
}

#[test]
fn runs_split_at_culled_vertices() {
    let camera = Camera::default();
    let pts = vec![
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 9.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
    ];
    let runs = project_runs(&pts, &camera, W, H);
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].len(), 2);
    assert_eq!(runs[1].len(), 2);
}

#[test]
fn runs_of_fully_visible_line_is_single() {
    let camera = Camera::default();
    let pts = vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)];
    assert_eq!(project_runs(&pts, &camera, W, H).len(), 1);
}

#[test]
fn screen_length_open_and_closed() {
    let square = [Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 4.0)];
    assert_eq!(screen_length(&square, false), 7.0);
    assert_eq!(screen_length(&square, true), 12.0);
}

#[test]
fn screen_length_of_degenerate_runs() {
    assert_eq!(screen_length(&[], true), 0.0);
    assert_eq!(screen_length(&[Point::new(1.0, 1.0)], false), 0.0);
}
