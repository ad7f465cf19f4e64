use super::*;

#[test]
fn particles_stay_near_their_layer() {
    for t in [0.0, 1.3, 42.0] {
        for i in 0..PARTICLE_COUNT {
            let p = particle_position(i, t);
            assert!((p.y - LAYER_HEIGHTS[i % 3]).abs() <= 0.3 + 1e-9);
        }
    }
}

#[test]
fn particle_radius_breathes_between_bounds() {
    for t in [0.0, 0.7, 9.9] {
        for i in (0..PARTICLE_COUNT).step_by(7) {
            let p = particle_position(i, t);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((1.5 - 1e-9..=2.5 + 1e-9).contains(&r), "radius {r}");
        }
    }
}

#[test]
fn particles_move_over_time() {
    assert_ne!(particle_position(10, 0.0), particle_position(10, 1.0));
}

#[test]
fn connectors_join_adjacent_layers() {
    let flow = DataFlow::new();
    assert_eq!(flow.connectors.len(), CONNECTOR_COUNT * 2);
    for (a, b) in &flow.connectors {
        assert!((a.y - b.y - 1.5).abs() < 1e-9);
    }
}

#[test]
fn palette_switches_with_theme() {
    let flow = DataFlow::new();
    let dark = flow.scene(Theme::Dark);
    let light = flow.scene(Theme::Light);
    assert_ne!(dark.points[0].colors, light.points[0].colors);
    assert_eq!(dark.points[0].colors.at(0), Rgb::from_unit(0.2, 0.8, 0.9));
    assert_eq!(light.points[0].colors.at(1), Rgb::from_unit(0.9, 0.5, 0.1));
}

#[test]
fn camera_looks_down_from_above() {
    let cam = DataFlow::new().camera();
    assert_eq!(cam.position, Vec3::new(0.0, 2.0, 6.0));
}
