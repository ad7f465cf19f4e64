use super::*;

#[test]
fn input_ribbons_have_five_points_across_each_sample() {
    let viz = MergerVisualization::new();
    assert_eq!(viz.inputs.len(), 3);
    for road in &viz.inputs {
        assert_eq!(road.points.len(), 201 * 5);
    }
    assert_eq!(viz.output.points.len(), 151 * 8);
}

#[test]
fn ribbon_edges_are_brighter_than_center() {
    let viz = MergerVisualization::new();
    let b = &viz.inputs[0].brightness;
    assert!((b[0] - 1.0).abs() < 1e-9);
    assert!((b[2] - 0.7).abs() < 1e-9);
    assert!((b[4] - 1.0).abs() < 1e-9);
}

#[test]
fn ribbons_start_and_end_at_their_anchors() {
    let viz = MergerVisualization::new();
    let first = viz.inputs[1].points[2];
    let last = *viz.inputs[1].points.last().unwrap();
    assert!(first.distance(INPUT_STARTS[1]) < 0.02);
    assert!(last.distance(MERGER_POSITION) < 0.1);
}

#[test]
fn runner_progress_wraps_into_unit_interval() {
    let r = Runner { start: Vec3::ZERO, control: Vec3::UP, end: OUTPUT_END, speed: 0.15, offset: 0.9 };
    assert!((r.progress(0.0) - 0.9).abs() < 1e-9);
    assert!((r.progress(1.0) - 0.05).abs() < 1e-9);
    for step in 0..500 {
        let p = r.progress(f64::from(step) * 0.37);
        assert!((0.0..1.0).contains(&p));
    }
}

#[test]
fn runners_use_seeded_speeds_in_range() {
    let viz = MergerVisualization::new();
    assert_eq!(viz.input_runners().count(), 3 * RUNNERS_PER_ROAD);
    assert!(viz.input_runners().all(|r| (0.12..0.2).contains(&r.speed)));
    assert_eq!(viz.output_runners().len(), OUTPUT_RUNNERS);
    assert!(viz.output_runners().iter().all(|r| (0.1..0.16).contains(&r.speed)));
}

#[test]
fn runners_hover_just_above_the_road_curve() {
    let viz = MergerVisualization::new();
    let r = viz.output_runners()[0];
    let on_curve = quadratic_bezier(r.start, r.control, r.end, r.progress(3.0));
    assert!((r.position(3.0).y - on_curve.y - 0.02).abs() < 1e-9);
}

#[test]
fn merger_node_points_stay_inside_radius() {
    let viz = MergerVisualization::new();
    assert_eq!(viz.merger.points.len(), MERGER_NODE_POINTS);
    for p in &viz.merger.points {
        assert!((p.x * p.x + p.z * p.z).sqrt() <= MERGER_NODE_RADIUS + 1e-9);
        assert!(p.y.abs() <= 0.05 + 1e-9);
    }
}

#[test]
fn scene_is_offset_toward_camera() {
    let viz = MergerVisualization::new();
    let scene = viz.scene(Theme::Dark);
    let merger_glow = scene.glows.last().unwrap();
    assert_eq!(merger_glow.center, Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn themes_use_different_output_color() {
    let viz = MergerVisualization::new();
    let dark = viz.scene(Theme::Dark);
    let light = viz.scene(Theme::Light);
    assert_eq!(dark.glows.last().unwrap().color, Rgb::hex(0x63_66f1));
    assert_eq!(light.glows.last().unwrap().color, Rgb::hex(0xdc_2626));
}
