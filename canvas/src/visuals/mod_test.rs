use super::*;

const EPSILON: f64 = 1e-9;

#[test]
fn visual_kind_uses_kebab_case_names() {
    let json = serde_json::to_string(&VisualKind::PointCloudSphere).unwrap();
    assert_eq!(json, "\"point-cloud-sphere\"");
    let kind: VisualKind = serde_json::from_str("\"globe\"").unwrap();
    assert_eq!(kind, VisualKind::Globe);
}

#[test]
fn every_kind_builds_a_non_empty_scene() {
    for kind in [
        VisualKind::PointCloudSphere,
        VisualKind::ChaosParticles,
        VisualKind::DataFlow,
        VisualKind::Merger,
        VisualKind::Globe,
    ] {
        let mut visual = kind.build();
        visual.tick(1.0, Point::default());
        let scene = visual.scene(Theme::Dark);
        assert!(scene.point_count() > 0 || !scene.polylines.is_empty(), "{kind:?} drew nothing");
    }
}

#[test]
fn ease_toward_one_reference_frame_matches_factor() {
    let v = ease_toward(0.0, 1.0, 0.05, 1.0 / 60.0);
    assert!((v - 0.05).abs() < EPSILON);
}

#[test]
fn ease_toward_zero_dt_keeps_value() {
    assert!((ease_toward(0.3, 1.0, 0.05, 0.0) - 0.3).abs() < EPSILON);
}

#[test]
fn ease_toward_converges() {
    let mut v = 0.0;
    for _ in 0..600 {
        v = ease_toward(v, 2.0, 0.05, 1.0 / 60.0);
    }
    assert!((v - 2.0).abs() < 1e-6);
}
