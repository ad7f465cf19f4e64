use super::*;

#[test]
fn corners_map_to_unit_square() {
    assert_eq!(normalize_pointer(0.0, 0.0, 800.0, 600.0), (-1.0, 1.0));
    assert_eq!(normalize_pointer(800.0, 600.0, 800.0, 600.0), (1.0, -1.0));
}

#[test]
fn center_is_origin() {
    assert_eq!(normalize_pointer(400.0, 300.0, 800.0, 600.0), (0.0, 0.0));
}

#[test]
fn outside_viewport_is_clamped() {
    assert_eq!(normalize_pointer(-50.0, 900.0, 800.0, 600.0), (-1.0, -1.0));
}

#[test]
fn zero_viewport_yields_center() {
    assert_eq!(normalize_pointer(10.0, 10.0, 0.0, 600.0), (0.0, 0.0));
    assert_eq!(normalize_pointer(10.0, 10.0, f64::NAN, 600.0), (0.0, 0.0));
}
