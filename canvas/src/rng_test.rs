use super::*;

#[test]
fn seeded_is_deterministic() {
    assert!((seeded(42.0) - seeded(42.0)).abs() < f64::EPSILON);
}

#[test]
fn seeded_stays_in_unit_interval() {
    for i in 0..5000 {
        let v = seeded(f64::from(i) * 1.37 - 900.0);
        assert!((0.0..1.0).contains(&v), "seed {i} produced {v}");
    }
}

#[test]
fn seeded_zero_is_zero() {
    assert!(seeded(0.0).abs() < f64::EPSILON);
}

#[test]
fn seeded_wide_differs_from_seeded() {
    assert!((seeded_wide(3.0) - seeded(3.0)).abs() > 1e-6);
}

#[test]
fn seeded_wide_stays_in_unit_interval() {
    for i in 0..2000 {
        let v = seeded_wide(f64::from(i) * 2.2);
        assert!((0.0..1.0).contains(&v));
    }
}
