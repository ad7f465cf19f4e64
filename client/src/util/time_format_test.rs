use super::*;

#[test]
fn pads_seconds() {
    assert_eq!(format_time(65.0), "1:05");
    assert_eq!(format_time(9.9), "0:09");
}

#[test]
fn minutes_are_not_wrapped_into_hours() {
    assert_eq!(format_time(3_725.0), "62:05");
}

#[test]
fn unknown_durations_render_as_zero() {
    assert_eq!(format_time(f64::NAN), "0:00");
    assert_eq!(format_time(f64::INFINITY), "0:00");
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(-3.0), "0:00");
}
