use super::*;

#[test]
fn scrolled_only_past_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(SCROLL_THRESHOLD_PX));
    assert!(is_scrolled(SCROLL_THRESHOLD_PX + 1.0));
}

#[test]
fn open_menu_forces_solid_background() {
    assert_eq!(nav_class(false, false), "navbar");
    assert_eq!(nav_class(true, false), "navbar navbar-solid");
    assert_eq!(nav_class(false, true), "navbar navbar-solid navbar-open");
}
