use super::*;

#[test]
fn new_starts_at_first_item() {
    let s = Slideshow::new(4);
    assert_eq!(s.index(), 0);
    assert_eq!(s.len(), 4);
    assert_eq!(s.epoch(), 0);
}

#[test]
fn ticks_advance_and_wrap() {
    let mut s = Slideshow::new(3);
    let epoch = s.epoch();
    assert!(s.on_tick(epoch));
    assert_eq!(s.index(), 1);
    assert!(s.on_tick(epoch));
    assert_eq!(s.index(), 2);
    assert!(s.on_tick(epoch));
    assert_eq!(s.index(), 0);
}

#[test]
fn select_invalidates_pending_tick() {
    let mut s = Slideshow::new(5);
    let stale = s.epoch();
    let fresh = s.select(3);
    assert_ne!(stale, fresh);

    assert!(!s.on_tick(stale));
    assert_eq!(s.index(), 3);

    assert!(s.on_tick(fresh));
    assert_eq!(s.index(), 4);
}

#[test]
fn select_clamps_out_of_range() {
    let mut s = Slideshow::new(3);
    s.select(10);
    assert_eq!(s.index(), 2);
}

#[test]
fn arrows_wrap_and_count_as_manual() {
    let mut s = Slideshow::new(4);
    let e0 = s.epoch();
    s.show_previous();
    assert_eq!(s.index(), 3);
    let e2 = s.show_next();
    assert_eq!(s.index(), 0);
    assert!(!s.is_current(e0));
    assert!(s.is_current(e2));
}

#[test]
fn reset_restarts_with_new_length() {
    let mut s = Slideshow::new(4);
    let old = s.select(2);
    let new = s.reset(7);
    assert_eq!(s.index(), 0);
    assert_eq!(s.len(), 7);
    assert!(!s.on_tick(old));
    assert!(s.on_tick(new));
}

#[test]
fn empty_slideshow_never_advances() {
    let mut s = Slideshow::new(0);
    assert!(s.is_empty());
    assert!(!s.on_tick(s.epoch()));
    s.show_next();
    s.select(5);
    assert_eq!(s.index(), 0);
}

#[test]
fn timing_constants() {
    assert_eq!(AUTO_ADVANCE_MS, 3_000);
    assert_eq!(RESUME_DELAY_MS, 5_000);
}
