use super::*;

#[test]
fn all_tab_counts_whole_catalog() {
    assert_eq!(CategoryFilter::All.count(), VIDEOS.len());
    assert_eq!(CategoryFilter::All.label(), "All Videos");
}

#[test]
fn category_tabs_partition_catalog() {
    let total: usize = CategoryFilter::TABS.iter().skip(1).map(|t| t.count()).sum();
    assert_eq!(total, VIDEOS.len());
}

#[test]
fn filter_keeps_only_matching_category() {
    let bridge = filter_videos(CategoryFilter::Only(VideoCategory::Bridge));
    assert!(!bridge.is_empty());
    assert!(bridge.iter().all(|v| v.category == VideoCategory::Bridge));
}

#[test]
fn open_and_close_modal() {
    let mut g = GalleryState::default();
    let id = VIDEOS[0].id;
    assert!(g.open(id));
    assert_eq!(g.selected_video().map(|v| v.id), Some(id));
    g.close();
    assert!(g.selected_video().is_none());
}

#[test]
fn open_ignores_unknown_id() {
    let mut g = GalleryState::default();
    assert!(!g.open(9_999));
    assert_eq!(g.selected, None);
}

#[test]
fn measured_duration_replaces_nominal() {
    let mut g = GalleryState::default();
    let v = &VIDEOS[0];
    assert_eq!(g.duration_label(v), v.duration);
    assert!(g.record_duration(v.id, 125.4));
    assert_eq!(g.duration_label(v), "2:05");
}

#[test]
fn invalid_duration_keeps_nominal() {
    let mut g = GalleryState::default();
    let v = &VIDEOS[1];
    assert!(!g.record_duration(v.id, f64::NAN));
    assert!(!g.record_duration(v.id, 0.0));
    assert_eq!(g.duration_label(v), v.duration);
}

#[test]
fn showcase_pick_covers_bounds() {
    let first = pick_showcase(0.0).map(|v| v.id);
    let last = pick_showcase(0.999_999).map(|v| v.id);
    assert_eq!(first, Some(SHOWCASE_FIRST));
    assert_eq!(last, Some(SHOWCASE_LAST));
    assert_eq!(pick_showcase(1.0).map(|v| v.id), Some(SHOWCASE_LAST));
    assert_eq!(pick_showcase(f64::NAN).map(|v| v.id), Some(SHOWCASE_FIRST));
}

const SHOWCASE_FIRST: u32 = 4;
const SHOWCASE_LAST: u32 = 21;

#[test]
fn showcase_close_hides_and_stops() {
    let mut s = ShowcaseState::new(SHOWCASE_FIRST);
    assert_eq!(s.status_label(), "Live Preview");
    assert!(!s.toggle_play());
    assert_eq!(s.status_label(), "Paused");
    s.toggle_play();
    s.close();
    assert!(!s.visible);
    assert!(!s.playing);
}
