use std::collections::HashSet;

use super::*;

#[test]
fn catalog_has_thirteen_unique_videos() {
    let ids: HashSet<u32> = VIDEOS.iter().map(|v| v.id).collect();
    assert_eq!(VIDEOS.len(), 13);
    assert_eq!(ids.len(), 13);
}

#[test]
fn every_showcase_id_resolves() {
    let showcase = showcase_videos();
    assert_eq!(showcase.len(), SHOWCASE_IDS.len());
    assert_eq!(showcase[0].title, "Track Section - Interchange Points");
    assert_eq!(showcase[9].id, 21);
}

#[test]
fn only_railway_videos_have_sub_category() {
    for v in &VIDEOS {
        assert_eq!(v.sub_category.is_some(), v.category == VideoCategory::Railway, "{}", v.title);
    }
}

#[test]
fn category_badge_spells_out_merger() {
    assert_eq!(VideoCategory::Merger.badge(), "Merger Layer");
    assert_eq!(VideoCategory::Road.badge(), "road");
}

#[test]
fn category_ids_are_unique() {
    let ids: HashSet<&str> = VideoCategory::ALL.iter().map(|c| c.id()).collect();
    assert_eq!(ids.len(), VideoCategory::ALL.len());
}

#[test]
fn unknown_id_is_none() {
    assert!(video_by_id(999).is_none());
}
