use super::*;

#[test]
fn category_counts_match_catalog() {
    assert_eq!(MeasurementCategory::Railway.count(), 14);
    assert_eq!(MeasurementCategory::Bridge.count(), 5);
    assert_eq!(MeasurementCategory::Road.count(), 4);
}

#[test]
fn railway_tabs_select_their_images() {
    assert_eq!(RailwayTab::Ohe.images().len(), 4);
    assert_eq!(RailwayTab::Track.images().len(), 3);
    assert_eq!(RailwayTab::Station.images().len(), 7);
    assert_eq!(MeasurementCategory::Railway.images(RailwayTab::Track)[0].title, "Interchanging Point");
}

#[test]
fn non_railway_categories_ignore_tab() {
    assert_eq!(
        MeasurementCategory::Bridge.images(RailwayTab::Station),
        MeasurementCategory::Bridge.images(RailwayTab::Ohe)
    );
}

#[test]
fn every_image_lives_under_measurement_assets() {
    for category in MeasurementCategory::ALL {
        for tab in RailwayTab::ALL {
            for img in category.images(tab) {
                assert!(img.src.starts_with("/measurenment/"), "{}", img.src);
                assert!(!img.title.is_empty());
            }
        }
    }
}

#[test]
fn defaults_open_railway_ohe() {
    assert_eq!(MeasurementCategory::default(), MeasurementCategory::Railway);
    assert_eq!(RailwayTab::default(), RailwayTab::Ohe);
}
