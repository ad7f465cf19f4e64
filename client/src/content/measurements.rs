//! Measurement image catalog for the measurement page.

#[cfg(test)]
#[path = "measurements_test.rs"]
mod measurements_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasurementImage {
    pub src: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

const fn image(src: &'static str, title: &'static str, description: &'static str, icon: &'static str) -> MeasurementImage {
    MeasurementImage { src, title, description, icon }
}

pub const OHE_IMAGES: [MeasurementImage; 4] = [
    image(
        "/measurenment/Railway/Ohe pole Measurements.png",
        "OHE Pole Measurements",
        "Complete height and angle measurements of OHE mask measurement",
        "zap",
    ),
    image("/measurenment/Railway/Catenary to rail.png", "Catenary to Rail", "Vertical distance from catenary wire to track", "arrow-up-down"),
    image("/measurenment/Railway/Contact to rail.png", "Contact to Rail", "Contact wire height above rail level", "arrow-up-down"),
    image("/measurenment/Railway/Catenary_to_contact.png", "Catenary to Contact", "Distance between catenary and contact wire", "ruler"),
];

pub const TRACK_IMAGES: [MeasurementImage; 3] = [
    image("/measurenment/Railway/Interchenging point.png", "Interchanging Point", "Track switching point angle measurement", "gauge"),
    image("/measurenment/Railway/defect angle on cant road.png", "Cant Angle Defect", "Track curving and cant angle analysis", "alert"),
    image(
        "/measurenment/Railway/Distance_btn_2_tracks.png",
        "Distance Between Tracks",
        "Precise measurement between parallel tracks",
        "arrow-left-right",
    ),
];

pub const STATION_IMAGES: [MeasurementImage; 7] = [
    image("/measurenment/Railway/footover bridge height.png", "Footover Bridge Height", "Vertical clearance measurement", "arrow-up-down"),
    image("/measurenment/Railway/Footover bridge width.png", "Footover Bridge Width", "Bridge span and width dimensions", "arrow-left-right"),
    image("/measurenment/Railway/Footover bridge area and volume.png", "Bridge Area & Volume", "Complete volumetric analysis", "box"),
    image("/measurenment/Railway/u shape pole measurements.png", "U-Shape OHE Pole", "Special pole structure dimensions", "columns"),
    image("/measurenment/Railway/platform measurements.png", "Platform Measurements", "Complete platform dimension analysis", "ruler"),
    image("/measurenment/Railway/platform track distance.png", "Platform to Track", "Safety gap measurement", "arrow-left-right"),
    image("/measurenment/Railway/platform wall measurements.png", "Platform Wall", "Wall height and thickness analysis", "building"),
];

pub const BRIDGE_IMAGES: [MeasurementImage; 5] = [
    image("/measurenment/Bridge/Bridge Height.png", "Bridge Height", "Vertical clearance and structural height", "arrow-up-down"),
    image("/measurenment/Bridge/Bridge Width.png", "Bridge Width", "Total deck width measurement", "arrow-left-right"),
    image("/measurenment/Bridge/Bridge Length.png", "Bridge Length", "Total span length", "ruler"),
    image("/measurenment/Bridge/Span between pillars.png", "Pillar Span", "Distance between supporting pillars", "columns"),
    image(
        "/measurenment/Bridge/Bridge Pillar Measurements.png",
        "Pillar Dimensions",
        "Complete pillar measurements including volume",
        "box",
    ),
];

pub const ROAD_IMAGES: [MeasurementImage; 4] = [
    image("/measurenment/Road/Road Length.png", "Road Length", "Total road stretch measurement", "ruler"),
    image("/measurenment/Road/Road Width.png", "Road Width", "Carriageway width analysis", "arrow-left-right"),
    image("/measurenment/Road/pothole.png", "Pothole Analysis", "Defect detection and measurement", "alert"),
    image("/measurenment/Road/Street light Pole height.png", "Street Light Pole", "Pole height for filling material calculation", "lightbulb"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RailwayTab {
    #[default]
    Ohe,
    Track,
    Station,
}

impl RailwayTab {
    pub const ALL: [Self; 3] = [Self::Ohe, Self::Track, Self::Station];

    pub fn label(self) -> &'static str {
        match self {
            Self::Ohe => "OHE Mask measurement",
            Self::Track => "Track",
            Self::Station => "Station",
        }
    }

    pub fn images(self) -> &'static [MeasurementImage] {
        match self {
            Self::Ohe => &OHE_IMAGES,
            Self::Track => &TRACK_IMAGES,
            Self::Station => &STATION_IMAGES,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MeasurementCategory {
    #[default]
    Railway,
    Bridge,
    Road,
}

impl MeasurementCategory {
    pub const ALL: [Self; 3] = [Self::Railway, Self::Bridge, Self::Road];

    pub fn label(self) -> &'static str {
        match self {
            Self::Railway => "Railway",
            Self::Bridge => "Bridge",
            Self::Road => "Road",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Railway => "train",
            Self::Bridge => "building",
            Self::Road => "route",
        }
    }

    /// Number of images across every sub-tab of the category.
    pub fn count(self) -> usize {
        match self {
            Self::Railway => RailwayTab::ALL.iter().map(|t| t.images().len()).sum(),
            Self::Bridge => BRIDGE_IMAGES.len(),
            Self::Road => ROAD_IMAGES.len(),
        }
    }

    /// Images shown for the category; `tab` only matters for railway.
    pub fn images(self, tab: RailwayTab) -> &'static [MeasurementImage] {
        match self {
            Self::Railway => tab.images(),
            Self::Bridge => &BRIDGE_IMAGES,
            Self::Road => &ROAD_IMAGES,
        }
    }
}
