//! Video catalog for the gallery page and the floating showcase.

#[cfg(test)]
#[path = "videos_test.rs"]
mod videos_test;

pub const OFFICIAL_VIDEO_URL: &str = "https://3dbharat.com/storage/videos/3D_Bharat.mp4";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VideoCategory {
    Railway,
    Bridge,
    Road,
    Design,
    Material,
    Merger,
}

impl VideoCategory {
    /// Display order of the filter tabs.
    pub const ALL: [Self; 6] = [Self::Railway, Self::Bridge, Self::Road, Self::Design, Self::Material, Self::Merger];

    pub fn id(self) -> &'static str {
        match self {
            Self::Railway => "railway",
            Self::Bridge => "bridge",
            Self::Road => "road",
            Self::Design => "design",
            Self::Material => "material",
            Self::Merger => "merger",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Railway => "Railway",
            Self::Bridge => "Bridge",
            Self::Road => "Road",
            Self::Design => "Design",
            Self::Material => "Material",
            Self::Merger => "Merger Layer",
        }
    }

    /// Text on the card badge.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Merger => "Merger Layer",
            other => other.id(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Railway => "train",
            Self::Bridge => "building",
            Self::Road => "route",
            Self::Design => "palette",
            Self::Material => "hammer",
            Self::Merger => "layers",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Video {
    pub id: u32,
    pub category: VideoCategory,
    pub sub_category: Option<&'static str>,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    /// Nominal `m:ss` length shown until the real duration loads.
    pub duration: &'static str,
}

const fn railway_3d(
    id: u32,
    title: &'static str,
    description: &'static str,
    url: &'static str,
    duration: &'static str,
) -> Video {
    Video { id, category: VideoCategory::Railway, sub_category: Some("3d"), title, description, url, duration }
}

const fn video(
    id: u32,
    category: VideoCategory,
    title: &'static str,
    description: &'static str,
    url: &'static str,
    duration: &'static str,
) -> Video {
    Video { id, category, sub_category: None, title, description, url, duration }
}

/// Gallery order: railway, bridge, road, design, material, merger, tracking.
pub const VIDEOS: [Video; 13] = [
    railway_3d(
        4,
        "Track Section - Interchange Points",
        "3D visualization of track switching point angles and defect detection analysis",
        "https://3dbharat.com/storage/videos/track_section-intercheniging_point_&_cant_angle.mp4",
        "5:10",
    ),
    railway_3d(
        5,
        "Electrical Section - OHE Measurements",
        "3D overhead electrical equipment mask measurements and wire analysis",
        "https://3dbharat.com/storage/videos/railway_section-ohe_pole_&_wire_measurements.mp4",
        "4:35",
    ),
    railway_3d(
        6,
        "Station & Footover Bridge",
        "analysis of railway station and footover bridge infrastructure",
        "https://3dbharat.com/storage/videos/construction_&_infrastructure_section-platform_measurement.mp4",
        "6:15",
    ),
    railway_3d(
        18,
        "Construction & Infrastructure - Station",
        "3D visualization of station and footover bridge construction infrastructure",
        "https://3dbharat.com/storage/videos/construction_and_infrastructure_section_-station&_footover_bridge.mp4",
        "5:00",
    ),
    railway_3d(
        19,
        "Electrical Section - OHE Mask",
        "3D overhead electrical equipment mask measurements and analysis",
        "https://3dbharat.com/storage/videos/electrical_section-ohe_mask_measurements.mp4",
        "4:30",
    ),
    railway_3d(
        20,
        "Track Section - Angle of Defect",
        "3D analysis of interchange points and angle of defect detection",
        "https://3dbharat.com/storage/videos/track_section-interchenging_points_angle_of_defect.mp4",
        "4:45",
    ),
    video(
        7,
        VideoCategory::Bridge,
        "Bridge Section - Full Measurements",
        "Height, width, length, span, and pillar dimension measurements",
        "https://3dbharat.com/storage/videos/bridge_section-height,width,length,span,pillar_dimension.mp4",
        "5:40",
    ),
    video(
        8,
        VideoCategory::Road,
        "Road Section - Defect Analysis",
        "Pothole detection, road height, and width measurement analysis",
        "https://3dbharat.com/storage/videos/road_section-potholes,road_height,width.mp4",
        "4:50",
    ),
    video(
        9,
        VideoCategory::Road,
        "Tollbooth Section",
        "Complete tollbooth infrastructure and lane measurement analysis",
        "https://3dbharat.com/storage/videos/tollbooth_section.mp4",
        "3:25",
    ),
    video(
        1,
        VideoCategory::Design,
        "Road Construction Design",
        "Complete 3D visualization of road construction design process and layer planning",
        "https://3dbharat.com/storage/videos/road_construction_design.mp4",
        "3:45",
    ),
    video(
        2,
        VideoCategory::Material,
        "Road Construction Material Filling",
        "Detailed analysis of material filling layers and volume calculations",
        "https://3dbharat.com/storage/videos/road_construction_material_filling.mp4",
        "4:20",
    ),
    video(
        3,
        VideoCategory::Merger,
        "Merger Layer Visualization",
        "Multi-layer merging and integration for unified 3D infrastructure view",
        "https://3dbharat.com/storage/videos/merger_layer.mp4",
        "2:55",
    ),
    video(
        21,
        VideoCategory::Road,
        "Rolling GPS Tracking System",
        "Roller simulation tracking with real-time GPS positioning and movement analysis",
        "https://3dbharat.com/storage/videos/Roller_Simulation_Tracking.mp4",
        "3:00",
    ),
];

/// Videos eligible for the floating showcase, in pick order.
pub const SHOWCASE_IDS: [u32; 10] = [4, 5, 6, 7, 8, 9, 1, 2, 3, 21];

pub fn video_by_id(id: u32) -> Option<&'static Video> {
    VIDEOS.iter().find(|v| v.id == id)
}

pub fn showcase_videos() -> Vec<&'static Video> {
    SHOWCASE_IDS.iter().filter_map(|&id| video_by_id(id)).collect()
}
