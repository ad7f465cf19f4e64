//! Copy for the home page sections.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use super::{Card, Stat};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", href: "/#home" },
    NavItem { label: "About", href: "/#about" },
    NavItem { label: "Create", href: "/#create" },
    NavItem { label: "Enquiry", href: "/#enquiry" },
];

pub const PAGE_LINKS: [NavItem; 2] = [
    NavItem { label: "Videos", href: "/videos" },
    NavItem { label: "Measurement", href: "/measurement" },
];

// ── About ───────────────────────────────────────────────────────

pub const ABOUT_FEATURES: [&str; 4] = [
    "Convert drone photos to point-cloud format",
    "Interactive 3D browser visualization",
    "Progress tracking with target comparison",
    "Precise measurement tools",
];

pub const ABOUT_USE_CASES: [Card; 2] = [
    Card {
        icon: "construction",
        title: "Road Construction Monitoring",
        description: "Measure material filling, detect deviations, and track progress with precision point-cloud analysis.",
    },
    Card {
        icon: "landmark",
        title: "Bridge & Platform Measurement",
        description: "Accurate structural inspection and dimension tracking for infrastructure projects.",
    },
];

// ── Challenges ──────────────────────────────────────────────────

pub const CHALLENGES: [Card; 4] = [
    Card {
        icon: "alert",
        title: "Scattered Information",
        description: "Project data spread across multiple sources makes tracking daily work progress difficult and time-consuming.",
    },
    Card {
        icon: "file-x",
        title: "Delayed Decision-Making",
        description: "Without real-time visibility, critical decisions are often delayed, impacting project timelines and budgets.",
    },
    Card {
        icon: "eye",
        title: "Limited Visibility",
        description: "Site visits and paper reports provide incomplete snapshots, missing crucial details for comprehensive monitoring.",
    },
    Card {
        icon: "puzzle",
        title: "Fragmented Tools",
        description: "Relying on isolated digital tools doesn't provide a complete or reliable picture of actual progress.",
    },
];

// ── Features ────────────────────────────────────────────────────

pub const DESIGN_LAYERS: [Card; 3] = [
    Card {
        icon: "layers",
        title: "Primary Frame Layer",
        description: "The main structural layout defining the core framework of your construction project.",
    },
    Card {
        icon: "box",
        title: "Material Layer",
        description: "Detailed materials and construction components mapped to each structural element.",
    },
    Card {
        icon: "ruler",
        title: "Measurement Layer",
        description: "Precise rules for quantity calculation and progress measurement standards.",
    },
];

pub const MERGER_POINTS: [&str; 4] = [
    "Real-time data synchronization",
    "Unified visual dashboard",
    "Cross-reference verification",
    "Automated discrepancy detection",
];

pub const WORKFLOW_FEATURES: [Card; 6] = [
    Card {
        icon: "calendar",
        title: "Planning & Work Targets",
        description: "Chainage-wise work targets are defined with clear timelines. Contractors are assigned tasks, and drone monitoring is planned in advance.",
    },
    Card {
        icon: "tablet",
        title: "Tablet-Based Field Entry",
        description: "Engineers record work execution using tablets. fortnightly, monthly, or quarterly. Reports are generated automatically.",
    },
    Card {
        icon: "globe",
        title: "Web-Based Drone Upload",
        description: "Drone teams upload panoramic images and 3D point cloud data through a web interface, providing visual confirmation of progress.",
    },
    Card {
        icon: "chart",
        title: "Periodic Web Monitoring",
        description: "Authorities view targets versus progress, access dashboards on web or tablet, and monitor multiple projects without site visits.",
    },
    Card {
        icon: "users",
        title: "Multi-User Management",
        description: "Role-based access for all stakeholders ensures accurate measurement, clear planning, and daily accountability.",
    },
    Card {
        icon: "shield",
        title: "Data Security",
        description: "Enterprise-grade security with encrypted data transmission and secure storage for all project information.",
    },
];

// ── Create ──────────────────────────────────────────────────────

pub const CREATE_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1504307651254-35680f356dfd?q=80&w=2070&auto=format&fit=crop";

pub const CREATE_STATS: [Stat; 4] = [
    Stat { value: "100%", label: "Digital Accountability" },
    Stat { value: "24hr", label: "Progress Visibility" },
    Stat { value: "3D", label: "Point Cloud Precision" },
    Stat { value: "Multi", label: "User Access Roles" },
];

pub const TABLET_FEATURES: [Card; 4] = [
    Card {
        icon: "tablet",
        title: "Periodic Field Entry",
        description: "Engineers record work execution using tablets with flexible entry schedules.",
    },
    Card {
        icon: "chart",
        title: "Auto Reports",
        description: "Periodic progress reports generated automatically with same-day visibility.",
    },
    Card {
        icon: "camera",
        title: "Drone Data Upload",
        description: "Panoramic images and 3D point cloud data uploaded via web interface.",
    },
    Card {
        icon: "monitor",
        title: "Web Dashboards",
        description: "Targets vs progress with multi-project monitoring capabilities.",
    },
];

// ── Enquiry ─────────────────────────────────────────────────────

pub const ENQUIRY_STATS: [Stat; 4] = [
    Stat { value: "100+", label: "Projects Monitored" },
    Stat { value: "50+", label: "Active Authorities" },
    Stat { value: "Same-Day", label: "Progress Visibility" },
    Stat { value: "24/7", label: "Web Access" },
];

// ── Footer ──────────────────────────────────────────────────────

pub const FOOTER_LINK_GROUPS: [(&str, [&str; 4]); 2] = [
    ("Platform", ["Design Framework", "Field Data Entry", "Drone Upload", "Web Monitoring"]),
    ("Solutions", ["Road Construction", "Bridge Projects", "Building Works", "Railway Infrastructure"]),
];

pub const SOCIAL_LINKS: [&str; 3] = ["LinkedIn", "Twitter", "GitHub"];

pub const COVERAGE_STATS: [Stat; 2] = [Stat { value: "500+", label: "Projects" }, Stat { value: "28", label: "States" }];

/// Public country-outline dataset used when no override is configured.
pub const DEFAULT_COUNTRIES_GEOJSON: &str =
    "https://raw.githubusercontent.com/datasets/geo-countries/master/data/countries.geojson";

/// GeoJSON country outlines for the globes. Override at build time with
/// `BHARAT3D_COUNTRIES_GEOJSON` (for example a copy under `public/`).
pub const COUNTRIES_GEOJSON: &str = match option_env!("BHARAT3D_COUNTRIES_GEOJSON") {
    Some(url) => url,
    None => DEFAULT_COUNTRIES_GEOJSON,
};
