//! Coverage globe: graticule sphere with Indian city markers, pulsing
//! propagation rings and animated arcs radiating from New Delhi.
//!
//! DESIGN
//! ======
//! Country outlines are optional. The host fetches a GeoJSON country
//! collection, [`parse_countries`] reduces it to simplified outer rings, and
//! [`Visual::set_outlines`] hands them over. Until then (or if the fetch
//! fails) the globe renders without coastlines.
//!
//! Hidden-surface removal is done here rather than in the renderer: any
//! vertex on the far hemisphere relative to the eye is dropped, splitting
//! polylines into visible runs.

use std::f64::consts::{PI, TAU};

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::camera::{Camera, Point};
use crate::geometry::{Euler, Transform, Vec3, circle, globe_arc, lat_lng_to_vec};
use crate::scene::{Blend, Dash, Glow, PointColors, PointLayer, Polyline, Rgb, Scene, Theme};

use super::Visual;

#[cfg(test)]
#[path = "globe_test.rs"]
mod globe_test;

pub const GLOBE_RADIUS: f64 = 2.0;

/// Yaw that turns India toward the camera.
pub const INITIAL_YAW: f64 = -PI * 0.43;

/// Idle spin in radians per second (0.001 per frame at 60 fps).
pub const SPIN_RATE: f64 = 0.06;

/// Outline rings are decimated to at most this many vertices.
pub const MAX_RING_POINTS: usize = 64;

const CAMERA_DISTANCE: f64 = 5.0;
const POINT_ALTITUDE: f64 = 0.03;
const ARC_ALTITUDE: f64 = 0.1;
const ARC_SEGMENTS: usize = 48;
const ARC_DASH_SECS: f64 = 2.0;
const RING_MAX_DEG: f64 = 3.0;
const RING_SPEED_DEG: f64 = 2.0;
const RING_PERIOD_SECS: f64 = 1.5;
const RING_SEGMENTS: usize = 32;
const GRATICULE_STEP_DEG: i32 = 30;

const HIGHLIGHT_COUNTRY: &str = "India";
const ACCENT: Rgb = Rgb::hex(0xff_6b35);

/// A city marker on the globe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    /// Marker radius in globe-surface degrees.
    pub size: f64,
}

/// Cities plotted on the globe. The first entry is the arc hub.
pub const INDIAN_CITIES: [City; 9] = [
    City { name: "New Delhi", lat: 28.6139, lng: 77.209, size: 0.8 },
    City { name: "Mumbai", lat: 19.076, lng: 72.8777, size: 0.7 },
    City { name: "Chennai", lat: 13.0827, lng: 80.2707, size: 0.5 },
    City { name: "Kolkata", lat: 22.5726, lng: 88.3639, size: 0.6 },
    City { name: "Bangalore", lat: 12.9716, lng: 77.5946, size: 0.6 },
    City { name: "Hyderabad", lat: 17.385, lng: 78.4867, size: 0.5 },
    City { name: "Ahmedabad", lat: 23.0225, lng: 72.5714, size: 0.4 },
    City { name: "Pune", lat: 18.5204, lng: 73.8567, size: 0.4 },
    City { name: "Jaipur", lat: 26.9124, lng: 75.7873, size: 0.4 },
];

// =============================================================
// Country outlines
// =============================================================

/// Simplified outline of one country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryOutline {
    pub name: String,
    /// Outer rings as `(lat, lng)` degrees.
    pub rings: Vec<Vec<(f64, f64)>>,
}

impl CountryOutline {
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.name == HIGHLIGHT_COUNTRY
    }
}

#[derive(Debug, Error)]
pub enum GeoJsonError {
    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("GeoJSON has no feature collection")]
    NotACollection,
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Option<Vec<Feature>>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<Value>,
}

fn property<'a>(props: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|k| props.get(*k).and_then(Value::as_str))
}

/// Parse `[[lng, lat, ...], ...]` into `(lat, lng)` pairs, decimated.
fn parse_ring(ring: &Value) -> Option<Vec<(f64, f64)>> {
    let coords = ring.as_array()?;
    let step = coords.len().div_ceil(MAX_RING_POINTS).max(1);
    let points: Vec<(f64, f64)> = coords
        .iter()
        .step_by(step)
        .filter_map(|c| {
            let pair = c.as_array()?;
            let lng = pair.first()?.as_f64()?;
            let lat = pair.get(1)?.as_f64()?;
            Some((lat, lng))
        })
        .collect();
    (points.len() >= 3).then_some(points)
}

fn outer_rings(geometry: &Value) -> Vec<Vec<(f64, f64)>> {
    let coords = geometry.get("coordinates");
    match geometry.get("type").and_then(Value::as_str) {
        Some("Polygon") => coords
            .and_then(Value::as_array)
            .and_then(|rings| rings.first())
            .and_then(parse_ring)
            .into_iter()
            .collect(),
        Some("MultiPolygon") => coords
            .and_then(Value::as_array)
            .map(|polys| {
                polys
                    .iter()
                    .filter_map(|poly| poly.as_array().and_then(|rings| rings.first()).and_then(parse_ring))
                    .collect()
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Parse a GeoJSON country collection into simplified outlines.
///
/// Antarctica is dropped. Features without a polygon geometry or a name are
/// skipped rather than rejected.
///
/// # Errors
///
/// Returns [`GeoJsonError`] if the text is not JSON or has no `features` array.
pub fn parse_countries(json: &str) -> Result<Vec<CountryOutline>, GeoJsonError> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    let features = collection.features.ok_or(GeoJsonError::NotACollection)?;

    let mut outlines = Vec::new();
    for feature in features {
        let props = feature.properties.unwrap_or_default();
        let iso = property(&props, &["ISO_A2", "ISO3166-1-Alpha-2", "iso_a2"]).unwrap_or_default();
        let Some(name) = property(&props, &["ADMIN", "name", "NAME"]) else {
            continue;
        };
        if iso == "AQ" || name == "Antarctica" {
            continue;
        }
        let rings = feature.geometry.as_ref().map(outer_rings).unwrap_or_default();
        if !rings.is_empty() {
            outlines.push(CountryOutline { name: name.to_owned(), rings });
        }
    }
    Ok(outlines)
}

// =============================================================
// Visibility
// =============================================================

/// True when `p` faces the eye, i.e. lies on the near side of the sphere.
#[must_use]
pub fn faces_eye(p: Vec3, eye: Vec3) -> bool {
    p.dot(eye) > p.dot(p)
}

/// Split a polyline into runs of consecutive visible vertices.
#[must_use]
pub fn visible_runs(points: &[Vec3], eye: Vec3, closed: bool) -> Vec<Vec<Vec3>> {
    if closed && points.iter().all(|&p| faces_eye(p, eye)) {
        let mut run = points.to_vec();
        run.extend(points.first().copied());
        return if run.len() >= 3 { vec![run] } else { Vec::new() };
    }
    let mut runs: Vec<Vec<Vec3>> = Vec::new();
    let mut current = Vec::new();
    for &p in points {
        if faces_eye(p, eye) {
            current.push(p);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        // A closed loop that wraps through the start joins its last and first runs.
        if closed && !runs.is_empty() && points.first().is_some_and(|&p| faces_eye(p, eye)) {
            let head = runs.remove(0);
            current.extend(head);
        }
        runs.push(current);
    }
    runs.retain(|run| run.len() >= 2);
    runs
}

// =============================================================
// Rings
// =============================================================

/// Angular radius (degrees) and opacity of a city's propagation ring at `t`.
#[must_use]
pub fn ring_state(t: f64) -> (f64, f64) {
    let age = t.rem_euclid(RING_PERIOD_SECS);
    let radius = (age * RING_SPEED_DEG).min(RING_MAX_DEG);
    (radius, 1.0 - radius / RING_MAX_DEG)
}

/// Small circle of `radius_deg` around a surface direction.
fn surface_circle(center: Vec3, radius_deg: f64, globe_radius: f64) -> Vec<Vec3> {
    let c = center.normalize();
    let mut e1 = c.cross(Vec3::UP).normalize();
    if e1 == Vec3::ZERO {
        e1 = Vec3::new(1.0, 0.0, 0.0);
    }
    let e2 = c.cross(e1);
    let (sa, ca) = radius_deg.to_radians().sin_cos();
    (0..RING_SEGMENTS)
        .map(|k| {
            let b = TAU * k as f64 / RING_SEGMENTS as f64;
            (c * ca + (e1 * b.cos() + e2 * b.sin()) * sa) * globe_radius
        })
        .collect()
}

// =============================================================
// Visual
// =============================================================

/// Slowly spinning globe centered on India.
pub struct Globe {
    outlines: Vec<CountryOutline>,
    yaw: f64,
    elapsed: f64,
}

impl Default for Globe {
    fn default() -> Self {
        Self::new()
    }
}

impl Globe {
    #[must_use]
    pub fn new() -> Self {
        Self { outlines: Vec::new(), yaw: INITIAL_YAW, elapsed: 0.0 }
    }

    #[must_use]
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    #[must_use]
    pub fn outlines(&self) -> &[CountryOutline] {
        &self.outlines
    }

    fn eye(&self) -> Vec3 {
        self.camera().position
    }

    fn push_runs(&self, scene: &mut Scene, points: &[Vec3], closed: bool, template: &Polyline) {
        for run in visible_runs(points, self.eye(), closed) {
            scene.polylines.push(Polyline { points: run, closed: false, ..template.clone() });
        }
    }
}

impl Visual for Globe {
    fn tick(&mut self, elapsed: f64, _pointer: Point) {
        self.elapsed = elapsed;
        self.yaw = INITIAL_YAW + elapsed * SPIN_RATE;
    }

    fn scene(&self, theme: Theme) -> Scene {
        let t = self.elapsed;
        let spin = Transform::rotation(Euler::new(0.0, self.yaw, 0.0));
        let eye = self.eye();
        let mut scene = Scene::new();

        scene.glows.push(Glow {
            center: Vec3::ZERO,
            radius: GLOBE_RADIUS * 1.15,
            color: Rgb::hex(0x3a_8ee6),
            opacity: theme.pick(0.35, 0.25),
            blend: Blend::Normal,
        });

        // Body: the silhouette circle seen from the eye.
        let d = eye.length();
        let sil_radius = GLOBE_RADIUS * (1.0 - (GLOBE_RADIUS / d).powi(2)).sqrt();
        let sil_offset = GLOBE_RADIUS * GLOBE_RADIUS / d;
        let body_color = Rgb::hex(0x0b_1a33);
        let body = circle(sil_radius, 96)
            .into_iter()
            .map(|p| p + Vec3::new(0.0, 0.0, sil_offset))
            .collect();
        scene.polylines.push(Polyline { fill: Some(body_color), ..Polyline::stroke(body, true, body_color, 0.95, 1.0) });

        let grid = Polyline::stroke(Vec::new(), false, Rgb::hex(0x2b_4c7e), theme.pick(0.5, 0.35), 0.75);
        for lat in (-60..=60).step_by(GRATICULE_STEP_DEG as usize) {
            let ring: Vec<Vec3> = (0..=72)
                .map(|k| spin.apply(lat_lng_to_vec(f64::from(lat), f64::from(k * 5 - 180), GLOBE_RADIUS)))
                .collect();
            self.push_runs(&mut scene, &ring, false, &grid);
        }
        for lng in (-180..180).step_by(GRATICULE_STEP_DEG as usize) {
            let meridian: Vec<Vec3> = (0..=36)
                .map(|k| spin.apply(lat_lng_to_vec(f64::from(k * 5 - 90), f64::from(lng), GLOBE_RADIUS)))
                .collect();
            self.push_runs(&mut scene, &meridian, false, &grid);
        }

        for outline in &self.outlines {
            let (color, width, lift) = if outline.is_highlighted() {
                (Rgb::hex(0xff_aa80), 1.5, 1.02)
            } else {
                (Rgb::hex(0x44_4444), 0.75, 1.006)
            };
            for ring in &outline.rings {
                let pts: Vec<Vec3> = ring
                    .iter()
                    .map(|&(lat, lng)| spin.apply(lat_lng_to_vec(lat, lng, GLOBE_RADIUS * lift)))
                    .collect();
                if outline.is_highlighted() && pts.iter().all(|&p| faces_eye(p, eye)) {
                    scene.polylines.push(Polyline {
                        fill: Some(ACCENT),
                        ..Polyline::stroke(pts, true, color, 0.9, width)
                    });
                } else {
                    self.push_runs(&mut scene, &pts, true, &Polyline::stroke(Vec::new(), false, color, 0.8, width));
                }
            }
        }

        let (ring_deg, ring_alpha) = ring_state(t);
        let ring_template = Polyline::stroke(Vec::new(), false, ACCENT, ring_alpha, 1.25);
        for city in &INDIAN_CITIES {
            let center = spin.apply(lat_lng_to_vec(city.lat, city.lng, 1.0));
            let ring = surface_circle(center, ring_deg.max(0.05), GLOBE_RADIUS * 1.005);
            self.push_runs(&mut scene, &ring, true, &ring_template);
        }

        let hub = INDIAN_CITIES[0];
        let phase = (t / ARC_DASH_SECS).rem_euclid(1.0);
        let arc_template = Polyline {
            dash: Some(Dash { on: 0.5, off: 0.2, phase }),
            blend: Blend::Additive,
            ..Polyline::stroke(Vec::new(), false, ACCENT, 0.9, 1.25)
        };
        for city in INDIAN_CITIES.iter().skip(1) {
            let arc: Vec<Vec3> = globe_arc((hub.lat, hub.lng), (city.lat, city.lng), GLOBE_RADIUS, ARC_ALTITUDE, ARC_SEGMENTS)
                .into_iter()
                .map(|p| spin.apply(p))
                .collect();
            self.push_runs(&mut scene, &arc, false, &arc_template);
        }

        for city in &INDIAN_CITIES {
            let p = spin.apply(lat_lng_to_vec(city.lat, city.lng, GLOBE_RADIUS * (1.0 + POINT_ALTITUDE)));
            if faces_eye(p, eye) {
                scene.points.push(PointLayer {
                    positions: vec![p],
                    colors: PointColors::Uniform(Rgb::new(255, 255, 255)),
                    size: city.size.to_radians() * GLOBE_RADIUS * 2.0,
                    opacity: 1.0,
                    blend: Blend::Normal,
                });
            }
        }

        scene
    }

    fn camera(&self) -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, CAMERA_DISTANCE), 50.0)
    }

    fn set_outlines(&mut self, outlines: Vec<CountryOutline>) {
        self.outlines = outlines;
    }
}
