//! Video gallery filtering, modal selection, and the floating showcase.
//!
//! Durations start from the catalog's nominal value and are replaced by the
//! real media length once a card's metadata loads.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::collections::HashMap;

use crate::content::videos::{VIDEOS, Video, VideoCategory, showcase_videos, video_by_id};
use crate::util::time_format::format_time;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(VideoCategory),
}

impl CategoryFilter {
    pub const TABS: [Self; 7] = [
        Self::All,
        Self::Only(VideoCategory::Railway),
        Self::Only(VideoCategory::Bridge),
        Self::Only(VideoCategory::Road),
        Self::Only(VideoCategory::Design),
        Self::Only(VideoCategory::Material),
        Self::Only(VideoCategory::Merger),
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(c) => c.id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Videos",
            Self::Only(c) => c.label(),
        }
    }

    pub fn matches(self, video: &Video) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => video.category == c,
        }
    }

    /// Number of catalog videos this tab shows.
    pub fn count(self) -> usize {
        VIDEOS.iter().filter(|v| self.matches(v)).count()
    }
}

/// Catalog videos matching `filter`, in catalog order.
pub fn filter_videos(filter: CategoryFilter) -> Vec<&'static Video> {
    VIDEOS.iter().filter(|v| filter.matches(v)).collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    pub filter: CategoryFilter,
    pub selected: Option<u32>,
    durations: HashMap<u32, String>,
}

impl GalleryState {
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn visible(&self) -> Vec<&'static Video> {
        filter_videos(self.filter)
    }

    /// Open the player modal for `id`. Unknown ids are ignored.
    pub fn open(&mut self, id: u32) -> bool {
        if video_by_id(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected_video(&self) -> Option<&'static Video> {
        self.selected.and_then(video_by_id)
    }

    /// Record a measured media length. Non-finite or non-positive values
    /// leave the nominal duration in place.
    pub fn record_duration(&mut self, id: u32, secs: f64) -> bool {
        if !secs.is_finite() || secs <= 0.0 {
            return false;
        }
        self.durations.insert(id, format_time(secs));
        true
    }

    pub fn duration_label(&self, video: &Video) -> String {
        self.durations.get(&video.id).cloned().unwrap_or_else(|| video.duration.to_owned())
    }
}

/// Pick a showcase video from a uniform sample in `[0, 1)`.
pub fn pick_showcase(random: f64) -> Option<&'static Video> {
    let videos = showcase_videos();
    if videos.is_empty() {
        return None;
    }
    let r = if random.is_finite() { random.clamp(0.0, 1.0) } else { 0.0 };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let idx = ((r * videos.len() as f64).floor() as usize).min(videos.len() - 1);
    Some(videos[idx])
}

/// The floating preview card on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShowcaseState {
    pub video_id: u32,
    pub visible: bool,
    pub playing: bool,
}

impl ShowcaseState {
    pub fn new(video_id: u32) -> Self {
        Self { video_id, visible: true, playing: true }
    }

    pub fn video(&self) -> Option<&'static Video> {
        video_by_id(self.video_id)
    }

    /// Dismiss for the rest of the page visit.
    pub fn close(&mut self) {
        self.visible = false;
        self.playing = false;
    }

    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn status_label(&self) -> &'static str {
        if self.playing { "Live Preview" } else { "Paused" }
    }
}
