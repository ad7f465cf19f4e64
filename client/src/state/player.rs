//! Video player state shared by the gallery modal and the official video.
//!
//! The media element stays the source of truth for time and duration; these
//! structs mirror what it reports and compute the targets handed back to it.

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

/// Skip distance for the modal's back/forward buttons.
pub const SKIP_SECS: f64 = 10.0;

/// Idle time before the official video's controls hide while playing.
pub const CONTROLS_HIDE_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerState {
    pub playing: bool,
    pub muted: bool,
    pub fullscreen: bool,
    pub current_time: f64,
    pub duration: f64,
}

impl PlayerState {
    fn known_duration(&self) -> Option<f64> {
        (self.duration.is_finite() && self.duration > 0.0).then_some(self.duration)
    }

    /// Playback position in percent, `0` until the duration is known.
    pub fn progress_percent(&self) -> f64 {
        match self.known_duration() {
            Some(d) if self.current_time.is_finite() => (self.current_time / d * 100.0).clamp(0.0, 100.0),
            _ => 0.0,
        }
    }

    pub fn on_time_update(&mut self, current_time: f64, duration: f64) {
        self.current_time = current_time;
        self.duration = duration;
    }

    pub fn on_metadata(&mut self, duration: f64) {
        self.duration = duration;
    }

    /// Position after skipping `delta` seconds, clamped to the media bounds.
    pub fn skip_target(&self, delta: f64) -> f64 {
        let target = (self.current_time + delta).max(0.0);
        self.known_duration().map_or(target, |d| target.min(d))
    }

    /// Position for a click at `fraction` of the progress bar.
    pub fn seek_target(&self, fraction: f64) -> Option<f64> {
        self.known_duration().map(|d| fraction.clamp(0.0, 1.0) * d)
    }

    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn play_label(&self) -> &'static str {
        if self.playing { "Pause" } else { "Play" }
    }

    pub fn mute_label(&self) -> &'static str {
        if self.muted { "Unmute" } else { "Mute" }
    }
}

/// Fraction of a bar's width at horizontal `offset`, clamped to `[0, 1]`.
pub fn click_fraction(offset: f64, width: f64) -> f64 {
    if !(width > 0.0) || !offset.is_finite() {
        return 0.0;
    }
    (offset / width).clamp(0.0, 1.0)
}

/// The official presentation video on the home page.
///
/// Starts playing and muted. Controls show on pointer activity and hide
/// after [`CONTROLS_HIDE_MS`] without activity, but only while playing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OfficialVideoState {
    pub player: PlayerState,
    pub overlay_open: bool,
    controls_visible: bool,
    interaction_seq: u64,
}

impl Default for OfficialVideoState {
    fn default() -> Self {
        Self {
            player: PlayerState { playing: true, muted: true, ..PlayerState::default() },
            overlay_open: false,
            controls_visible: true,
            interaction_seq: 0,
        }
    }
}

impl OfficialVideoState {
    /// Pointer activity. Returns the sequence number a hide timer must carry.
    pub fn interact(&mut self) -> u64 {
        self.controls_visible = true;
        self.interaction_seq += 1;
        self.interaction_seq
    }

    /// Hide timer callback. Ignored if paused or superseded.
    pub fn hide_controls(&mut self, seq: u64) -> bool {
        if !self.player.playing || seq != self.interaction_seq {
            return false;
        }
        self.controls_visible = false;
        true
    }

    /// Whether the control bar is on screen.
    pub fn controls_shown(&self) -> bool {
        self.controls_visible && self.player.playing
    }

    /// Play/pause from the controls; counts as activity.
    pub fn toggle_play(&mut self) -> u64 {
        self.player.toggle_play();
        self.interact()
    }

    /// Open the fullscreen overlay. The inline video keeps playing behind it.
    pub fn open_overlay(&mut self) {
        self.overlay_open = true;
        self.player.playing = true;
    }

    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
    }
}
