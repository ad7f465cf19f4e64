//! One-shot timer chains bound to reactive state.
//!
//! Each callback goes through `try_update`, so a chain stops on its own once
//! the owning component is disposed. Stale callbacks are filtered by the
//! epoch or sequence number they were scheduled with.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::state::enquiry::{EnquiryState, STATUS_CLEAR_MS};
use crate::state::player::{CONTROLS_HIDE_MS, OfficialVideoState};
use crate::state::slideshow::{AUTO_ADVANCE_MS, RESUME_DELAY_MS, Slideshow};

pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(ms, f).forget();
}

/// Advance `show` every [`AUTO_ADVANCE_MS`] while `epoch` stays current.
pub fn run_slideshow(show: RwSignal<Slideshow>, epoch: u64) {
    after(AUTO_ADVANCE_MS, move || {
        if show.try_update(|s| s.on_tick(epoch)).unwrap_or(false) {
            run_slideshow(show, epoch);
        }
    });
}

/// Restart auto-advance after a manual selection made under `epoch`.
pub fn resume_slideshow(show: RwSignal<Slideshow>, epoch: u64) {
    after(RESUME_DELAY_MS, move || {
        if show.try_with_untracked(|s| s.is_current(epoch)).unwrap_or(false) {
            run_slideshow(show, epoch);
        }
    });
}

/// Clear the enquiry status message unless a newer one replaced it.
pub fn clear_status_later(state: RwSignal<EnquiryState>, seq: u64) {
    after(STATUS_CLEAR_MS, move || {
        state.try_update(|s| s.clear_status(seq));
    });
}

/// Hide the official video controls unless the pointer moved again.
pub fn hide_controls_later(state: RwSignal<OfficialVideoState>, seq: u64) {
    after(CONTROLS_HIDE_MS, move || {
        state.try_update(|s| s.hide_controls(seq));
    });
}
