//! Timer-driven slideshow index with manual override.
//!
//! DESIGN
//! ======
//! Timers cannot be cancelled from inside reactive updates without holding
//! browser handles in state, so every timer carries the epoch it was
//! scheduled under. Manual selection bumps the epoch, which turns any pending
//! tick into a no-op, and the host schedules a resume for the new epoch.
//!
//! TIMELINE
//! ========
//! - Auto-advance: every [`AUTO_ADVANCE_MS`], wrapping last -> first.
//! - Manual select: pause, then resume ticking after [`RESUME_DELAY_MS`].
//! - `reset(len)`: new item list (tab or category change), restart at 0.

#[cfg(test)]
#[path = "slideshow_test.rs"]
mod slideshow_test;

pub const AUTO_ADVANCE_MS: u32 = 3_000;
pub const RESUME_DELAY_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slideshow {
    len: usize,
    index: usize,
    epoch: u64,
}

impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0, epoch: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    fn step(&mut self, forward: bool) {
        if self.len == 0 {
            return;
        }
        self.index = if forward { (self.index + 1) % self.len } else { (self.index + self.len - 1) % self.len };
    }

    /// Timer callback. Advances only if `epoch` is still current; returns
    /// whether the timer chain should continue.
    pub fn on_tick(&mut self, epoch: u64) -> bool {
        if !self.is_current(epoch) || self.len == 0 {
            return false;
        }
        self.step(true);
        true
    }

    /// Jump to `index` (clamped). Returns the new epoch to resume under.
    pub fn select(&mut self, index: usize) -> u64 {
        self.index = index.min(self.len.saturating_sub(1));
        self.bump()
    }

    /// Previous arrow. Counts as a manual selection.
    pub fn show_previous(&mut self) -> u64 {
        self.step(false);
        self.bump()
    }

    /// Next arrow. Counts as a manual selection.
    pub fn show_next(&mut self) -> u64 {
        self.step(true);
        self.bump()
    }

    /// Replace the item list and start over at the first item.
    pub fn reset(&mut self, len: usize) -> u64 {
        self.len = len;
        self.index = 0;
        self.bump()
    }

    fn bump(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }
}
