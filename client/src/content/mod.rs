//! Static copy and media catalogs.
//!
//! Everything here is an immutable literal created at compile time. Counts
//! shown in the UI (category tabs, header badges) are derived from these
//! tables rather than written out by hand.

pub mod measurements;
pub mod sections;
pub mod videos;

/// Watermark shown over video players.
pub const LOGO_WATERMARK: &str = "/images/mtss_logo_2.png";

/// A titled card with an icon name (rendered as `icon icon-{name}`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline figure with a caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}
