//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the marketing sections, media players, and decorative
//! canvases. The only shared state they read from context is the theme.

pub mod about;
pub mod challenges;
pub mod common;
pub mod create;
pub mod enquiry;
pub mod features;
pub mod footer;
pub mod hero;
pub mod lightbox;
pub mod navbar;
pub mod official_video;
pub mod progress_bar;
pub mod scene_host;
pub mod slideshow;
pub mod video_modal;
pub mod video_showcase;
