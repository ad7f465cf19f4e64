//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, media elements,
//! timers) from component logic. Pure helpers build everywhere; browser
//! calls are gated on the `hydrate` feature.

pub mod dark_mode;
#[cfg(feature = "hydrate")]
pub mod media;
pub mod pointer;
pub mod time_format;
#[cfg(feature = "hydrate")]
pub mod timers;
