//! Client state modules.
//!
//! DESIGN
//! ======
//! State types are plain structs with pure transition methods. Components
//! wrap them in `RwSignal`s (the theme is also provided as context), which
//! keeps every behavior here testable without a browser.

pub mod enquiry;
pub mod gallery;
pub mod player;
pub mod slideshow;
pub mod theme;
