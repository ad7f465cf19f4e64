//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and delegates rendering details to
//! `components`. Every page shares the navbar and footer.

pub mod home;
pub mod measurement;
pub mod videos;
