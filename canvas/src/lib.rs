//! Canvas-rendered 3D visuals for the Bharat 3D marketing site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Each visual
//! is a small procedural scene (point clouds, ribbons, a globe) that advances
//! with time and pointer input. Visuals emit plain [`scene::Scene`] data; the
//! renderer projects it through a perspective [`camera::Camera`] and paints it
//! with the 2D canvas API. The host page owns the animation loop and feeds
//! time, pointer, theme and viewport into an [`engine::Engine`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`visuals`] | The five visuals and the [`visuals::Visual`] trait |
//! | [`scene`] | Renderable primitives and theme-aware colors |
//! | [`camera`] | Perspective camera and screen projection |
//! | [`geometry`] | Vectors, transforms, curves and sphere helpers |
//! | [`render`] | Scene rendering to `CanvasRenderingContext2d` |
//! | [`rng`] | Deterministic seeded noise |
//! | [`consts`] | Shared numeric constants (frame timing, point sizes, etc.) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod render;
pub mod rng;
pub mod scene;
pub mod visuals;
