//! Shared numeric constants for the canvas crate.

// ── Timing ──────────────────────────────────────────────────────

/// Reference frame rate used to convert per-frame easing factors into
/// frame-rate independent rates.
pub const REFERENCE_FPS: f64 = 60.0;

/// Largest time step a single tick may integrate, in seconds. Longer gaps
/// (background tabs, debugger pauses) are clamped to this.
pub const MAX_TICK_SECS: f64 = 0.25;

// ── Projection ──────────────────────────────────────────────────

/// Near clipping distance in world units; points closer to the eye are culled.
pub const NEAR_PLANE: f64 = 0.05;

/// Smallest on-screen point size in CSS pixels.
pub const MIN_POINT_PX: f64 = 0.6;

/// Largest on-screen point size in CSS pixels.
pub const MAX_POINT_PX: f64 = 12.0;

// ── Pointer ─────────────────────────────────────────────────────

/// Normalized pointer coordinates are clamped to `[-POINTER_LIMIT, POINTER_LIMIT]`.
pub const POINTER_LIMIT: f64 = 1.0;
