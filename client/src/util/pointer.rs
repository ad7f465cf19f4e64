//! Viewport pointer normalization.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

/// Map client coordinates to `[-1, 1]` on both axes with y pointing up.
/// A degenerate viewport yields the center.
pub fn normalize_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
    if !(width > 0.0 && height > 0.0) {
        return (0.0, 0.0);
    }
    let x = (client_x / width) * 2.0 - 1.0;
    let y = -(client_y / height) * 2.0 + 1.0;
    (finite_clamp(x), finite_clamp(y))
}

fn finite_clamp(v: f64) -> f64 {
    if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 }
}
