//! Deterministic pseudo-random helpers.
//!
//! Every decorative visual builds its geometry from these functions so the
//! server-rendered placeholder and the hydrated canvas agree, and so tests can
//! pin exact layouts. Both variants return values in `[0, 1)`.

#[cfg(test)]
#[path = "rng_test.rs"]
mod rng_test;

/// `fract(sin(seed) * 10000)`.
#[must_use]
pub fn seeded(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    x - x.floor()
}

/// Same generator with the seed stretched by 9999 first. Used where nearby
/// integer seeds must decorrelate more aggressively.
#[must_use]
pub fn seeded_wide(seed: f64) -> f64 {
    seeded(seed * 9999.0)
}
