//! Radial shape profiles.
//!
//! Each profile maps an azimuth `theta` in `[0, 2π)`, a polar angle `phi` in
//! `[0, π)` and a base radius `r` to the surface radius along that direction.
//! Profiles are pure: no state, no allocation.

use std::f64::consts::PI;

pub fn profile_sphere(_theta: f64, _phi: f64, r: f64) -> f64 {
    r
}

/// Box-like profile from the larger of `|sin θ|` and `|cos φ|`.
pub fn profile_cube(theta: f64, phi: f64, r: f64) -> f64 {
    r * theta.sin().abs().max(phi.cos().abs())
}

/// Tapers linearly from `r` at the north pole to zero at the south pole.
pub fn profile_cone(_theta: f64, phi: f64, r: f64) -> f64 {
    r * (1.0 - phi / PI)
}

pub fn profile_cylinder(_theta: f64, phi: f64, r: f64) -> f64 {
    r * phi.sin()
}

/// Tube of minor radius `0.3 r` wrapped around the base sphere.
pub fn profile_torus(_theta: f64, phi: f64, r: f64) -> f64 {
    r + 0.3 * r * phi.cos()
}

/// Peaks at the equator and falls to zero at both poles.
pub fn profile_parabola(_theta: f64, phi: f64, r: f64) -> f64 {
    let u = 2.0 * phi / PI - 1.0;
    r * (1.0 - u * u)
}
