use std::f64::consts::{PI, TAU};

use glam::DVec3;

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Angles swept by vertex `index` out of `count`.
///
/// Both angles advance together (`θ = 2π·i/n`, `φ = π·i/n`), so the buffer
/// traces a single spiral through the domain rather than a uniform sampling
/// of the sphere. Renderers depend on this exact ordering.
#[inline]
pub fn vertex_angles(index: usize, count: usize) -> (f64, f64) {
    let t = index as f64 / count as f64;
    (TAU * t, PI * t)
}

/// Map a normalised coordinate to a cell index, clamped into `[0, len - 1]`.
#[inline]
pub fn cell_index(normalised: f64, len: usize) -> usize {
    let raw = (normalised * len as f64).floor();
    if raw.is_nan() || raw < 0.0 {
        0
    } else {
        (raw as usize).min(len.saturating_sub(1))
    }
}

/// Spherical to Cartesian with `z` as the polar axis.
#[inline]
pub fn spherical_to_cartesian(radius: f64, theta: f64, phi: f64) -> DVec3 {
    let (sin_t, cos_t) = theta.sin_cos();
    let (sin_p, cos_p) = phi.sin_cos();
    DVec3::new(radius * sin_p * cos_t, radius * sin_p * sin_t, radius * cos_p)
}
