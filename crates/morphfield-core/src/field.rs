use serde::{Deserialize, Serialize};

use crate::properties::PropertyCell;
use crate::shapes::{MorphState, ShapeId};

/// Simulation clock plus the current shape/blend state.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ScalarField {
    /// Seconds of evolution, scaled by the morph speed. Never decreases.
    pub time: f64,
    pub morph: MorphState,
}

impl ScalarField {
    pub fn new(initial: ShapeId) -> Self {
        Self {
            time: 0.0,
            morph: MorphState::new(initial),
        }
    }

    /// Dynamic radius along `(theta, phi)`; see [`evaluate`].
    #[inline]
    pub fn radius_at(&self, theta: f64, phi: f64, cell: &PropertyCell, base_radius: f64) -> f64 {
        evaluate(theta, phi, cell, self.time, base_radius, &self.morph)
    }
}

/// Evaluate the scalar field for one direction.
///
/// The base radius comes from the current shape, or from a linear blend of
/// the two shapes' radii while a transition is active. The cell then adds a
/// time-varying ripple:
///
/// ```text
/// sin(θ·rugosity + t)·anisotropy·10 + cos(φ·sphericity + t)·convexity·5
/// ```
///
/// The result is not clamped and may exceed `base_radius` or go negative.
#[inline]
pub fn evaluate(
    theta: f64,
    phi: f64,
    cell: &PropertyCell,
    time: f64,
    base_radius: f64,
    morph: &MorphState,
) -> f64 {
    let base = morph.radius(theta, phi, base_radius);
    base + modulation(theta, phi, cell, time)
}

#[inline]
fn modulation(theta: f64, phi: f64, cell: &PropertyCell, time: f64) -> f64 {
    (theta * cell.rugosity + time).sin() * cell.anisotropy * 10.0
        + (phi * cell.sphericity + time).cos() * cell.convexity * 5.0
}
