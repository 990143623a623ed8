use serde::{Deserialize, Serialize};

use crate::error::{MorphError, Result};
use crate::shapes::ShapeId;

/// One-time construction parameters for a [`GeometryEngine`](crate::engine::GeometryEngine).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Nominal radius handed to every shape profile.
    pub radius: f64,
    /// Number of vertex rows produced by each rebuild.
    pub polygon_count: u32,
    pub grid_width: u32,
    pub grid_height: u32,
    /// Multiplier applied to frame time before it reaches the field clock.
    pub morph_speed: f64,
    /// When false, `update` leaves the engine untouched.
    pub dynamic_evolution: bool,
    pub initial_shape: ShapeId,
    /// Seed for the property matrix. `None` draws from system entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            radius: 50.0,
            polygon_count: 10_000,
            grid_width: 10,
            grid_height: 10,
            morph_speed: 1.0,
            dynamic_evolution: true,
            initial_shape: ShapeId::Sphere,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(MorphError::InvalidConfig(format!(
                "radius must be finite and positive, got {}",
                self.radius
            )));
        }
        if self.polygon_count == 0 {
            return Err(MorphError::InvalidConfig("polygon_count must be at least 1".into()));
        }
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(MorphError::InvalidConfig(format!(
                "grid must be non-empty, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        validate_morph_speed(self.morph_speed)
    }
}

pub(crate) fn validate_morph_speed(speed: f64) -> Result<()> {
    if speed.is_finite() && speed >= 0.0 {
        Ok(())
    } else {
        Err(MorphError::InvalidConfig(format!(
            "morph_speed must be finite and non-negative, got {speed}"
        )))
    }
}
