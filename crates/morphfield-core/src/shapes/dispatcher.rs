//! Shape identifiers and dispatch to their radial profiles.
//!
//! The set of shapes is closed: dispatch is a `match` on [`ShapeId`], and
//! names outside the set are rejected with [`MorphError::UnknownShape`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MorphError, Result};
use crate::shapes::primitives::*;

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum ShapeId {
    #[default]
    Sphere = 0,
    Cube = 1,
    Cone = 2,
    Cylinder = 3,
    Torus = 4,
    Parabola = 5,
}

impl ShapeId {
    pub const ALL: [ShapeId; 6] = [
        ShapeId::Sphere,
        ShapeId::Cube,
        ShapeId::Cone,
        ShapeId::Cylinder,
        ShapeId::Torus,
        ShapeId::Parabola,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeId::Sphere => "Sphere",
            ShapeId::Cube => "Cube",
            ShapeId::Cone => "Cone",
            ShapeId::Cylinder => "Cylinder",
            ShapeId::Torus => "Torus",
            ShapeId::Parabola => "Parabola",
        }
    }

    /// Numeric id as used by the binding layer (declaration order).
    pub fn from_index(index: u32) -> Result<ShapeId> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| MorphError::UnknownShape(format!("#{index}")))
    }

    /// Surface radius of this shape at `(theta, phi)` for base radius `r`.
    #[inline]
    pub fn radius(self, theta: f64, phi: f64, r: f64) -> f64 {
        match self {
            ShapeId::Sphere => profile_sphere(theta, phi, r),
            ShapeId::Cube => profile_cube(theta, phi, r),
            ShapeId::Cone => profile_cone(theta, phi, r),
            ShapeId::Cylinder => profile_cylinder(theta, phi, r),
            ShapeId::Torus => profile_torus(theta, phi, r),
            ShapeId::Parabola => profile_parabola(theta, phi, r),
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeId {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.name() == s)
            .ok_or_else(|| MorphError::UnknownShape(s.to_string()))
    }
}
