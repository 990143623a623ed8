//! Per-vertex attribute buffer.
//!
//! Every rebuild sweeps all `polygon_count` vertex indices from scratch:
//! angles from the index, a property cell from the angles, a radius from the
//! scalar field, then a Cartesian position and the cell-derived rendering
//! attributes.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::{MorphError, Result};
use crate::field::ScalarField;
use crate::math::{spherical_to_cartesian, vertex_angles};
use crate::properties::{PropertyCell, PropertyMatrix};

/// One row of the attribute buffer.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct VertexAttributes {
    pub position: DVec3,
    pub mass: f64,
    pub charge: f64,
    pub symmetry_index: u32,
    pub light_reflectivity: f64,
    pub light_absorption: f64,
    pub valency: u32,
    pub volume: f64,
    pub density: f64,
    pub orientation: DVec3,
}

impl VertexAttributes {
    /// Attach the cell-derived attributes to `position`.
    pub fn from_cell(position: DVec3, cell: &PropertyCell) -> Self {
        Self {
            position,
            mass: 10.0 + cell.sphericity * 5.0,
            charge: (cell.rugosity - 0.5) * 2.0,
            symmetry_index: (cell.axis_symmetry * 8.0).floor() as u32,
            light_reflectivity: 0.3 + cell.smoothness * 0.5,
            light_absorption: 0.2 + cell.edge_sharpness * 0.3,
            valency: (cell.local_connectivity * 4.0).floor() as u32,
            volume: 10.0 + cell.density_gradient * 10.0,
            density: 0.2 + cell.rigidity * 0.3,
            orientation: DVec3::Y,
        }
    }
}

/// Compute row `index` of the buffer.
///
/// Fails when the field yields a non-finite radius or position.
pub fn vertex_row(
    index: usize,
    count: usize,
    base_radius: f64,
    matrix: &PropertyMatrix,
    field: &ScalarField,
) -> Result<VertexAttributes> {
    let (theta, phi) = vertex_angles(index, count);
    let cell = matrix.cell_at_angles(theta, phi);
    let radius = field.radius_at(theta, phi, cell, base_radius);
    if !radius.is_finite() {
        return Err(MorphError::Rebuild {
            index,
            reason: format!("non-finite radius {radius}"),
        });
    }
    let position = spherical_to_cartesian(radius, theta, phi);
    if !position.is_finite() {
        return Err(MorphError::Rebuild {
            index,
            reason: format!("non-finite position {position}"),
        });
    }
    Ok(VertexAttributes::from_cell(position, cell))
}

/// Rebuild the whole buffer.
///
/// Returns a fresh vector of exactly `config.polygon_count` rows, or an error
/// for a failing row. The sequential sweep reports the lowest failing index;
/// with `parallel` any failing row may be reported. Callers keep their
/// previous buffer on error.
pub fn rebuild(config: &EngineConfig, matrix: &PropertyMatrix, field: &ScalarField) -> Result<Vec<VertexAttributes>> {
    let count = config.polygon_count as usize;
    let radius = config.radius;

    #[cfg(feature = "parallel")]
    let rows: Result<Vec<VertexAttributes>> = (0..count)
        .into_par_iter()
        .map(|i| vertex_row(i, count, radius, matrix, field))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let rows: Result<Vec<VertexAttributes>> = (0..count)
        .map(|i| vertex_row(i, count, radius, matrix, field))
        .collect();

    rows
}
