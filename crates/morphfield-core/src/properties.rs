use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{MorphError, Result};
use crate::math::cell_index;

/// Surface descriptors for one grid cell.
///
/// All values are unit-range or small positive scalars. Only `anisotropy`
/// and `rugosity` are drawn at random; the rest start from the constants in
/// [`PropertyCell::with_random`].
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct PropertyCell {
    // Geometric
    pub anisotropy: f64,
    pub sphericity: f64,
    pub rugosity: f64,
    pub convexity: f64,
    pub smoothness: f64,
    pub edge_sharpness: f64,
    pub curvature: f64,
    pub planarity: f64,
    pub elongation: f64,
    // Symmetry
    pub axis_symmetry: f64,
    pub rotation_symmetry: f64,
    pub translation_symmetry: f64,
    pub mirror_symmetry: f64,
    pub radial_symmetry: f64,
    // Topological
    pub euler_characteristic: f64,
    pub local_connectivity: f64,
    pub density_gradient: f64,
    pub rigidity: f64,
    pub porosity: f64,
    pub genus: f64,
    pub boundary_ratio: f64,
    pub compactness: f64,
}

impl PropertyCell {
    /// Cell with the given stochastic fields and constant defaults elsewhere.
    pub fn with_random(anisotropy: f64, rugosity: f64) -> Self {
        Self {
            anisotropy,
            sphericity: 1.0,
            rugosity,
            convexity: 1.0,
            smoothness: 1.0,
            edge_sharpness: 0.0,
            curvature: 0.5,
            planarity: 0.5,
            elongation: 0.5,
            axis_symmetry: 1.0,
            rotation_symmetry: 1.0,
            translation_symmetry: 0.0,
            mirror_symmetry: 1.0,
            radial_symmetry: 1.0,
            euler_characteristic: 1.0,
            local_connectivity: 1.0,
            density_gradient: 0.5,
            rigidity: 1.0,
            porosity: 0.0,
            genus: 0.0,
            boundary_ratio: 0.0,
            compactness: 1.0,
        }
    }
}

impl Default for PropertyCell {
    fn default() -> Self {
        Self::with_random(0.0, 0.0)
    }
}

/// Fixed-size `width × height` grid of [`PropertyCell`], row-major.
///
/// Built once and never resized. Lookups clamp each coordinate
/// independently, so every query resolves to a real cell.
#[derive(Clone, PartialEq, Debug)]
pub struct PropertyMatrix {
    width: usize,
    height: usize,
    cells: Vec<PropertyCell>,
}

impl PropertyMatrix {
    /// Build from a per-cell closure `f(x, y)`, visiting rows in order.
    ///
    /// Fails with [`MorphError::InvalidConfig`] when either dimension is zero.
    pub fn from_fn<F: FnMut(usize, usize) -> PropertyCell>(width: usize, height: usize, mut f: F) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidConfig(format!(
                "property matrix needs non-zero dimensions, got {width}x{height}"
            )));
        }
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Ok(Self { width, height, cells })
    }

    /// Populate from `rng`, drawing anisotropy then rugosity for each cell.
    pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Self> {
        Self::from_fn(width, height, |_, _| {
            let anisotropy = rng.gen::<f64>();
            let rugosity = rng.gen::<f64>();
            PropertyCell::with_random(anisotropy, rugosity)
        })
    }

    /// Reproducible matrix for a given seed.
    pub fn from_seed(width: usize, height: usize, seed: u64) -> Result<Self> {
        Self::generate(width, height, &mut StdRng::seed_from_u64(seed))
    }

    /// Matrix drawn from system entropy; differs on every call.
    pub fn from_entropy(width: usize, height: usize) -> Result<Self> {
        Self::generate(width, height, &mut StdRng::from_entropy())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[PropertyCell] {
        &self.cells
    }

    /// Cell at `(x, y)`, with each coordinate clamped to the grid.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> &PropertyCell {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        &self.cells[y * self.width + x]
    }

    /// Cell covering the direction `(theta, phi)`.
    ///
    /// `theta` spans the width over `[0, 2π)`, `phi` the height over `[0, π)`.
    #[inline]
    pub fn cell_at_angles(&self, theta: f64, phi: f64) -> &PropertyCell {
        let x = cell_index(theta / std::f64::consts::TAU, self.width);
        let y = cell_index(phi / std::f64::consts::PI, self.height);
        self.cell(x, y)
    }
}
