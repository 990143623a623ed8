use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::attributes::{rebuild, VertexAttributes};
use crate::config::{validate_morph_speed, EngineConfig};
use crate::error::{MorphError, Result};
use crate::field::ScalarField;
use crate::properties::PropertyMatrix;
use crate::shapes::{MorphTransition, ShapeId};

/// Read-only view of the engine state handed to observers (UI, HUD).
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub current_shape: ShapeId,
    pub time: f64,
    pub transition: Option<MorphTransition>,
    pub dynamic_evolution: bool,
    pub morph_speed: f64,
    pub vertex_count: usize,
}

/// Owns the property matrix, the scalar field and the attribute buffer.
///
/// Driven once per frame through [`update`](Self::update); shape changes come
/// in through [`request_morph`](Self::request_morph). Nothing is shared
/// outside the engine except read-only borrows and snapshots.
pub struct GeometryEngine {
    config: EngineConfig,
    matrix: PropertyMatrix,
    field: ScalarField,
    attributes: Vec<VertexAttributes>,
}

impl GeometryEngine {
    /// Validate `config`, generate the property matrix and build the first buffer.
    pub fn configure(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let (w, h) = (config.grid_width as usize, config.grid_height as usize);
        let matrix = match config.seed {
            Some(seed) => PropertyMatrix::from_seed(w, h, seed)?,
            None => PropertyMatrix::from_entropy(w, h)?,
        };
        Self::with_matrix(config, matrix)
    }

    /// Same as [`configure`](Self::configure) with a caller-supplied matrix.
    ///
    /// The matrix dimensions must match `grid_width × grid_height`.
    pub fn with_matrix(config: EngineConfig, matrix: PropertyMatrix) -> Result<Self> {
        config.validate()?;
        if matrix.width() != config.grid_width as usize || matrix.height() != config.grid_height as usize {
            return Err(MorphError::InvalidConfig(format!(
                "matrix is {}x{} but config asks for {}x{}",
                matrix.width(),
                matrix.height(),
                config.grid_width,
                config.grid_height
            )));
        }

        let field = ScalarField::new(config.initial_shape);
        let attributes = rebuild(&config, &matrix, &field)?;

        info!(
            polygons = config.polygon_count,
            grid_width = config.grid_width,
            grid_height = config.grid_height,
            shape = %config.initial_shape,
            seeded = config.seed.is_some(),
            "geometry engine configured"
        );

        Ok(Self {
            config,
            matrix,
            field,
            attributes,
        })
    }

    /// Advance one frame of `dt` seconds.
    ///
    /// With evolution enabled: the clock moves by `dt · morph_speed`, the
    /// transition ticks by `dt`, and the buffer is rebuilt. With evolution
    /// disabled nothing changes. The advanced field and the new buffer are
    /// committed together: on a failed rebuild both the clock and the buffer
    /// stay at the previous frame, so a later call can succeed.
    pub fn update(&mut self, dt: f64) -> Result<()> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(MorphError::InvalidConfig(format!(
                "frame delta must be finite and non-negative, got {dt}"
            )));
        }
        if !self.config.dynamic_evolution {
            return Ok(());
        }

        let mut next = self.field;
        next.time += dt * self.config.morph_speed;
        next.morph.tick(dt);
        self.commit(next)
    }

    /// Rebuild the buffer at the current time without advancing anything.
    pub fn rebuild(&mut self) -> Result<()> {
        self.commit(self.field)
    }

    fn commit(&mut self, field: ScalarField) -> Result<()> {
        match rebuild(&self.config, &self.matrix, &field) {
            Ok(attributes) => {
                self.field = field;
                self.attributes = attributes;
                Ok(())
            }
            Err(err) => {
                warn!(time = field.time, "rebuild failed, keeping previous frame: {err}");
                Err(err)
            }
        }
    }

    pub fn request_morph(&mut self, target: ShapeId, duration: f64) -> Result<()> {
        self.field.morph.request_morph(target, duration)
    }

    pub fn request_morph_named(&mut self, target: &str, duration: f64) -> Result<()> {
        self.field.morph.request_morph_named(target, duration)
    }

    pub fn set_dynamic_evolution(&mut self, enabled: bool) {
        self.config.dynamic_evolution = enabled;
    }

    pub fn set_morph_speed(&mut self, speed: f64) -> Result<()> {
        validate_morph_speed(speed)?;
        self.config.morph_speed = speed;
        Ok(())
    }

    /// Buffer from the most recent successful rebuild.
    pub fn current_attributes(&self) -> &[VertexAttributes] {
        &self.attributes
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            current_shape: self.field.morph.current_shape(),
            time: self.field.time,
            transition: self.field.morph.transition().copied(),
            dynamic_evolution: self.config.dynamic_evolution,
            morph_speed: self.config.morph_speed,
            vertex_count: self.attributes.len(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn matrix(&self) -> &PropertyMatrix {
        &self.matrix
    }

    pub fn field(&self) -> &ScalarField {
        &self.field
    }
}
