//! Shape-morphing point-cloud geometry.
//!
//! A [`GeometryEngine`] evaluates a radial scalar field over a 1-D sweep of
//! spherical angles, modulated by a grid of surface properties, and emits a
//! per-vertex attribute buffer each frame. Shapes blend linearly over a
//! configurable duration when a morph is requested.

pub mod attributes;
pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod math;
pub mod properties;
pub mod shapes;

pub use attributes::VertexAttributes;
pub use config::EngineConfig;
pub use engine::{EngineSnapshot, GeometryEngine};
pub use error::{MorphError, Result};
pub use field::ScalarField;
pub use properties::{PropertyCell, PropertyMatrix};
pub use shapes::{MorphState, MorphTransition, ShapeId};
