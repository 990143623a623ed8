/// Shape profile library and the morph state machine.
///
/// Six closed-form radial profiles, an enum dispatcher over them, and the
/// timed linear blend used when switching between two shapes.
pub mod primitives;
pub mod dispatcher;
pub mod morph;

pub use dispatcher::ShapeId;
pub use morph::{MorphState, MorphTransition};
