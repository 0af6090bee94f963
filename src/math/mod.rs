//! Geometry types used by the 2D side of the engine, on top of the vector
//! math that comes from `cgmath`.

pub use cgmath::*;

pub mod rect;
pub use self::rect::Rectangle;

pub mod scratch;
pub use self::scratch::{identity, reset_identity, with_identity};
