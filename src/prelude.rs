pub use crate::errors::{Error, Result};

pub use crate::math;
pub use crate::math::{Point2, Vector2};
pub use crate::math::{identity, reset_identity, with_identity, Rectangle};
