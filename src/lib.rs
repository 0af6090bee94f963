//! # geom2d
//!
//! Axis-aligned rectangles for the 2D side of an engine: bounds tracking,
//! hit-testing and cheap intersection queries.
//!
//! ```
//! use geom2d::prelude::*;
//!
//! let mut bounds = Rectangle::new(0.0, 0.0, 10.0, 10.0);
//! assert!(bounds.contains(10.0, 10.0));
//!
//! bounds.set_right(20.0);
//! assert_eq!(bounds.width, 20.0);
//! ```
//!
//! Rectangles are plain `Copy` values. Callers that want to avoid building
//! new values in hot paths can reuse one with `Rectangle::initialize`, or
//! borrow the per-thread identity slot through `math::with_identity`.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub extern crate cgmath;

pub mod errors;
pub mod math;
pub mod prelude;
