//! The identity rectangle.
//!
//! Every thread owns one scratch `Rectangle` that code can use to hand a
//! rectangle back to its caller without building a new one. It starts out
//! zeroed and keeps whatever the last writer left in it. Since it is
//! thread-local, threads never observe each other's writes.
//!
//! ```
//! use geom2d::math;
//!
//! math::with_identity(|rect| {
//!     rect.initialize(1.0, 2.0, 3.0, 4.0);
//! })
//! .unwrap();
//!
//! assert_eq!(math::identity().unwrap().right(), 4.0);
//! ```

use std::cell::RefCell;

use super::rect::Rectangle;
use crate::errors::{Error, Result};

thread_local! {
    static IDENTITY: RefCell<Rectangle> = RefCell::new(Rectangle::zero());
}

/// Runs `func` with exclusive access to the identity rectangle of the
/// current thread.
///
/// Calling this again from inside `func` is refused with
/// `Error::IdentityInUse`.
pub fn with_identity<F, R>(func: F) -> Result<R>
where
    F: FnOnce(&mut Rectangle) -> R,
{
    IDENTITY.with(|cell| match cell.try_borrow_mut() {
        Ok(mut rect) => Ok(func(&mut rect)),
        Err(_) => {
            warn!("The identity rectangle is re-entered while it is borrowed.");
            Err(Error::IdentityInUse)
        }
    })
}

/// Returns a copy of the identity rectangle of the current thread.
pub fn identity() -> Result<Rectangle> {
    IDENTITY.with(|cell| match cell.try_borrow() {
        Ok(rect) => Ok(*rect),
        Err(_) => Err(Error::IdentityInUse),
    })
}

/// Zeroes the identity rectangle of the current thread.
pub fn reset_identity() -> Result<()> {
    with_identity(|rect| {
        rect.initialize(0.0, 0.0, 0.0, 0.0);
    })
}
