//! Axis-aligned rectangles.
//!
//! A `Rectangle` is stored as its top-left corner plus a size. The y axis
//! grows downwards, so `bottom` is `y + height`. Nothing about the extents
//! is enforced: negative `width` or `height` are accepted and simply flow
//! through the comparisons below.

use std::fmt;

use cgmath::{Point2, Vector2};

use crate::errors::{Error, Result};

/// A rectangle with top-left corner at `(x, y)`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    /// Construct a rectangle at the origin with zero size.
    #[inline]
    pub fn zero() -> Self {
        Rectangle::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Like `new`, but rejects non-finite fields and negative extents.
    pub fn checked(x: f32, y: f32, width: f32, height: f32) -> Result<Self> {
        let rect = Rectangle::new(x, y, width, height);
        if let Err(err) = rect.validate() {
            debug!("Rejects rectangle {}: {}", rect, err);
            return Err(err);
        }

        Ok(rect)
    }

    /// Construct the smallest rectangle spanning two points.
    #[inline]
    pub fn from_points<P>(p1: P, p2: P) -> Self
    where
        P: Into<Point2<f32>>,
    {
        let (p1, p2) = (p1.into(), p2.into());
        let x = p1.x.min(p2.x);
        let y = p1.y.min(p2.y);
        Rectangle::new(x, y, p1.x.max(p2.x) - x, p1.y.max(p2.y) - y)
    }

    /// Construct the smallest rectangle spanning every point, or `None` if
    /// there are no points at all.
    pub fn bounding<I, P>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point2<f32>>,
    {
        let mut iter = points.into_iter().map(Into::<Point2<f32>>::into);
        let first = iter.next()?;
        let base = Rectangle::new(first.x, first.y, 0.0, 0.0);
        Some(iter.fold(base, |rect, p| rect.grow(p)))
    }

    /// Overwrites every field in place and hands the same rectangle back,
    /// so a single value can be recycled instead of building new ones.
    #[inline]
    pub fn initialize(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    /// The sum of `x` and `width`.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Moves the right edge to `value`. Only `width` changes.
    #[inline]
    pub fn set_right(&mut self, value: f32) {
        self.width = value - self.x;
    }

    /// The sum of `y` and `height`.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Moves the bottom edge to `value`. Only `height` changes.
    #[inline]
    pub fn set_bottom(&mut self, value: f32) {
        self.height = value - self.y;
    }

    #[inline]
    pub fn origin(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vector2<f32> {
        Vector2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Point2<f32> {
        Point2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Returns true if the rectangle covers no area. NaN extents count as empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Compute corners, in the order top-left, top-right, bottom-left and
    /// bottom-right.
    #[inline]
    pub fn corners(&self) -> [Point2<f32>; 4] {
        let (right, bottom) = (self.right(), self.bottom());
        [
            Point2::new(self.x, self.y),
            Point2::new(right, self.y),
            Point2::new(self.x, bottom),
            Point2::new(right, bottom),
        ]
    }

    /// Checks if the point `(x, y)` lies inside the rectangle. Points on the
    /// edges are inside.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.x <= x && self.x + self.width >= x && self.y <= y && self.y + self.height >= y
    }

    #[inline]
    pub fn contains_point<P>(&self, p: P) -> bool
    where
        P: Into<Point2<f32>>,
    {
        let p = p.into();
        self.contains(p.x, p.y)
    }

    /// Checks if `rhs` lies entirely inside this rectangle, edges included.
    #[inline]
    pub fn contains_rect(&self, rhs: &Rectangle) -> bool {
        self.contains(rhs.x, rhs.y) && self.contains(rhs.right(), rhs.bottom())
    }

    /// Checks if any corner of `rhs` lies inside this rectangle.
    ///
    /// This is a corner test, not a full overlap test. Two rectangles that
    /// cross each other like a plus sign have no corner inside the other and
    /// are reported as disjoint. Use `overlaps` when that matters.
    pub fn intersects(&self, rhs: &Rectangle) -> bool {
        let (right, bottom) = (rhs.right(), rhs.bottom());
        self.contains(rhs.x, rhs.y)
            || self.contains(rhs.x, bottom)
            || self.contains(right, rhs.y)
            || self.contains(right, bottom)
    }

    /// Checks if the two rectangles share any point, edges included.
    #[inline]
    pub fn overlaps(&self, rhs: &Rectangle) -> bool {
        self.x <= rhs.right()
            && rhs.x <= self.right()
            && self.y <= rhs.bottom()
            && rhs.y <= self.bottom()
    }

    /// Returns the region shared by both rectangles. Rectangles that only
    /// touch produce a zero-sized region.
    pub fn intersection(&self, rhs: &Rectangle) -> Option<Rectangle> {
        if !self.overlaps(rhs) {
            return None;
        }

        let x = self.x.max(rhs.x);
        let y = self.y.max(rhs.y);
        let right = self.right().min(rhs.right());
        let bottom = self.bottom().min(rhs.bottom());
        Some(Rectangle::new(x, y, right - x, bottom - y))
    }

    /// Returns the smallest rectangle containing both.
    pub fn union(&self, rhs: &Rectangle) -> Rectangle {
        let x = self.x.min(rhs.x);
        let y = self.y.min(rhs.y);
        let right = self.right().max(rhs.right());
        let bottom = self.bottom().max(rhs.bottom());
        Rectangle::new(x, y, right - x, bottom - y)
    }

    /// Returns a new rectangle that is grown to include the given point.
    pub fn grow<P>(&self, p: P) -> Rectangle
    where
        P: Into<Point2<f32>>,
    {
        let p = p.into();
        let x = self.x.min(p.x);
        let y = self.y.min(p.y);
        let right = self.right().max(p.x);
        let bottom = self.bottom().max(p.y);
        Rectangle::new(x, y, right - x, bottom - y)
    }

    /// Add a margin of `dx` on the left and right, and `dy` on the top and
    /// bottom.
    #[inline]
    pub fn inflate(&self, dx: f32, dy: f32) -> Rectangle {
        Rectangle::new(
            self.x - dx,
            self.y - dy,
            self.width + dx * 2.0,
            self.height + dy * 2.0,
        )
    }

    #[inline]
    pub fn translate(&self, offset: Vector2<f32>) -> Rectangle {
        Rectangle::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Checks that every field is finite and the extents are not negative.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
        ];

        for &(name, v) in &fields {
            if !v.is_finite() {
                return Err(Error::NotFinite(name, v));
            }
        }

        if self.width < 0.0 || self.height < 0.0 {
            return Err(Error::NegativeExtent(self.width, self.height));
        }

        Ok(())
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {}x{})", self.x, self.y, self.width, self.height)
    }
}

impl From<(f32, f32, f32, f32)> for Rectangle {
    fn from(v: (f32, f32, f32, f32)) -> Self {
        Rectangle::new(v.0, v.1, v.2, v.3)
    }
}

impl From<[f32; 4]> for Rectangle {
    fn from(v: [f32; 4]) -> Self {
        Rectangle::new(v[0], v[1], v[2], v[3])
    }
}
