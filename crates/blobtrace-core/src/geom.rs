//! Point, PointF, Rect - Integer and floating-point geometry
//!
//! Small `Copy` value types shared by contours, polygons, label maps and
//! track records. Coordinates follow image conventions: x grows to the
//! right, y grows downward.

use crate::error::{Error, Result};

/// An integer pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Point {
    /// Create a new point
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Add offset to create new point
    ///
    /// Coordinates saturate at the `i32` range.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// A floating-point coordinate, used for sub-pixel centroids
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    /// Create a new point
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Nearest integer pixel, rounding half away from zero.
    pub fn round(self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        Self::new(p.x as f64, p.y as f64)
    }
}

/// A rectangle region
///
/// Used both as a bounding box and as a region-of-interest offset.
/// `w` and `h` are exclusive extents: the rectangle covers
/// `x..x + w` by `y..y + h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "rect dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a rectangle without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Smallest rectangle covering every point, `None` for an empty set.
    pub fn covering<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in iter {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new_unchecked(
            min_x,
            min_y,
            extent(min_x, max_x),
            extent(min_y, max_y),
        ))
    }

    /// Get the right x coordinate (exclusive), saturating at `i32::MAX`
    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Get the bottom y coordinate (exclusive), saturating at `i32::MAX`
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Check if the rectangle is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

/// Inclusive span `lo..=hi` as a width, clamped to `i32::MAX`
fn extent(lo: i32, hi: i32) -> i32 {
    i32::try_from(hi as i64 - lo as i64 + 1).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_creation() {
        let r = Rect::new(10, 20, 100, 50).unwrap();
        assert_eq!(r.right(), 110);
        assert_eq!(r.bottom(), 70);
        assert_eq!(r.area(), 5000);

        assert!(Rect::new(0, 0, -1, 10).is_err());
    }

    #[test]
    fn test_extreme_coordinates_saturate() {
        let p = Point::new(i32::MAX, i32::MIN).offset(1, -1);
        assert_eq!(p, Point::new(i32::MAX, i32::MIN));
        let d = Point::new(i32::MIN, 0).distance(Point::new(i32::MAX, 0));
        assert_eq!(d, u32::MAX as f64);

        let wide = Rect::covering([Point::new(i32::MIN, 0), Point::new(i32::MAX, 0)]).unwrap();
        assert_eq!(wide.w, i32::MAX);
        assert_eq!(wide.right(), i32::MAX);
    }

    #[test]
    fn test_rect_covering() {
        let pts = [Point::new(3, 4), Point::new(-1, 6), Point::new(2, 2)];
        let r = Rect::covering(pts).unwrap();
        assert_eq!(r, Rect::new_unchecked(-1, 2, 5, 5));
        assert!(Rect::covering(std::iter::empty()).is_none());
    }

    #[test]
    fn test_point_distance_and_round() {
        assert_eq!(Point::new(0, 0).distance(Point::new(3, 4)), 5.0);
        assert_eq!(PointF::new(2.5, -1.4).round(), Point::new(3, -1));
    }
}
