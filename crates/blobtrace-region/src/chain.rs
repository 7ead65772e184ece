//! Chain-code contours
//!
//! A blob boundary is stored as a starting pixel plus the ordered list of
//! unit moves that walk around it (a Freeman chain code). From that
//! representation this module derives the collapsed vertex polygon, the
//! metric perimeter and the rendered boundary.

use crate::error::{RegionError, RegionResult};
use crate::polygon::Polygon;
use blobtrace_core::{Color, Pix, Point, Rect};
use log::debug;
use std::f64::consts::SQRT_2;

/// Unit move between 8-connected pixels (y grows downward)
///
/// Variants are listed clockwise starting at North; the discriminant is the
/// Freeman code value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// North (0, -1)
    North = 0,
    /// Northeast (1, -1)
    NorthEast = 1,
    /// East (1, 0)
    East = 2,
    /// Southeast (1, 1)
    SouthEast = 3,
    /// South (0, 1)
    South = 4,
    /// Southwest (-1, 1)
    SouthWest = 5,
    /// West (-1, 0)
    West = 6,
    /// Northwest (-1, -1)
    NorthWest = 7,
}

impl Direction {
    /// All 8 directions in code order
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Get the (dx, dy) displacement of this direction
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Get the x offset for this direction
    #[inline]
    pub const fn dx(self) -> i32 {
        self.offset().0
    }

    /// Get the y offset for this direction
    #[inline]
    pub const fn dy(self) -> i32 {
        self.offset().1
    }

    /// Get direction from x,y offsets
    pub fn from_offset(dx: i32, dy: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.offset() == (dx, dy))
    }

    /// Get the Freeman code value (0-7)
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether this move changes both coordinates.
    ///
    /// Decided from the displacement itself, not from the code value.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        let (dx, dy) = self.offset();
        dx.abs() + dy.abs() == 2
    }

    /// Euclidean length of one step: `√2` for diagonals, `1` otherwise
    #[inline]
    pub fn step_length(self) -> f64 {
        if self.is_diagonal() { SQRT_2 } else { 1.0 }
    }

    /// The reverse move
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    /// Apply this move to a point
    #[inline]
    pub fn step(self, from: Point) -> Point {
        let (dx, dy) = self.offset();
        from.offset(dx, dy)
    }
}

impl TryFrom<u8> for Direction {
    type Error = RegionError;

    fn try_from(code: u8) -> RegionResult<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.code() == code)
            .ok_or_else(|| {
                RegionError::InvalidParameters(format!("chain code must be 0..=7, got {}", code))
            })
    }
}

/// Closed boundary described as a start point and a sequence of moves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainCodeContour {
    /// Point where the contour begins
    pub start: Point,
    /// Moves in walk order
    pub codes: Vec<Direction>,
}

impl ChainCodeContour {
    /// Create an empty contour at `start`
    pub fn new(start: Point) -> Self {
        Self {
            start,
            codes: Vec::new(),
        }
    }

    /// Create a contour from an existing code sequence
    pub fn with_codes(start: Point, codes: Vec<Direction>) -> Self {
        Self { start, codes }
    }

    /// Build a contour from consecutive boundary pixels.
    ///
    /// The first point becomes the start. An empty slice yields an empty
    /// contour at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if two consecutive
    /// points are not 8-neighbours.
    pub fn from_points(points: &[Point]) -> RegionResult<Self> {
        let start = points.first().copied().unwrap_or_default();
        let codes = points
            .windows(2)
            .enumerate()
            .map(|(i, w)| {
                Direction::from_offset(w[1].x - w[0].x, w[1].y - w[0].y).ok_or_else(|| {
                    RegionError::InvalidParameters(format!(
                        "points {} ({}, {}) and {} ({}, {}) are not 8-neighbours",
                        i,
                        w[0].x,
                        w[0].y,
                        i + 1,
                        w[1].x,
                        w[1].y
                    ))
                })
            })
            .collect::<RegionResult<Vec<_>>>()?;
        Ok(Self { start, codes })
    }

    /// Append a move
    #[inline]
    pub fn push(&mut self, dir: Direction) {
        self.codes.push(dir);
    }

    /// Get the number of moves
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the contour has no moves
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Positions visited by the walk: the start, then the position after
    /// every move (`len() + 1` points).
    pub fn walk(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.start).chain(self.codes.iter().scan(self.start, |cursor, dir| {
            *cursor = dir.step(*cursor);
            Some(*cursor)
        }))
    }

    /// Position reached after the last move
    pub fn end_point(&self) -> Point {
        self.codes.iter().fold(self.start, |p, dir| dir.step(p))
    }

    /// Smallest rectangle covering every walked position
    pub fn bounding_box(&self) -> Rect {
        Rect::covering(self.walk()).unwrap_or(Rect::new_unchecked(self.start.x, self.start.y, 1, 1))
    }

    /// Convert to a polygon by collapsing runs of identical moves.
    ///
    /// The polygon starts with `start`; a vertex is added at the current
    /// position each time the move differs from the previous one. The end
    /// of the final run is not stored, so a single run (including a single
    /// move) yields just the start point.
    pub fn to_polygon(&self) -> Polygon {
        let mut polygon = Polygon::with_capacity(1);
        polygon.push(self.start);

        let Some(&first) = self.codes.first() else {
            return polygon;
        };

        let mut cursor = self.start;
        let mut last = first;
        for &dir in &self.codes {
            if dir != last {
                polygon.push(cursor);
                last = dir;
            }
            cursor = dir.step(cursor);
        }
        polygon
    }

    /// Boundary length: 1 per orthogonal move, √2 per diagonal move.
    pub fn perimeter(&self) -> f64 {
        self.codes.iter().map(|d| d.step_length()).sum()
    }

    /// Draw the boundary pixels.
    ///
    /// The pixel under the cursor is marked before each move, giving
    /// exactly `len()` marks; an empty contour draws nothing. All mark
    /// positions are checked before anything is written, so on error the
    /// image is unchanged.
    ///
    /// # Errors
    ///
    /// Returns a core [`blobtrace_core::Error::UnsupportedFormat`] unless
    /// `pix` is 3-channel 8-bit, and
    /// [`blobtrace_core::Error::PixelOutOfBounds`] if the walk leaves the
    /// image.
    pub fn render(&self, pix: &mut Pix, color: Color) -> RegionResult<()> {
        pix.require_rgb8()?;

        // Walk in i64 so a contour near the i32 limits reports out of bounds
        let mut marks = Vec::with_capacity(self.codes.len());
        let (mut x, mut y) = (self.start.x as i64, self.start.y as i64);
        for dir in &self.codes {
            pix.check_bounds(x, y)?;
            marks.push(Point::new(x as i32, y as i32));
            x += dir.dx() as i64;
            y += dir.dy() as i64;
        }

        debug!(
            "render contour at ({}, {}): {} marks",
            self.start.x,
            self.start.y,
            marks.len()
        );
        for p in marks {
            pix.set_rgb(p.x, p.y, color)?;
        }
        Ok(())
    }

    /// Draw the boundary pixels in white. See [`ChainCodeContour::render`].
    pub fn render_default(&self, pix: &mut Pix) -> RegionResult<()> {
        self.render(pix, Color::WHITE)
    }
}
