//! Graphics rendering functions
//!
//! This module provides functions for drawing shapes on RGB images:
//! - Lines (Bresenham, 8-connected)
//! - Boxes (rectangle outlines)
//! - Polylines (open or closed)
//! - Text (bitmap font, see [`super::font`])
//!
//! Shapes are first generated as point lists and then rendered. Rendering
//! clips points that fall outside the image; the destination must be a
//! 3-channel 8-bit image.

use super::Pix;
use super::font;
use crate::error::Result;
use crate::geom::{Point, Rect};
use log::{debug, trace};

/// RGB color for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Red color
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    /// Green color
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    /// Blue color
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    /// Samples in buffer order (R, G, B)
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

// =============================================================================
// Point generation
// =============================================================================

/// Generate the points of a line using Bresenham's integer algorithm.
///
/// The line connects `p1` to `p2` (both inclusive) with 8-connectivity.
pub fn generate_line_pts(p1: Point, p2: Point) -> Vec<Point> {
    if p1 == p2 {
        return vec![p1];
    }

    let dx = (p2.x - p1.x).abs();
    let dy = (p2.y - p1.y).abs();
    let sx = if p2.x > p1.x { 1i32 } else { -1 };
    let sy = if p2.y > p1.y { 1i32 } else { -1 };

    let npts = dx.max(dy) + 1;
    let mut pts = Vec::with_capacity(npts as usize);

    let mut x = p1.x;
    let mut y = p1.y;

    if dx >= dy {
        // Step along x (more horizontal)
        let mut err = dx / 2;
        for _ in 0..npts {
            pts.push(Point::new(x, y));
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
        }
    } else {
        // Step along y (more vertical)
        let mut err = dy / 2;
        for _ in 0..npts {
            pts.push(Point::new(x, y));
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
        }
    }

    pts
}

/// Generate the outline of a rectangle, one pixel wide.
///
/// The outline runs along the first and last row and column covered by
/// `rect`; an empty rectangle produces no points.
pub fn generate_box_pts(rect: &Rect) -> Vec<Point> {
    if rect.is_empty() {
        return Vec::new();
    }
    let (x0, y0) = (rect.x as i64, rect.y as i64);
    let (x1, y1) = (x0 + rect.w as i64 - 1, y0 + rect.h as i64 - 1);
    outline_pts((x0, y0, x1, y1), (x0, y0, x1, y1))
}

/// Outline of the inclusive box `(x0, y0, x1, y1)`, keeping only the part
/// inside the inclusive `clip` box.
///
/// Edges are cut to `clip` before any point is generated, so the cost is
/// bounded by the clip region rather than by the box.
fn outline_pts(corners: (i64, i64, i64, i64), clip: (i64, i64, i64, i64)) -> Vec<Point> {
    let (x0, y0, x1, y1) = corners;
    let (cx0, cy0, cx1, cy1) = clip;
    let (left, right) = (x0.max(cx0), x1.min(cx1));
    let (top, bottom) = (y0.max(cy0), y1.min(cy1));
    let mut pts = Vec::new();
    if left > right || top > bottom {
        return pts;
    }

    let rows = if y1 > y0 { vec![y0, y1] } else { vec![y0] };
    for y in rows.into_iter().filter(|y| (cy0..=cy1).contains(y)) {
        pts.extend((left..=right).map(|x| Point::new(x as i32, y as i32)));
    }
    // Sides, excluding corners already covered
    let (side_top, side_bottom) = ((y0 + 1).max(cy0), (y1 - 1).min(cy1));
    let cols = if x1 > x0 { vec![x0, x1] } else { vec![x0] };
    for x in cols.into_iter().filter(|x| (cx0..=cx1).contains(x)) {
        pts.extend((side_top..=side_bottom).map(|y| Point::new(x as i32, y as i32)));
    }
    pts
}

/// Generate the points of a polyline connecting `vertices`.
///
/// If `close` is true, the last vertex is connected back to the first.
/// Shared vertices between segments appear once.
pub fn generate_polyline_pts(vertices: &[Point], close: bool) -> Vec<Point> {
    match vertices {
        [] => Vec::new(),
        [only] => vec![*only],
        _ => {
            let mut pts = Vec::new();
            let closing = close.then(|| (vertices[vertices.len() - 1], vertices[0]));
            let segments = vertices
                .windows(2)
                .map(|w| (w[0], w[1]))
                .chain(closing);
            for (a, b) in segments {
                let line = generate_line_pts(a, b);
                // drop the start point, it ends the previous segment
                let skip = usize::from(!pts.is_empty());
                pts.extend(line.into_iter().skip(skip));
            }
            pts
        }
    }
}

// =============================================================================
// Pix rendering implementations
// =============================================================================

impl Pix {
    /// Render a point list with a specific RGB color.
    ///
    /// Points outside the image bounds are clipped. Returns the number of
    /// points actually written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnsupportedFormat`] unless the image is
    /// 3-channel 8-bit.
    pub fn render_pts_color(&mut self, pts: &[Point], color: Color) -> Result<usize> {
        self.require_rgb8()?;
        let mut written = 0;
        for p in pts {
            if self.contains(p.x as i64, p.y as i64) {
                self.set_rgb(p.x, p.y, color)?;
                written += 1;
            }
        }
        trace!("render {} points, {} inside {}x{}", pts.len(), written, self.width, self.height);
        Ok(written)
    }

    /// Render a line with a specific color.
    pub fn render_line_color(&mut self, p1: Point, p2: Point, color: Color) -> Result<()> {
        let pts = generate_line_pts(p1, p2);
        self.render_pts_color(&pts, color).map(|_| ())
    }

    /// Render a rectangle outline with a specific color.
    ///
    /// The outline is cut to the image before it is generated, so a
    /// rectangle far larger than the image costs no more than the image
    /// perimeter.
    pub fn render_box_color(&mut self, rect: &Rect, color: Color) -> Result<()> {
        self.require_rgb8()?;
        if rect.is_empty() {
            return Ok(());
        }
        let (x0, y0) = (rect.x as i64, rect.y as i64);
        let (x1, y1) = (x0 + rect.w as i64 - 1, y0 + rect.h as i64 - 1);
        self.render_outline(x0, y0, x1, y1, color)
    }

    /// Render the outline of the box spanned by two inclusive corners.
    ///
    /// The corners may be given in any order; a box whose corners coincide
    /// is a single pixel. Clipped like [`Pix::render_box_color`].
    pub fn render_rect_color(&mut self, p1: Point, p2: Point, color: Color) -> Result<()> {
        self.require_rgb8()?;
        let (x0, x1) = (p1.x.min(p2.x) as i64, p1.x.max(p2.x) as i64);
        let (y0, y1) = (p1.y.min(p2.y) as i64, p1.y.max(p2.y) as i64);
        self.render_outline(x0, y0, x1, y1, color)
    }

    fn render_outline(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) -> Result<()> {
        let image = (0, 0, self.width as i64 - 1, self.height as i64 - 1);
        let pts = outline_pts((x0, y0, x1, y1), image);
        self.render_pts_color(&pts, color).map(|_| ())
    }

    /// Render a polyline with a specific color.
    ///
    /// If `close` is true, the last vertex is connected to the first.
    pub fn render_polyline_color(
        &mut self,
        vertices: &[Point],
        close: bool,
        color: Color,
    ) -> Result<()> {
        let pts = generate_polyline_pts(vertices, close);
        self.render_pts_color(&pts, color).map(|_| ())
    }

    /// Render text with the built-in bitmap font.
    ///
    /// `origin` is the bottom-left corner of the first glyph. Each glyph
    /// cell is scaled by `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidParameter`] for a zero `scale` and
    /// [`crate::Error::UnsupportedFormat`] for a non-RGB image.
    pub fn render_text(
        &mut self,
        text: &str,
        origin: Point,
        scale: u32,
        color: Color,
    ) -> Result<()> {
        let pts = font::generate_text_pts(text, origin, scale)?;
        debug!("render text {:?} at ({}, {}), scale {}", text, origin.x, origin.y, scale);
        self.render_pts_color(&pts, color).map(|_| ())
    }
}
