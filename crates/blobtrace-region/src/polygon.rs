//! Vertex polygons
//!
//! A [`Polygon`] is an ordered vertex list. Closure is implicit: the last
//! vertex connects back to the first. Polygons are normally produced by
//! [`crate::ChainCodeContour::to_polygon`].

use crate::error::{RegionError, RegionResult};
use blobtrace_core::{Color, Pix, Point, Rect};
use log::debug;

/// Ordered list of integer vertices of a closed outline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Create an empty polygon
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a polygon with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a polygon from a vertex list
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Add a vertex
    #[inline]
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Get the number of vertices
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get a vertex by index
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Get the vertices as a slice
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over the vertices
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Consume the polygon, returning its vertices
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Iterate over the edges, including the closing edge
    fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Enclosed area (shoelace formula, always non-negative)
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let twice: i128 = self
            .edges()
            .map(|(a, b)| a.x as i128 * b.y as i128 - b.x as i128 * a.y as i128)
            .sum();
        twice.abs() as f64 / 2.0
    }

    /// Euclidean length of the closed outline
    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.edges().map(|(a, b)| a.distance(b)).sum()
    }

    /// Bounding rectangle of the vertices, `None` if empty
    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::covering(self.points.iter().copied())
    }

    /// Simplify the closed outline with the Douglas-Peucker algorithm.
    ///
    /// The ring is split at the vertex farthest from the first one, and
    /// each half is simplified so that no removed vertex lies farther than
    /// `tolerance` from the kept outline. Polygons with fewer than three
    /// vertices are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if `tolerance` is
    /// negative or not finite.
    pub fn simplify(&self, tolerance: f64) -> RegionResult<Polygon> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(RegionError::InvalidParameters(format!(
                "simplify tolerance must be finite and non-negative, got {}",
                tolerance
            )));
        }
        let n = self.points.len();
        if n < 3 {
            return Ok(self.clone());
        }

        let pt = |i: usize| self.points[i % n];
        let first = pt(0);
        let mut split = 0;
        let mut split_dist = -1.0;
        for (i, p) in self.points.iter().enumerate().skip(1) {
            let d = first.distance(*p);
            if d > split_dist {
                split_dist = d;
                split = i;
            }
        }

        let mut keep = vec![false; n];
        keep[0] = true;
        keep[split] = true;
        let mut stack = vec![(0, split), (split, n)];
        while let Some((a, b)) = stack.pop() {
            if b - a < 2 {
                continue;
            }
            let (pa, pb) = (pt(a), pt(b));
            let mut far = a;
            let mut far_dist = -1.0;
            for i in a + 1..b {
                let d = distance_to_segment(pt(i), pa, pb);
                if d > far_dist {
                    far_dist = d;
                    far = i;
                }
            }
            if far_dist > tolerance {
                keep[far % n] = true;
                stack.push((a, far));
                stack.push((far, b));
            }
        }

        let points: Vec<Point> = self
            .points
            .iter()
            .zip(&keep)
            .filter_map(|(p, &k)| k.then_some(*p))
            .collect();
        debug!("simplify polygon: {} -> {} vertices", n, points.len());
        Ok(Polygon { points })
    }

    /// Convex hull of the vertices (Andrew's monotone chain).
    ///
    /// Duplicate and collinear vertices are dropped. The hull starts at
    /// the smallest `(x, y)` vertex and runs with the lower chain first.
    pub fn convex_hull(&self) -> Polygon {
        let mut pts = self.points.clone();
        pts.sort();
        pts.dedup();
        if pts.len() < 3 {
            return Polygon { points: pts };
        }

        let mut lower = half_hull(pts.iter().copied());
        let mut upper = half_hull(pts.iter().rev().copied());
        lower.pop();
        upper.pop();
        lower.append(&mut upper);
        Polygon { points: lower }
    }

    /// Draw the closed outline, clipping at the image edge.
    ///
    /// # Errors
    ///
    /// Returns a core [`blobtrace_core::Error::UnsupportedFormat`] unless
    /// `pix` is 3-channel 8-bit.
    pub fn render(&self, pix: &mut Pix, color: Color) -> RegionResult<()> {
        debug!("render polygon: {} vertices", self.points.len());
        pix.render_polyline_color(&self.points, true, color)?;
        Ok(())
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Z component of `(b - a) x (c - a)`
fn cross(a: Point, b: Point, c: Point) -> i64 {
    let d = |p: i32, q: i32| p as i64 - q as i64;
    d(b.x, a.x) * d(c.y, a.y) - d(b.y, a.y) * d(c.x, a.x)
}

/// One chain of the monotone-chain hull over pre-sorted points
fn half_hull(sorted: impl Iterator<Item = Point>) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::new();
    for p in sorted {
        while chain.len() >= 2 && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0 {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

/// Distance from `p` to the segment `a`-`b`
fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (abx, aby) = (b.x as f64 - a.x as f64, b.y as f64 - a.y as f64);
    let len_sq = abx * abx + aby * aby;
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let (apx, apy) = (p.x as f64 - a.x as f64, p.y as f64 - a.y as f64);
    let t = ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0);
    let (dx, dy) = (apx - t * abx, apy - t * aby);
    dx.hypot(dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::from_points(vec![
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(4, 4),
            Point::new(0, 4),
        ])
    }

    #[test]
    fn test_area_and_perimeter() {
        let sq = square();
        assert_eq!(sq.area(), 16.0);
        assert_eq!(sq.perimeter(), 16.0);

        let tri = Polygon::from_points(vec![Point::new(0, 0), Point::new(3, 0), Point::new(0, 4)]);
        assert_eq!(tri.area(), 6.0);
        assert!((tri.perimeter() - 12.0).abs() < 1e-9);

        // orientation does not change the area sign
        let reversed: Polygon = sq.iter().rev().copied().collect();
        assert_eq!(reversed.area(), 16.0);
    }

    #[test]
    fn test_degenerate_measures() {
        let single = Polygon::from_points(vec![Point::new(2, 2)]);
        assert_eq!(single.area(), 0.0);
        assert_eq!(single.perimeter(), 0.0);
        // a two-vertex polygon is an out-and-back segment
        let seg = Polygon::from_points(vec![Point::new(0, 0), Point::new(3, 4)]);
        assert_eq!(seg.perimeter(), 10.0);
        assert!(Polygon::new().bounding_box().is_none());
    }

    #[test]
    fn test_bounding_box() {
        assert_eq!(square().bounding_box(), Some(Rect::new_unchecked(0, 0, 5, 5)));
    }

    #[test]
    fn test_simplify_drops_near_collinear() {
        let poly = Polygon::from_points(vec![
            Point::new(0, 0),
            Point::new(5, 1),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ]);
        let coarse = poly.simplify(2.0).unwrap();
        assert_eq!(
            coarse.points(),
            &[
                Point::new(0, 0),
                Point::new(10, 0),
                Point::new(10, 10),
                Point::new(0, 10)
            ]
        );
        let exact = poly.simplify(0.0).unwrap();
        assert_eq!(exact, poly);
    }

    #[test]
    fn test_simplify_rejects_bad_tolerance() {
        assert!(square().simplify(-1.0).is_err());
        assert!(square().simplify(f64::NAN).is_err());
    }

    #[test]
    fn test_convex_hull() {
        let mut pts = square().into_points();
        pts.push(Point::new(2, 2));
        pts.push(Point::new(2, 0));
        pts.push(Point::new(4, 4));
        let hull = Polygon::from_points(pts).convex_hull();
        assert_eq!(hull.len(), 4);
        assert_eq!(hull.get(0), Some(Point::new(0, 0)));
        for corner in square().iter() {
            assert!(hull.iter().any(|p| p == corner));
        }
        assert_eq!(hull.area(), 16.0);
    }

    #[test]
    fn test_extreme_coordinates() {
        let wide = Polygon::from_points(vec![
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MAX, i32::MIN),
            Point::new(i32::MAX, i32::MAX),
            Point::new(0, 0),
            Point::new(i32::MIN, i32::MAX),
        ]);
        // (0, 0) lies inside the hull
        let hull = wide.convex_hull();
        assert_eq!(hull.len(), 4);
        let side = u32::MAX as f64;
        assert!((hull.area() / (side * side) - 1.0).abs() < 1e-9);
        assert!((hull.perimeter() / (4.0 * side) - 1.0).abs() < 1e-9);
        assert_eq!(wide.simplify(1.0).unwrap().len(), 5);
    }

    #[test]
    fn test_render_closed_outline() {
        let mut pix = Pix::new_rgb(6, 6).unwrap();
        square().render(&mut pix, Color::BLUE).unwrap();
        assert_eq!(pix.get_rgb(0, 2), Some(Color::BLUE));
        assert_eq!(pix.get_rgb(4, 4), Some(Color::BLUE));
        assert_eq!(pix.get_rgb(2, 2), Some(Color::BLACK));
    }
}
