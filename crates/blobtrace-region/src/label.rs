//! Label grids with a region of interest
//!
//! A [`LabelMap`] stores one `u32` label per cell (0 = background) in a
//! single row-major buffer. The region of interest is an indexing offset,
//! not a crop: [`LabelMap::get`] and [`LabelMap::set`] shift `(row, col)`
//! by the ROI origin, while [`LabelMap::raw_get`] and
//! [`LabelMap::raw_set`] address the backing grid directly. Both paths are
//! bounds-checked against the full grid.

use crate::error::{RegionError, RegionResult};
use blobtrace_core::{Color, Pix, Point, Rect};
use log::debug;

/// Label value used for background cells
pub const BACKGROUND: u32 = 0;

/// Grid of blob labels with a region-of-interest offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    rows: usize,
    cols: usize,
    values: Vec<u32>,
    roi: Rect,
}

impl LabelMap {
    /// Create a background-filled grid whose ROI covers the whole grid
    pub fn new(rows: usize, cols: usize) -> Self {
        let roi = Rect::new_unchecked(0, 0, saturate(cols), saturate(rows));
        Self::with_roi(rows, cols, roi)
    }

    /// Create a background-filled grid with the given ROI
    pub fn with_roi(rows: usize, cols: usize, roi: Rect) -> Self {
        Self {
            rows,
            cols,
            values: vec![BACKGROUND; rows * cols],
            roi,
        }
    }

    /// Wrap an existing row-major label buffer
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if `values.len()` is not
    /// `rows * cols`.
    pub fn from_values(rows: usize, cols: usize, values: Vec<u32>) -> RegionResult<Self> {
        if values.len() != rows * cols {
            return Err(RegionError::InvalidParameters(format!(
                "label buffer has {} values, expected {}x{} = {}",
                values.len(),
                rows,
                cols,
                rows * cols
            )));
        }
        Ok(Self {
            rows,
            cols,
            values,
            roi: Rect::new_unchecked(0, 0, saturate(cols), saturate(rows)),
        })
    }

    /// Build a grid from nested rows
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if the rows differ in
    /// length.
    pub fn from_rows(rows: &[Vec<u32>]) -> RegionResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(RegionError::InvalidParameters(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                cols
            )));
        }
        Self::from_values(rows.len(), cols, rows.concat())
    }

    /// Number of rows in the backing grid
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the backing grid
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Current region of interest
    #[inline]
    pub fn roi(&self) -> Rect {
        self.roi
    }

    /// Replace the region of interest
    pub fn set_roi(&mut self, roi: Rect) {
        self.roi = roi;
    }

    /// Backing labels in row-major order
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    fn index(&self, row: i64, col: i64) -> RegionResult<usize> {
        if row < 0 || col < 0 || row >= self.rows as i64 || col >= self.cols as i64 {
            return Err(RegionError::LabelOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row as usize * self.cols + col as usize)
    }

    fn roi_index(&self, row: usize, col: usize) -> RegionResult<usize> {
        let row = row as i64 + self.roi.y as i64;
        let col = col as i64 + self.roi.x as i64;
        self.index(row, col)
    }

    /// Read a backing cell, ignoring the ROI
    pub fn raw_get(&self, row: usize, col: usize) -> RegionResult<u32> {
        let idx = self.index(row as i64, col as i64)?;
        Ok(self.values[idx])
    }

    /// Write a backing cell, ignoring the ROI
    pub fn raw_set(&mut self, row: usize, col: usize, value: u32) -> RegionResult<()> {
        let idx = self.index(row as i64, col as i64)?;
        self.values[idx] = value;
        Ok(())
    }

    /// Read the cell at `(row, col)` relative to the ROI origin
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::LabelOutOfBounds`] when the shifted cell
    /// falls outside the backing grid.
    pub fn get(&self, row: usize, col: usize) -> RegionResult<u32> {
        let idx = self.roi_index(row, col)?;
        Ok(self.values[idx])
    }

    /// Write the cell at `(row, col)` relative to the ROI origin
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> RegionResult<()> {
        let idx = self.roi_index(row, col)?;
        self.values[idx] = value;
        Ok(())
    }

    /// Bounding rectangle of every cell carrying `label`, in grid coordinates
    ///
    /// `x` is the column and `y` the row. Returns `None` when the label does
    /// not occur.
    pub fn label_bounds(&self, label: u32) -> Option<Rect> {
        let cols = self.cols.max(1);
        let cells = self
            .values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == label)
            .map(|(i, _)| Point::new(saturate(i % cols), saturate(i / cols)));
        Rect::covering(cells)
    }

    /// Number of non-background cells
    pub fn count_labeled(&self) -> usize {
        self.values.iter().filter(|&&v| v != BACKGROUND).count()
    }

    /// Render labeled cells as a `cols x rows` RGB image
    ///
    /// Background cells are black; every labeled cell is painted `color`.
    ///
    /// # Errors
    ///
    /// Returns a core [`blobtrace_core::Error::InvalidDimension`] for an
    /// empty grid and [`RegionError::InvalidParameters`] for one too large
    /// to address as an image.
    pub fn render_mask(&self, color: Color) -> RegionResult<Pix> {
        let width = u32::try_from(self.cols).map_err(|_| too_large(self))?;
        let height = u32::try_from(self.rows).map_err(|_| too_large(self))?;
        let mut pix = Pix::new_rgb(width, height)?;
        let mut painted = 0usize;
        for (i, &v) in self.values.iter().enumerate() {
            if v != BACKGROUND {
                pix.set_rgb(saturate(i % self.cols), saturate(i / self.cols), color)?;
                painted += 1;
            }
        }
        debug!(
            "render label mask: {}x{} grid, {} labeled cells",
            self.rows, self.cols, painted
        );
        Ok(pix)
    }
}

fn saturate(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

fn too_large(map: &LabelMap) -> RegionError {
    RegionError::InvalidParameters(format!(
        "label grid {}x{} too large to render",
        map.rows, map.cols
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LabelMap {
        LabelMap::from_rows(&[
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 1, 0, 0],
            vec![0, 1, 0, 0, 2],
            vec![0, 0, 0, 0, 2],
        ])
        .unwrap()
    }

    #[test]
    fn test_dimensions_and_default_roi() {
        let map = LabelMap::new(3, 4);
        assert_eq!(map.rows(), 3);
        assert_eq!(map.cols(), 4);
        assert_eq!(map.roi(), Rect::new_unchecked(0, 0, 4, 3));
        assert_eq!(map.values().len(), 12);
        assert_eq!(map.count_labeled(), 0);
    }

    #[test]
    fn test_roi_offsets_access() {
        let mut map = LabelMap::with_roi(6, 6, Rect::new_unchecked(2, 3, 3, 3));
        map.raw_set(3, 2, 9).unwrap();
        assert_eq!(map.get(0, 0).unwrap(), 9);
        assert_eq!(map.raw_get(3, 2).unwrap(), 9);

        map.set(1, 1, 4).unwrap();
        assert_eq!(map.raw_get(4, 3).unwrap(), 4);

        // the ROI does not change the reported dimensions
        assert_eq!((map.rows(), map.cols()), (6, 6));
    }

    #[test]
    fn test_roi_access_is_bounds_checked() {
        let map = LabelMap::with_roi(6, 6, Rect::new_unchecked(2, 3, 3, 3));
        // row 3 + 3 = 6 is past the last row
        match map.get(3, 0) {
            Err(RegionError::LabelOutOfBounds { row, col, rows, cols }) => {
                assert_eq!((row, col, rows, cols), (6, 2, 6, 6));
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert!(map.get(0, 4).is_err());
        assert!(map.raw_get(6, 0).is_err());
        assert!(map.raw_get(0, 6).is_err());
    }

    #[test]
    fn test_negative_roi_origin() {
        let mut map = LabelMap::new(4, 4);
        map.set_roi(Rect::new_unchecked(-1, -1, 4, 4));
        assert!(map.get(0, 0).is_err());
        map.raw_set(0, 0, 5).unwrap();
        assert_eq!(map.get(1, 1).unwrap(), 5);
    }

    #[test]
    fn test_from_values_and_rows_validation() {
        assert!(LabelMap::from_values(2, 2, vec![0; 3]).is_err());
        assert!(LabelMap::from_rows(&[vec![0, 1], vec![2]]).is_err());
        let empty = LabelMap::from_rows(&[]).unwrap();
        assert_eq!((empty.rows(), empty.cols()), (0, 0));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = sample();
        original.set_roi(Rect::new_unchecked(1, 1, 2, 2));
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.raw_set(0, 0, 7).unwrap();
        copy.set_roi(Rect::new_unchecked(0, 0, 1, 1));
        assert_eq!(original.raw_get(0, 0).unwrap(), 0);
        assert_eq!(original.roi(), Rect::new_unchecked(1, 1, 2, 2));
    }

    #[test]
    fn test_label_bounds_and_count() {
        let map = sample();
        assert_eq!(map.label_bounds(1), Some(Rect::new_unchecked(1, 1, 2, 2)));
        assert_eq!(map.label_bounds(2), Some(Rect::new_unchecked(4, 2, 1, 2)));
        assert_eq!(map.label_bounds(3), None);
        assert_eq!(map.count_labeled(), 5);
    }

    #[test]
    fn test_render_mask() {
        let pix = sample().render_mask(Color::WHITE).unwrap();
        assert_eq!((pix.width(), pix.height()), (5, 4));
        assert_eq!(pix.get_rgb(1, 1), Some(Color::WHITE));
        assert_eq!(pix.get_rgb(4, 3), Some(Color::WHITE));
        assert_eq!(pix.get_rgb(0, 0), Some(Color::BLACK));
    }
}
