//! Pixel access functions
//!
//! Getting and setting individual pixels. Every accessor checks the
//! coordinates against the image dimensions; out-of-range reads return
//! `None` and out-of-range writes return [`Error::PixelOutOfBounds`].

use super::{Color, Pix};
use crate::error::{Error, Result};

impl Pix {
    /// Get the samples of the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<&[u8]> {
        if !self.contains(x as i64, y as i64) {
            return None;
        }
        let start = self.offset(x as u32, y as u32);
        self.data.get(start..start + self.bytes_per_pixel())
    }

    /// Get the colour of the pixel at (x, y).
    ///
    /// Only valid for 3-channel 8-bit images; returns `None` otherwise or
    /// when the coordinates are out of bounds.
    pub fn get_rgb(&self, x: i32, y: i32) -> Option<Color> {
        if !self.is_rgb8() {
            return None;
        }
        self.get_pixel(x, y).map(|p| Color::new(p[0], p[1], p[2]))
    }

    /// Set the samples of the pixel at (x, y).
    ///
    /// `samples` must hold exactly one pixel's bytes
    /// (`channels * bytes_per_sample`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if coordinates are out of bounds
    /// and [`Error::InvalidParameter`] if `samples` has the wrong length.
    pub fn set_pixel(&mut self, x: i32, y: i32, samples: &[u8]) -> Result<()> {
        let bpp = self.bytes_per_pixel();
        if samples.len() != bpp {
            return Err(Error::InvalidParameter(format!(
                "pixel needs {} bytes, got {}",
                bpp,
                samples.len()
            )));
        }
        self.check_bounds(x as i64, y as i64)?;
        let start = self.offset(x as u32, y as u32);
        self.data[start..start + bpp].copy_from_slice(samples);
        Ok(())
    }

    /// Set an RGB pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] unless the image is 3-channel
    /// 8-bit, and [`Error::PixelOutOfBounds`] for bad coordinates.
    pub fn set_rgb(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        self.require_rgb8()?;
        self.set_pixel(x, y, &color.to_array())
    }
}
