//! Interop with the `image` crate
//!
//! Frames decoded by `image` are copied into a [`Pix`] before rendering,
//! and rendered results are copied back out for encoding.

use super::{Pix, PixelDepth};
use crate::error::{Error, Result};
use image::{DynamicImage, RgbImage};
use log::debug;

impl Pix {
    /// Copy an `image::RgbImage` into a 3-channel 8-bit `Pix`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for an empty image.
    pub fn from_rgb_image(img: &RgbImage) -> Result<Self> {
        let (w, h) = img.dimensions();
        Pix::from_raw(w, h, 3, PixelDepth::Bit8, w as usize * 3, img.as_raw().clone())
    }

    /// Copy any 8- or 16-bit `DynamicImage` into a `Pix`, keeping its
    /// channel count and sample depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for floating-point images and
    /// [`Error::InvalidDimension`] for an empty image.
    pub fn from_dynamic_image(img: &DynamicImage) -> Result<Self> {
        let (w, h) = (img.width(), img.height());
        let channels = img.color().channel_count() as u32;
        let (depth, data) = match img {
            DynamicImage::ImageLuma8(_)
            | DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageRgb8(_)
            | DynamicImage::ImageRgba8(_) => (PixelDepth::Bit8, img.as_bytes().to_vec()),
            DynamicImage::ImageLuma16(buf) => (PixelDepth::Bit16, le_bytes(buf.as_raw())),
            DynamicImage::ImageLumaA16(buf) => (PixelDepth::Bit16, le_bytes(buf.as_raw())),
            DynamicImage::ImageRgb16(buf) => (PixelDepth::Bit16, le_bytes(buf.as_raw())),
            DynamicImage::ImageRgba16(buf) => (PixelDepth::Bit16, le_bytes(buf.as_raw())),
            other => {
                let bits = other.color().bits_per_pixel() as u32 / channels.max(1);
                return Err(Error::UnsupportedFormat {
                    channels,
                    depth: bits,
                });
            }
        };
        let stride = w as usize * channels as usize * depth.bytes();
        debug!("convert {:?} {}x{} to pix", img.color(), w, h);
        Pix::from_raw(w, h, channels, depth, stride, data)
    }

    /// Copy a 3-channel 8-bit `Pix` into an `image::RgbImage`, dropping any
    /// row padding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for any other layout.
    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        self.require_rgb8()?;
        let row_len = self.width as usize * 3;
        let mut packed = Vec::with_capacity(row_len * self.height as usize);
        for y in 0..self.height {
            let row = self.row(y).ok_or(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height as usize,
            })?;
            packed.extend_from_slice(row);
        }
        let expected = packed.len();
        debug!("convert pix {}x{} to rgb image", self.width, self.height);
        RgbImage::from_raw(self.width, self.height, packed).ok_or(Error::BufferSize {
            expected,
            actual: expected,
        })
    }
}

impl TryFrom<&DynamicImage> for Pix {
    type Error = Error;

    fn try_from(img: &DynamicImage) -> Result<Self> {
        Pix::from_dynamic_image(img)
    }
}

fn le_bytes(samples: &[u16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}
