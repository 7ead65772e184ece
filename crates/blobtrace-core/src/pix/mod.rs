//! PIX - The image buffer rendered into by contours and track overlays
//!
//! `Pix` is an owned, row-major, channel-interleaved byte buffer.
//!
//! # Pixel layout
//!
//! - Each pixel is `channels` samples of `depth` bits, stored contiguously
//! - 16-bit samples are stored little-endian
//! - Every row starts at a multiple of `stride` bytes; the stride may be
//!   larger than `channels * width * bytes_per_sample` (row padding)
//! - 3-channel images are in R, G, B sample order
//!
//! All pixel writes go through bounds-checked accessors; nothing in this
//! crate computes a raw offset without checking it against the image
//! dimensions first.

mod access;
pub mod convert;
pub mod font;
pub mod graphics;

pub use graphics::Color;

use crate::error::{Error, Result};

/// Bits per channel sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// 8-bit unsigned samples
    Bit8 = 8,
    /// 16-bit unsigned samples
    Bit16 = 16,
}

impl PixelDepth {
    /// Get the number of bits per sample.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Get the number of bytes per sample.
    pub fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }
}

/// Maximum number of interleaved channels
pub const MAX_CHANNELS: u32 = 4;

/// Row-major image buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pix {
    width: u32,
    height: u32,
    channels: u32,
    depth: PixelDepth,
    stride: usize,
    data: Vec<u8>,
}

impl Pix {
    /// Create a zero-filled image with a tightly packed row stride.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero width or height and
    /// [`Error::InvalidParameter`] for a channel count outside `1..=4`.
    pub fn new(width: u32, height: u32, channels: u32, depth: PixelDepth) -> Result<Self> {
        let stride = Self::packed_row_bytes(width, channels, depth);
        Self::with_stride(width, height, channels, depth, stride)
    }

    /// Create a zero-filled 3-channel 8-bit image.
    pub fn new_rgb(width: u32, height: u32) -> Result<Self> {
        Self::new(width, height, 3, PixelDepth::Bit8)
    }

    /// Create a zero-filled image whose rows are `stride` bytes apart.
    ///
    /// # Errors
    ///
    /// As [`Pix::new`], plus [`Error::InvalidParameter`] if `stride` is
    /// smaller than one packed row.
    pub fn with_stride(
        width: u32,
        height: u32,
        channels: u32,
        depth: PixelDepth,
        stride: usize,
    ) -> Result<Self> {
        Self::validate_layout(width, height, channels, depth, stride)?;
        Ok(Self {
            width,
            height,
            channels,
            depth,
            stride,
            data: vec![0; stride * height as usize],
        })
    }

    /// Wrap an existing buffer.
    ///
    /// # Errors
    ///
    /// As [`Pix::with_stride`], plus [`Error::BufferSize`] if `data` is
    /// shorter than `stride * height` bytes.
    pub fn from_raw(
        width: u32,
        height: u32,
        channels: u32,
        depth: PixelDepth,
        stride: usize,
        data: Vec<u8>,
    ) -> Result<Self> {
        Self::validate_layout(width, height, channels, depth, stride)?;
        let expected = stride * height as usize;
        if data.len() < expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            depth,
            stride,
            data,
        })
    }

    fn validate_layout(
        width: u32,
        height: u32,
        channels: u32,
        depth: PixelDepth,
        stride: usize,
    ) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if channels == 0 || channels > MAX_CHANNELS {
            return Err(Error::InvalidParameter(format!(
                "channel count must be in 1..={}, got {}",
                MAX_CHANNELS, channels
            )));
        }
        let packed = Self::packed_row_bytes(width, channels, depth);
        if stride < packed {
            return Err(Error::InvalidParameter(format!(
                "row stride {} is smaller than a packed row of {} bytes",
                stride, packed
            )));
        }
        Ok(())
    }

    #[inline]
    fn packed_row_bytes(width: u32, channels: u32, depth: PixelDepth) -> usize {
        width as usize * channels as usize * depth.bytes()
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of interleaved channels.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Get the sample depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.depth
    }

    /// Get the distance in bytes between the starts of two rows.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Get the number of bytes occupied by one pixel.
    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        self.channels as usize * self.depth.bytes()
    }

    /// Get the raw backing buffer, including any row padding.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get one row of pixel data without its padding.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.stride;
        let len = Self::packed_row_bytes(self.width, self.channels, self.depth);
        self.data.get(start..start + len)
    }

    /// Check for the 3-channel, 8-bit layout that rendering requires.
    #[inline]
    pub fn is_rgb8(&self) -> bool {
        self.channels == 3 && self.depth == PixelDepth::Bit8
    }

    /// Require a 3-channel, 8-bit image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for any other layout.
    pub fn require_rgb8(&self) -> Result<()> {
        if self.is_rgb8() {
            Ok(())
        } else {
            Err(Error::UnsupportedFormat {
                channels: self.channels,
                depth: self.depth.bits(),
            })
        }
    }

    /// Check whether `(x, y)` addresses a pixel of this image.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Require `(x, y)` to address a pixel of this image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] otherwise.
    pub fn check_bounds(&self, x: i64, y: i64) -> Result<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Byte offset of an in-bounds pixel.
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride + x as usize * self.bytes_per_pixel()
    }
}
