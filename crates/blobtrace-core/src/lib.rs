//! blobtrace Core - Basic data structures for blob contours and overlays
//!
//! This crate provides the fundamental data structures shared by the
//! blobtrace crates:
//!
//! - [`Pix`] - Row-major image buffer with bounds-checked pixel access
//! - [`Color`] and the clipped drawing primitives in [`pix::graphics`]
//! - [`Point`] / [`PointF`] / [`Rect`] - Geometry value types
//! - [`Error`] / [`Result`] - The core error type
//!
//! # Example
//!
//! ```
//! use blobtrace_core::{Color, Pix, Point, Rect};
//!
//! let mut pix = Pix::new_rgb(32, 16).unwrap();
//! pix.render_box_color(&Rect::new(2, 2, 10, 6).unwrap(), Color::RED).unwrap();
//! pix.render_text("42", Point::new(20, 12), 1, Color::GREEN).unwrap();
//! assert_eq!(pix.get_rgb(2, 2), Some(Color::RED));
//! ```

pub mod error;
pub mod geom;
pub mod pix;

pub use error::{Error, Result};
pub use geom::{Point, PointF, Rect};
pub use pix::{Color, MAX_CHANNELS, Pix, PixelDepth};
