//! blobtrace - Blob contours, label maps and track overlays
//!
//! # Overview
//!
//! blobtrace turns the per-frame output of a blob tracker into geometry
//! and pictures:
//!
//! - Chain-code contours into polygons, perimeters and boundary marks
//! - Label grids addressed through a region of interest
//! - Track registries rendered as overlays and as a text summary
//!
//! # Example
//!
//! ```
//! use blobtrace::{Color, Pix, Point};
//! use blobtrace::region::{ChainCodeContour, Direction};
//!
//! let contour = ChainCodeContour::with_codes(
//!     Point::new(1, 1),
//!     vec![Direction::East, Direction::South, Direction::West, Direction::North],
//! );
//! let mut pix = Pix::new_rgb(4, 4).unwrap();
//! contour.render(&mut pix, Color::WHITE).unwrap();
//! assert_eq!(pix.get_rgb(1, 1), Some(Color::WHITE));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use blobtrace_core::*;

pub use blobtrace_region as region;
