//! blobtrace-region - Contours, label maps and tracks
//!
//! This crate provides the blob-level data structures:
//!
//! - **Chain-code contours** - Freeman-coded outlines, their polygon
//!   approximation, perimeter and boundary rendering
//! - **Polygons** - Area, perimeter, simplification and convex hull
//! - **Label maps** - Label grids with region-of-interest indexing
//! - **Tracks** - A registry of tracked blobs with overlay rendering and
//!   a text summary
//!
//! # Examples
//!
//! ## Contour to polygon
//!
//! ```
//! use blobtrace_region::{ChainCodeContour, Direction};
//! use blobtrace_core::Point;
//!
//! let contour = ChainCodeContour::with_codes(
//!     Point::new(0, 0),
//!     vec![Direction::East, Direction::East, Direction::South],
//! );
//! let polygon = contour.to_polygon();
//! assert_eq!(polygon.points(), &[Point::new(0, 0), Point::new(2, 0)]);
//! assert_eq!(contour.perimeter(), 3.0);
//! ```
//!
//! ## Track overlay
//!
//! ```
//! use blobtrace_region::{Track, TrackRegistry, TrackRenderMode, TrackRenderOptions};
//! use blobtrace_core::{Pix, PointF};
//!
//! let mut tracks = TrackRegistry::new();
//! tracks.insert(Track::new(1, 1, PointF::new(8.0, 8.0)).with_bounds(4, 4, 12, 12));
//!
//! let frame = Pix::new_rgb(16, 16).unwrap();
//! let mut overlay = frame.clone();
//! let options = TrackRenderOptions::new().with_mode(TrackRenderMode::ALL);
//! tracks.render(&frame, &mut overlay, &options).unwrap();
//! assert!(tracks.summary().starts_with("Track 1\n"));
//! ```

pub mod chain;
pub mod error;
pub mod label;
pub mod polygon;
pub mod track;

pub use chain::{ChainCodeContour, Direction};
pub use error::{RegionError, RegionResult};
pub use label::{BACKGROUND, LabelMap};
pub use polygon::Polygon;
pub use track::{Track, TrackId, TrackRegistry, TrackRenderMode, TrackRenderOptions};
