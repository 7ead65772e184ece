//! Blob tracks and the track registry
//!
//! A [`Track`] is the per-frame record of one tracked blob. The
//! [`TrackRegistry`] owns every track keyed by its id, renders them as an
//! overlay and produces a deterministic text summary.

use crate::error::{RegionError, RegionResult};
use blobtrace_core::{Color, Pix, Point, PointF};
use log::{debug, trace};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Track identifier
pub type TrackId = u32;

/// One tracked blob
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Unique identifier within a registry
    pub id: TrackId,
    /// Label of the blob associated in the current frame
    ///
    /// Only meaningful while `inactive == 0`.
    pub label: u32,
    /// Blob centroid
    pub centroid: PointF,
    /// Left edge of the bounding box
    pub min_x: i32,
    /// Top edge of the bounding box
    pub min_y: i32,
    /// Right edge of the bounding box
    pub max_x: i32,
    /// Bottom edge of the bounding box
    pub max_y: i32,
    /// Frames the track has been seen
    pub active: u32,
    /// Consecutive frames the track has been missed
    pub inactive: u32,
    /// Frames since the track was created
    pub lifetime: u32,
}

impl Track {
    /// Create a freshly seen track with an empty bounding box at the centroid
    pub fn new(id: TrackId, label: u32, centroid: PointF) -> Self {
        let c = centroid.round();
        Self {
            id,
            label,
            centroid,
            min_x: c.x,
            min_y: c.y,
            max_x: c.x,
            max_y: c.y,
            active: 0,
            inactive: 0,
            lifetime: 0,
        }
    }

    /// Set the bounding box
    pub fn with_bounds(mut self, min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        self.min_x = min_x;
        self.min_y = min_y;
        self.max_x = max_x;
        self.max_y = max_y;
        self
    }

    /// Set the activity counters
    pub fn with_counters(mut self, active: u32, inactive: u32, lifetime: u32) -> Self {
        self.active = active;
        self.inactive = inactive;
        self.lifetime = lifetime;
        self
    }

    /// True if the track was matched in the current frame
    #[inline]
    pub fn is_active(&self) -> bool {
        self.inactive == 0
    }

    /// Inclusive corners of the drawn box: `(min_x, min_y)` and
    /// `(max_x - 1, max_y - 1)`
    ///
    /// The corners are not ordered, so a track whose box is still empty
    /// (`min == max`) yields corners one pixel apart in each axis.
    pub fn box_corners(&self) -> (Point, Point) {
        (
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x.saturating_sub(1), self.max_y.saturating_sub(1)),
        )
    }
}

/// Selects which parts of a track overlay are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackRenderMode(u8);

impl TrackRenderMode {
    /// Draw nothing
    pub const NONE: Self = Self(0);
    /// Draw the id of each active track at its centroid
    pub const ID: Self = Self(1);
    /// Draw the bounding box of every track
    pub const BOUNDING_BOX: Self = Self(1 << 1);
    /// Draw ids and bounding boxes
    pub const ALL: Self = Self(Self::ID.0 | Self::BOUNDING_BOX.0);

    /// True if every flag of `other` is set
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if no flag is set
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for TrackRenderMode {
    fn default() -> Self {
        Self::ID
    }
}

impl BitOr for TrackRenderMode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TrackRenderMode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Options for [`TrackRegistry::render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRenderOptions {
    /// What to draw
    pub mode: TrackRenderMode,
    /// Bitmap font magnification for id labels (must be at least 1)
    pub font_scale: u32,
    /// Id label color
    pub id_color: Color,
    /// Box color for tracks matched in the current frame
    pub active_box_color: Color,
    /// Box color for tracks missed in the current frame
    pub inactive_box_color: Color,
}

impl Default for TrackRenderOptions {
    fn default() -> Self {
        Self {
            mode: TrackRenderMode::ID,
            font_scale: 1,
            id_color: Color::GREEN,
            active_box_color: Color::new(0, 0, 255),
            inactive_box_color: Color::new(0, 0, 50),
        }
    }
}

impl TrackRenderOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the render mode
    pub fn with_mode(mut self, mode: TrackRenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the font magnification
    pub fn with_font_scale(mut self, scale: u32) -> Self {
        self.font_scale = scale;
        self
    }

    /// Set the id label color
    pub fn with_id_color(mut self, color: Color) -> Self {
        self.id_color = color;
        self
    }

    /// Set the active box color
    pub fn with_active_box_color(mut self, color: Color) -> Self {
        self.active_box_color = color;
        self
    }

    /// Set the inactive box color
    pub fn with_inactive_box_color(mut self, color: Color) -> Self {
        self.inactive_box_color = color;
        self
    }

    fn validate(&self) -> RegionResult<()> {
        if self.font_scale == 0 {
            return Err(RegionError::InvalidParameters(
                "font_scale must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Collection of tracks keyed by id, iterated in ascending id order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackRegistry {
    tracks: BTreeMap<TrackId, Track>,
}

impl TrackRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a track under its own id, returning any track it replaces
    pub fn insert(&mut self, track: Track) -> Option<Track> {
        self.tracks.insert(track.id, track)
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(&id)
    }

    pub fn get_mut(&mut self, id: TrackId) -> Option<&mut Track> {
        self.tracks.get_mut(&id)
    }

    pub fn remove(&mut self, id: TrackId) -> Option<Track> {
        self.tracks.remove(&id)
    }

    pub fn contains(&self, id: TrackId) -> bool {
        self.tracks.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterate over tracks in ascending id order
    pub fn iter(&self) -> btree_map::Values<'_, TrackId, Track> {
        self.tracks.values()
    }

    /// Iterate over ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = TrackId> + '_ {
        self.tracks.keys().copied()
    }

    /// Keep only the tracks for which `keep` returns true
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Track) -> bool,
    {
        self.tracks.retain(|_, t| keep(t));
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Number of tracks matched in the current frame
    pub fn active_count(&self) -> usize {
        self.tracks.values().filter(|t| t.is_active()).count()
    }

    /// Draw the track overlay onto `dest`.
    ///
    /// `source` is the frame the tracks were computed from and is only
    /// checked for format. Ids are drawn at the rounded centroid of active
    /// tracks; boxes are drawn for every track between the corners of
    /// [`Track::box_corners`], in the inactive color when the track was
    /// missed this frame. Drawing clips at the image edge.
    ///
    /// # Errors
    ///
    /// Returns a core [`blobtrace_core::Error::UnsupportedFormat`] unless
    /// both images are 3-channel 8-bit, and
    /// [`RegionError::InvalidParameters`] for a zero font scale. Nothing is
    /// drawn when an error is returned.
    pub fn render(
        &self,
        source: &Pix,
        dest: &mut Pix,
        options: &TrackRenderOptions,
    ) -> RegionResult<()> {
        source.require_rgb8()?;
        dest.require_rgb8()?;
        options.validate()?;

        debug!(
            "render {} tracks ({} active), mode {:?}",
            self.tracks.len(),
            self.active_count(),
            options.mode
        );
        if options.mode.is_empty() {
            return Ok(());
        }

        let draw_ids = options.mode.contains(TrackRenderMode::ID);
        let draw_boxes = options.mode.contains(TrackRenderMode::BOUNDING_BOX);
        for track in self.tracks.values() {
            if draw_ids && track.is_active() {
                let origin = track.centroid.round();
                trace!("track {}: id label at ({}, {})", track.id, origin.x, origin.y);
                dest.render_text(
                    &track.id.to_string(),
                    origin,
                    options.font_scale,
                    options.id_color,
                )?;
            }
            if draw_boxes {
                let color = if track.is_active() {
                    options.active_box_color
                } else {
                    options.inactive_box_color
                };
                trace!(
                    "track {}: box ({}, {}) - ({}, {}), inactive {}",
                    track.id, track.min_x, track.min_y, track.max_x, track.max_y, track.inactive
                );
                let (p1, p2) = track.box_corners();
                dest.render_rect_color(p1, p2, color)?;
            }
        }
        Ok(())
    }

    /// Multi-line text summary of every track in ascending id order
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TrackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in self.tracks.values() {
            writeln!(f, "Track {}", t.id)?;
            if t.inactive > 0 {
                writeln!(f, " - Inactive for {} frames", t.inactive)?;
            } else {
                writeln!(f, " - Associated with blobs {}", t.label)?;
            }
            writeln!(f, " - Lifetime {}", t.lifetime)?;
            writeln!(f, " - Active {}", t.active)?;
            writeln!(
                f,
                " - Bounding box: ({},{}) - ({}, {})",
                t.min_x, t.min_y, t.max_x, t.max_y
            )?;
            writeln!(f, " - Centroid: ({}, {})", t.centroid.x, t.centroid.y)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromIterator<Track> for TrackRegistry {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        let mut registry = Self::new();
        for track in iter {
            registry.insert(track);
        }
        registry
    }
}

impl Extend<Track> for TrackRegistry {
    fn extend<I: IntoIterator<Item = Track>>(&mut self, iter: I) {
        for track in iter {
            self.insert(track);
        }
    }
}

impl<'a> IntoIterator for &'a TrackRegistry {
    type Item = &'a Track;
    type IntoIter = btree_map::Values<'a, TrackId, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.values()
    }
}
