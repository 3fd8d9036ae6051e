// Copyright 2026 The map_transformer Contributors under the terms of the MIT
// License as detailed at <http://opensource.org/licenses/MIT>.

//! Piecewise-affine point transforms between two overlapping floor-plan
//! maps.
//!
//! Given a sparse set of hand-picked correspondence points — pixel
//! coordinates known to denote the same physical feature in a "robot" map
//! and a "reference" map of the same space — this crate builds a Delaunay
//! triangulation over their midpoints, fits an affine map to each triangle
//! in both directions, and uses that piecewise warp to translate query
//! points between the two coordinate frames ([`MapTransformer::to_ref`],
//! [`MapTransformer::to_robot`]). Points outside the triangulated region
//! fall back to a single global affine (scale, rotation, translation).
//!
//! This crate owns the geometry engine only: parsing and validating the
//! YAML input document, and evaluating transforms against the result. It
//! does not render, watch the filesystem, or provide a CLI.

mod document;
mod error;
mod geometry;
mod loaded;
mod transform;
mod triangulate;
mod validate;

pub use error::{Error, InputFault, LogicFault, MapName, Result};
pub use geometry::{Containment, Point};
pub use triangulate::Triangle;

use loaded::Loaded;

/// The geometric engine: an empty-or-loaded state machine over a pair of
/// maps and their correspondence points.
///
/// See the crate documentation for the transform semantics. A fresh
/// instance is always empty; [`load`](Self::load) populates it, `reset`
/// empties it again. Every getter and query except `load`/`reset` requires
/// a loaded instance and returns [`LogicFault::NotLoaded`] otherwise.
#[derive(Default)]
pub struct MapTransformer {
    loaded: Option<Loaded>,
}

impl MapTransformer {
    /// Constructs an empty instance.
    pub fn new() -> Self {
        MapTransformer { loaded: None }
    }

    /// Parses, validates, and triangulates `document_text`, transitioning
    /// this instance from empty to loaded.
    ///
    /// Legal only on an empty instance; calling it on a loaded instance is
    /// a logic fault and leaves the instance unchanged. On a validation
    /// failure the instance remains empty (`load` is atomic).
    pub fn load(&mut self, document_text: &str) -> Result<()> {
        if self.loaded.is_some() {
            return Err(LogicFault::AlreadyLoaded.into());
        }

        let raw = document::parse_document(document_text)?;
        let draft = validate::validate(raw).map_err(|e| {
            log::warn!("rejected document: {e}");
            e
        })?;
        let tri = triangulate::triangulate(&draft)?;

        log::debug!(
            "loaded '{}' <-> '{}': {} correspondence points, {} triangles",
            draft.ref_name,
            draft.robot_name,
            draft.ref_points.len(),
            tri.triangles.len(),
        );

        self.loaded = Some(Loaded::from_parts(draft, tri));
        Ok(())
    }

    /// Returns this instance to the empty state. Always legal.
    pub fn reset(&mut self) {
        self.loaded = None;
    }

    /// Whether this instance currently holds a loaded configuration.
    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    fn get(&self) -> std::result::Result<&Loaded, LogicFault> {
        self.loaded.as_ref().ok_or(LogicFault::NotLoaded)
    }

    pub fn ref_name(&self) -> Result<&str> {
        Ok(self.get()?.ref_name.as_str())
    }

    pub fn robot_name(&self) -> Result<&str> {
        Ok(self.get()?.robot_name.as_str())
    }

    pub fn ref_image_file(&self) -> Result<Option<&str>> {
        Ok(self.get()?.ref_image_file.as_deref())
    }

    pub fn robot_image_file(&self) -> Result<Option<&str>> {
        Ok(self.get()?.robot_image_file.as_deref())
    }

    pub fn ref_size(&self) -> Result<(f64, f64)> {
        Ok(self.get()?.ref_size)
    }

    pub fn robot_size(&self) -> Result<(f64, f64)> {
        Ok(self.get()?.robot_size)
    }

    pub fn scale(&self) -> Result<(f64, f64)> {
        Ok(self.get()?.scale)
    }

    pub fn rotation(&self) -> Result<f64> {
        Ok(self.get()?.rotation)
    }

    pub fn translation(&self) -> Result<(f64, f64)> {
        Ok(self.get()?.translation)
    }

    pub fn ref_points(&self) -> Result<&[Point]> {
        Ok(&self.get()?.ref_points)
    }

    pub fn robot_points(&self) -> Result<&[Point]> {
        Ok(&self.get()?.robot_points)
    }

    pub fn triangles(&self) -> Result<&[Triangle]> {
        Ok(&self.get()?.triangles)
    }

    /// The pixel rectangle that must hold both maps when rendered in the
    /// reference frame.
    pub fn bounding_box(&self) -> Result<(Point, Point)> {
        Ok(transform::bounding_box(self.get()?))
    }

    /// Maps a point from the robot map's frame into the reference map's
    /// frame.
    pub fn to_ref(&self, p: Point) -> Result<Point> {
        Ok(transform::to_ref(self.get()?, p))
    }

    /// Maps a point from the reference map's frame into the robot map's
    /// frame.
    pub fn to_robot(&self, p: Point) -> Result<Point> {
        Ok(transform::to_robot(self.get()?, p))
    }
}
