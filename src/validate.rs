// Copyright 2026 The map_transformer Contributors under the terms of the MIT
// License as detailed at <http://opensource.org/licenses/MIT>.

//! Enforces every structural invariant on a draft document before it is
//! accepted, in the order laid out in the spec: correspondence lists
//! present, lengths equal, sizes positive, scales non-zero, rectangles
//! overlap, then image files checked last (the only check that touches the
//! filesystem).

use std::path::Path;

use crate::document::{RawDocument, RawPoint};
use crate::error::{InputFault, MapName};
use crate::geometry::Point;

/// A document that has passed every structural check, still in "array of
/// raw pairs" form — [`crate::triangulate`] turns this into index tables.
pub(crate) struct ValidatedDraft {
    pub ref_name: String,
    pub ref_image_file: Option<String>,
    pub ref_size: (f64, f64),
    pub ref_points: Vec<Point>,

    pub robot_name: String,
    pub robot_image_file: Option<String>,
    pub robot_size: (f64, f64),
    pub robot_points: Vec<Point>,

    pub scale: (f64, f64),
    pub rotation: f64,
    pub translation: (f64, f64),
}

fn to_points(raw: &[RawPoint]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

pub(crate) fn validate(doc: RawDocument) -> Result<ValidatedDraft, InputFault> {
    let ref_points_raw = doc
        .ref_map
        .correspondence_points
        .filter(|v| !v.is_empty())
        .ok_or(InputFault::EmptyCorrespondence { map: MapName::Ref })?;
    let robot_points_raw = doc
        .robot_map
        .correspondence_points
        .filter(|v| !v.is_empty())
        .ok_or(InputFault::EmptyCorrespondence {
            map: MapName::Robot,
        })?;

    if ref_points_raw.len() != robot_points_raw.len() {
        return Err(InputFault::LengthMismatch {
            ref_len: ref_points_raw.len(),
            robot_len: robot_points_raw.len(),
        });
    }

    let ref_size = doc
        .ref_map
        .size
        .filter(|&(w, h)| w > 0.0 && h > 0.0)
        .ok_or(InputFault::InvalidSize { map: MapName::Ref })?;
    let robot_size = doc
        .robot_map
        .size
        .filter(|&(w, h)| w > 0.0 && h > 0.0)
        .ok_or(InputFault::InvalidSize {
            map: MapName::Robot,
        })?;

    let transform = doc.robot_map.transform.unwrap_or_default();
    let scale = transform.scale.unwrap_or((1.0, 1.0));
    let rotation = transform.rotation.unwrap_or(0.0);
    let translation = transform.translation.unwrap_or((0.0, 0.0));

    if scale.0 == 0.0 || scale.1 == 0.0 {
        return Err(InputFault::ZeroScale {
            sx: scale.0,
            sy: scale.1,
        });
    }

    if !rectangles_overlap(ref_size, robot_size, translation) {
        return Err(InputFault::NonOverlappingRects);
    }

    check_image(&doc.ref_map.image_file, ref_size, MapName::Ref)?;
    check_image(&doc.robot_map.image_file, robot_size, MapName::Robot)?;

    Ok(ValidatedDraft {
        ref_name: doc.ref_map.name,
        ref_image_file: doc.ref_map.image_file,
        ref_size,
        ref_points: to_points(&ref_points_raw),

        robot_name: doc.robot_map.name,
        robot_image_file: doc.robot_map.image_file,
        robot_size,
        robot_points: to_points(&robot_points_raw),

        scale,
        rotation,
        translation,
    })
}

/// Compares the ref rectangle `([0,0], ref_size)` against the robot
/// rectangle translated by `(tx, ty)`; deliberately ignores scale and
/// rotation, matching the historical implementation (see DESIGN.md).
fn rectangles_overlap(ref_size: (f64, f64), robot_size: (f64, f64), translation: (f64, f64)) -> bool {
    let (rw, rh) = ref_size;
    let (qw, qh) = robot_size;
    let (tx, ty) = translation;

    let robot_min_x = tx;
    let robot_max_x = tx + qw;
    let robot_min_y = ty;
    let robot_max_y = ty + qh;

    robot_min_x < rw && robot_max_x > 0.0 && robot_min_y < rh && robot_max_y > 0.0
}

fn check_image(
    image_file: &Option<String>,
    declared_size: (f64, f64),
    map: MapName,
) -> Result<(), InputFault> {
    let Some(path) = image_file.as_deref().filter(|p| !p.is_empty()) else {
        return Ok(());
    };
    let path = Path::new(path);
    if !path.exists() {
        return Err(InputFault::ImageMissing {
            map,
            path: path.to_path_buf(),
        });
    }

    let decoded = image::open(path).map_err(|source| InputFault::ImageDecode {
        map,
        path: path.to_path_buf(),
        source,
    })?;
    let (actual_w, actual_h) = {
        use image::GenericImageView as _;
        decoded.dimensions()
    };
    // `decoded` is dropped here, at the end of the scoped check.

    let (declared_w, declared_h) = declared_size;
    if f64::from(actual_w) != declared_w || f64::from(actual_h) != declared_h {
        return Err(InputFault::ImageSizeMismatch {
            map,
            declared_w,
            declared_h,
            actual_w,
            actual_h,
        });
    }
    Ok(())
}
