// Copyright 2026 The map_transformer Contributors under the terms of the MIT
// License as detailed at <http://opensource.org/licenses/MIT>.

//! The fully-loaded configuration: the validated draft plus the
//! triangulation and precomputed affines built from it. Owned by
//! [`crate::MapTransformer`] only while in the *loaded* state.

use crate::geometry::{Affine2, Point};
use crate::triangulate::{Triangle, Triangulation};
use crate::validate::ValidatedDraft;

pub(crate) struct Loaded {
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

    pub triangles: Vec<Triangle>,
    pub to_ref: Vec<Affine2>,
    pub to_robot: Vec<Affine2>,
}

impl Loaded {
    pub(crate) fn from_parts(draft: ValidatedDraft, tri: Triangulation) -> Self {
        Loaded {
            ref_name: draft.ref_name,
            ref_image_file: draft.ref_image_file,
            ref_size: draft.ref_size,
            ref_points: draft.ref_points,

            robot_name: draft.robot_name,
            robot_image_file: draft.robot_image_file,
            robot_size: draft.robot_size,
            robot_points: draft.robot_points,

            scale: draft.scale,
            rotation: draft.rotation,
            translation: draft.translation,

            triangles: tri.triangles,
            to_ref: tri.to_ref,
            to_robot: tri.to_robot,
        }
    }
}
