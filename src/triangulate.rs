// Copyright 2026 The map_transformer Contributors under the terms of the MIT
// License as detailed at <http://opensource.org/licenses/MIT>.

//! Builds the Delaunay triangulation over the correspondence midpoints and
//! precomputes the per-triangle affine maps in both directions.
//!
//! Delegates the triangulation itself to [`delaunator`], which operates
//! directly on the input point set and never introduces synthetic
//! super-triangle vertices into its output — so unlike a hand-rolled
//! subdivision seeded with a bounding rectangle, there is nothing to filter
//! out afterwards, and midpoints with negative coordinates are not a
//! special case (see DESIGN.md, Open Question (a)).

use crate::error::LogicFault;
use crate::geometry::{affine_from_triangles, Affine2, Point};
use crate::validate::ValidatedDraft;

/// An unordered triple of distinct indices into the correspondence arrays.
pub type Triangle = (usize, usize, usize);

pub(crate) struct Triangulation {
    pub midpoints: Vec<Point>,
    pub triangles: Vec<Triangle>,
    pub to_ref: Vec<Affine2>,
    pub to_robot: Vec<Affine2>,
}

pub(crate) fn triangulate(draft: &ValidatedDraft) -> Result<Triangulation, LogicFault> {
    let midpoints: Vec<Point> = draft
        .ref_points
        .iter()
        .zip(&draft.robot_points)
        .map(|(r, q)| Point::new((r.x + q.x) / 2.0, (r.y + q.y) / 2.0))
        .collect();

    let raw_points: Vec<delaunator::Point> = midpoints
        .iter()
        .map(|p| delaunator::Point { x: p.x, y: p.y })
        .collect();
    let raw = delaunator::triangulate(&raw_points);

    let mut triangles = Vec::with_capacity(raw.triangles.len() / 3);
    let mut to_ref = Vec::with_capacity(raw.triangles.len() / 3);
    let mut to_robot = Vec::with_capacity(raw.triangles.len() / 3);

    for chunk in raw.triangles.chunks_exact(3) {
        let (a, b, c) = (chunk[0], chunk[1], chunk[2]);
        if a == b || b == c || a == c {
            return Err(LogicFault::DegenerateTriangle);
        }

        let robot_tri = [draft.robot_points[a], draft.robot_points[b], draft.robot_points[c]];
        let ref_tri = [draft.ref_points[a], draft.ref_points[b], draft.ref_points[c]];

        to_ref.push(affine_from_triangles(robot_tri, ref_tri)?);
        to_robot.push(affine_from_triangles(ref_tri, robot_tri)?);
        triangles.push((a, b, c));
    }

    log::debug!(
        "triangulated {} midpoints into {} triangles",
        midpoints.len(),
        triangles.len()
    );

    Ok(Triangulation {
        midpoints,
        triangles,
        to_ref,
        to_robot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;
    use crate::validate::validate;

    #[test]
    fn triangulates_a_single_triangle() {
        let text = r#"
ref_map:
  name: ref
  size: [10, 10]
  correspondence_points: [[0, 0], [10, 0], [0, 10]]
robot_map:
  name: robot
  size: [10, 10]
  correspondence_points: [[0, 0], [10, 0], [0, 10]]
"#;
        let draft = validate(parse_document(text).unwrap()).unwrap();
        let tri = triangulate(&draft).unwrap();
        assert_eq!(tri.triangles.len(), 1);
        assert_eq!(tri.to_ref.len(), 1);
        assert_eq!(tri.to_robot.len(), 1);
    }

    #[test]
    fn single_point_yields_no_triangles() {
        let text = r#"
ref_map:
  name: ref
  size: [10, 10]
  correspondence_points: [[0, 0]]
robot_map:
  name: robot
  size: [10, 10]
  correspondence_points: [[0, 0]]
"#;
        let draft = validate(parse_document(text).unwrap()).unwrap();
        let tri = triangulate(&draft).unwrap();
        assert!(tri.triangles.is_empty());
    }
}
