// Copyright 2026 The map_transformer Contributors under the terms of the MIT
// License as detailed at <http://opensource.org/licenses/MIT>.

//! `to_ref` / `to_robot`: correspondence shortcut, triangle search,
//! piecewise-affine apply, convex-hull fallback. See [`crate::MapTransformer`]
//! for the public entry points; this module holds the pure query logic
//! against an already-loaded instance.

use crate::geometry::{inside_triangle, Affine2, Point};
use crate::loaded::Loaded;

/// Applies the global affine `R(theta) * diag(sx, sy) * p + t`.
fn apply_global_forward(loaded: &Loaded, p: Point) -> Point {
    let (sx, sy) = loaded.scale;
    let theta = loaded.rotation;
    let (tx, ty) = loaded.translation;

    let (cos, sin) = (theta.cos(), theta.sin());
    let scaled = Point::new(sx * p.x, sy * p.y);
    let rotated = Point::new(
        cos * scaled.x - sin * scaled.y,
        sin * scaled.x + cos * scaled.y,
    );
    Point::new(rotated.x + tx, rotated.y + ty)
}

/// The algebraically exact inverse of [`apply_global_forward`]:
/// `diag(1/sx, 1/sy) * R(-theta) * (p - t)`. The historical implementation
/// applied the translation subtraction *after* rotation/scale instead of
/// before, which is only exact when `theta == 0` (see DESIGN.md).
fn apply_global_inverse(loaded: &Loaded, p: Point) -> Point {
    let (sx, sy) = loaded.scale;
    let theta = loaded.rotation;
    let (tx, ty) = loaded.translation;

    let shifted = Point::new(p.x - tx, p.y - ty);
    // R(-theta) = [[cos theta, sin theta], [-sin theta, cos theta]].
    let (sin, cos) = theta.sin_cos();
    let unrotated = Point::new(
        cos * shifted.x + sin * shifted.y,
        -sin * shifted.x + cos * shifted.y,
    );
    Point::new(unrotated.x / sx, unrotated.y / sy)
}

enum Direction {
    ToRef,
    ToRobot,
}

fn query(loaded: &Loaded, p: Point, direction: Direction) -> Point {
    let (scan, pair, affines): (&[Point], &[Point], &[Affine2]) = match direction {
        Direction::ToRef => (&loaded.robot_points, &loaded.ref_points, &loaded.to_ref),
        Direction::ToRobot => (&loaded.ref_points, &loaded.robot_points, &loaded.to_robot),
    };

    for (i, candidate) in scan.iter().enumerate() {
        if *candidate == p {
            log::trace!("query: correspondence shortcut at index {i}");
            return pair[i];
        }
    }

    let tri_source = match direction {
        Direction::ToRef => &loaded.robot_points,
        Direction::ToRobot => &loaded.ref_points,
    };

    for (i, &(a, b, c)) in loaded.triangles.iter().enumerate() {
        let (ta, tb, tc) = (tri_source[a], tri_source[b], tri_source[c]);
        if inside_triangle(p, ta, tb, tc).is_contained() {
            log::trace!("query: triangle {i} contains point");
            return affines[i].apply(p);
        }
    }

    log::trace!("query: convex-hull fallback");
    match direction {
        Direction::ToRef => apply_global_forward(loaded, p),
        Direction::ToRobot => apply_global_inverse(loaded, p),
    }
}

pub(crate) fn to_ref(loaded: &Loaded, p: Point) -> Point {
    query(loaded, p, Direction::ToRef)
}

pub(crate) fn to_robot(loaded: &Loaded, p: Point) -> Point {
    query(loaded, p, Direction::ToRobot)
}

/// The pixel rectangle that must hold both maps when rendered in the
/// reference frame.
pub(crate) fn bounding_box(loaded: &Loaded) -> (Point, Point) {
    let (tx, ty) = loaded.translation;
    let (rw, rh) = loaded.ref_size;
    let (qw, qh) = loaded.robot_size;
    (
        Point::new(tx.min(0.0), ty.min(0.0)),
        Point::new(rw.max(qw + tx), rh.max(qh + ty)),
    )
}
