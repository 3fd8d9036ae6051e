// Copyright 2026 The map_transformer Contributors under the terms of the MIT
// License as detailed at <http://opensource.org/licenses/MIT>.

//! 2-D arithmetic: points, the point-in-triangle test, and the 2x3 affine
//! solve/apply that [`crate::triangulate`] and [`crate::transform`] build on.
//!
//! Kept dependency-free beyond [`cgmath`]'s point/vector types: the affine
//! solve is six lines of Cramer's rule, not worth pulling in a full linear
//! algebra crate for.

use crate::error::LogicFault;

/// A point in map-pixel coordinates. Not required to be integral.
pub type Point = cgmath::Point2<f64>;

/// Result of testing a point against a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    Inside,
    OnEdge,
    Outside,
}

impl Containment {
    /// Treats [`Containment::OnEdge`] as contained, matching the "first
    /// triangle tested wins" rule used by the transformer engine.
    pub fn is_contained(self) -> bool {
        !matches!(self, Containment::Outside)
    }
}

/// Twice the signed area of the triangle `(a, b, c)`; positive when
/// counter-clockwise, negative when clockwise, zero when collinear.
fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Classifies `p` against the triangle `(a, b, c)`, which may be given in
/// either winding order.
pub fn inside_triangle(p: Point, a: Point, b: Point, c: Point) -> Containment {
    let d1 = orientation(a, b, p);
    let d2 = orientation(b, c, p);
    let d3 = orientation(c, a, p);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    if has_neg && has_pos {
        Containment::Outside
    } else if d1 == 0.0 || d2 == 0.0 || d3 == 0.0 {
        Containment::OnEdge
    } else {
        Containment::Inside
    }
}

/// A 2x3 affine map: `x' = a00*x + a01*y + a02`, `y' = a10*x + a11*y + a12`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    pub a00: f64,
    pub a01: f64,
    pub a02: f64,
    pub a10: f64,
    pub a11: f64,
    pub a12: f64,
}

impl Affine2 {
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a00 * p.x + self.a01 * p.y + self.a02,
            self.a10 * p.x + self.a11 * p.y + self.a12,
        )
    }
}

/// Solves for the unique affine map taking `src[i]` to `dst[i]` for each of
/// the three point pairs.
///
/// `src` must be non-degenerate (not collinear); any other configuration is
/// an internal bug in the caller (the triangulator should never hand this
/// function a degenerate triangle), so this is reported as a
/// [`LogicFault`] rather than an [`InputFault`](crate::error::InputFault).
pub fn affine_from_triangles(src: [Point; 3], dst: [Point; 3]) -> Result<Affine2, LogicFault> {
    // Design matrix shared by both the x- and y- coefficient systems:
    //   [x0 y0 1] [a]   [dst_x]
    //   [x1 y1 1] [b] = [dst_x]
    //   [x2 y2 1] [c]   [dst_x]
    // and likewise for the y- coefficients.
    let [p0, p1, p2] = src;
    let det = orientation(p0, p1, p2);
    if det.abs() < 1e-12 {
        return Err(LogicFault::DegenerateTriangle);
    }

    let xs = [dst[0].x, dst[1].x, dst[2].x];
    let ys = [dst[0].y, dst[1].y, dst[2].y];
    let (a00, a01, a02) = solve_coefficients(src, xs, det);
    let (a10, a11, a12) = solve_coefficients(src, ys, det);

    Ok(Affine2 {
        a00,
        a01,
        a02,
        a10,
        a11,
        a12,
    })
}

/// Cramer's rule against the shared 3x3 design matrix for one coordinate
/// (x or y) of the destination points.
fn solve_coefficients(src: [Point; 3], target: [f64; 3], det: f64) -> (f64, f64, f64) {
    let [p0, p1, p2] = src;
    let [t0, t1, t2] = target;

    // Replace each column of the design matrix in turn with `target` and
    // divide by the shared determinant.
    let a = (t0 * (p1.y - p2.y) + t1 * (p2.y - p0.y) + t2 * (p0.y - p1.y)) / det;
    let b = (t0 * (p2.x - p1.x) + t1 * (p0.x - p2.x) + t2 * (p1.x - p0.x)) / det;
    let c = (t0 * (p1.x * p2.y - p2.x * p1.y)
        + t1 * (p2.x * p0.y - p0.x * p2.y)
        + t2 * (p0.x * p1.y - p1.x * p0.y))
        / det;
    (a, b, c)
}
