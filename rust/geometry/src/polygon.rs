// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Queries on room outlines: bounds, containment, centroid, area, and the
//! orthogonality check applied to hand-entered outlines.

use crate::error::{Error, Result};
use crate::types::{PlanePoint, Point2D, RoomBounds};

/// Axis-aligned bounds of an outline, with plan `y` mapped to plane `z`.
///
/// An empty outline yields all-zero bounds.
pub fn bounds(vertices: &[Point2D]) -> RoomBounds {
    let Some(first) = vertices.first() else {
        return RoomBounds::default();
    };

    let mut b = RoomBounds {
        min_x: first.x,
        max_x: first.x,
        min_z: first.y,
        max_z: first.y,
    };

    for v in vertices {
        b.min_x = b.min_x.min(v.x);
        b.max_x = b.max_x.max(v.x);
        b.min_z = b.min_z.min(v.y);
        b.max_z = b.max_z.max(v.y);
    }

    b
}

/// Crossing-number point-in-polygon test.
///
/// Casts a ray along +x from `point` and toggles on each edge crossing. Edges
/// with both endpoints on the same side of the ray never count, which also
/// skips horizontal edges (no division by zero). Exact for any simple polygon,
/// convex or not.
pub fn point_in_polygon(point: &PlanePoint, vertices: &[Point2D]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let x = point.x;
    let y = point.z;
    let mut inside = false;

    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (vertices[i].x, vertices[i].y);
        let (xj, yj) = (vertices[j].x, vertices[j].y);

        if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Arithmetic mean of the outline's vertices, on the floor plane.
///
/// This is the vertex average, not the area centroid; for U-shaped rooms it
/// can fall inside the notch.
pub fn vertex_centroid(vertices: &[Point2D]) -> PlanePoint {
    if vertices.is_empty() {
        return PlanePoint::default();
    }

    let n = vertices.len() as f64;
    let (sx, sy) = vertices
        .iter()
        .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));

    PlanePoint::new(sx / n, sy / n)
}

/// Shoelace signed area. Positive when the outline runs counter-clockwise in
/// a y-up plan.
pub fn signed_area(vertices: &[Point2D]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }

    sum / 2.0
}

/// Enclosed area of a simple outline, in square meters.
pub fn polygon_area(vertices: &[Point2D]) -> f64 {
    signed_area(vertices).abs()
}

/// Returns the index of the first vertex where the outline stops being
/// orthogonal, or `None` if every edge is axis-aligned and consecutive edges
/// alternate between horizontal and vertical.
pub fn orthogonality_violation(vertices: &[Point2D]) -> Option<usize> {
    let n = vertices.len();
    if n < 3 {
        return Some(0);
    }

    for i in 0..n {
        let prev = vertices[(i + n - 1) % n];
        let curr = vertices[i];
        let next = vertices[(i + 1) % n];

        let in_horizontal = prev.y == curr.y;
        let in_vertical = prev.x == curr.x;
        let out_horizontal = curr.y == next.y;
        let out_vertical = curr.x == next.x;

        // Diagonal edge on either side
        if !in_horizontal && !in_vertical {
            return Some(i);
        }
        if !out_horizontal && !out_vertical {
            return Some(i);
        }

        // Straight angle (or a zero-length edge, which is both)
        if (in_horizontal && out_horizontal) || (in_vertical && out_vertical) {
            return Some(i);
        }
    }

    None
}

pub fn is_orthogonal(vertices: &[Point2D]) -> bool {
    orthogonality_violation(vertices).is_none()
}

/// Checks an outline before it is accepted as a room: at least three
/// vertices and orthogonal corners.
pub fn validate_outline(vertices: &[Point2D]) -> Result<()> {
    if vertices.len() < 3 {
        return Err(Error::TooFewVertices(vertices.len()));
    }
    match orthogonality_violation(vertices) {
        Some(index) => Err(Error::NonOrthogonal { index }),
        None => Ok(()),
    }
}

/// Parses an outline typed as whitespace-separated `x,y` pairs in meters,
/// e.g. `"0,0 5,0 5,3 3,3 3,5 0,5"`.
pub fn parse_vertices(input: &str) -> Result<Vec<Point2D>> {
    let vertices = input
        .split_whitespace()
        .map(parse_pair)
        .collect::<Result<Vec<_>>>()?;

    if vertices.len() < 3 {
        return Err(Error::TooFewVertices(vertices.len()));
    }

    Ok(vertices)
}

fn parse_pair(pair: &str) -> Result<Point2D> {
    let mut parts = pair.split(',');
    let (Some(xs), Some(ys), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::InvalidVertexInput(format!("expected `x,y`, got `{}`", pair)));
    };

    let x = xs
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidVertexInput(format!("invalid x coordinate `{}`", xs)))?;
    let y = ys
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidVertexInput(format!("invalid y coordinate `{}`", ys)))?;

    if !x.is_finite() || !y.is_finite() {
        return Err(Error::InvalidVertexInput(format!("non-finite coordinate in `{}`", pair)));
    }

    Ok(Point2D::new(x, y))
}
