// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Corners of a furniture footprint on the floor plane.

use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

use crate::polygon::point_in_polygon;
use crate::types::{Footprint, PlanePoint, Point2D};

/// How yaw is taken into account when testing a footprint against a room.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FootprintMode {
    /// Ignore yaw: the footprint is always the unrotated `width × depth` box.
    AxisAligned,
    /// Rotate the footprint corners by the object's yaw.
    #[default]
    Rotated,
}

/// Half extents of the footprint's axis-aligned box on the plane.
pub fn half_extents(footprint: &Footprint, yaw: f64, mode: FootprintMode) -> (f64, f64) {
    let hw = footprint.half_width();
    let hd = footprint.half_depth();

    match mode {
        FootprintMode::AxisAligned => (hw, hd),
        FootprintMode::Rotated => {
            let (s, c) = yaw.sin_cos();
            let (s, c) = (s.abs(), c.abs());
            (hw * c + hd * s, hw * s + hd * c)
        }
    }
}

/// The four footprint corners around `center`, in order
/// `(-x,-z) (+x,-z) (+x,+z) (-x,+z)` before rotation.
pub fn corners(
    center: &PlanePoint,
    footprint: &Footprint,
    yaw: f64,
    mode: FootprintMode,
) -> [PlanePoint; 4] {
    let hw = footprint.half_width();
    let hd = footprint.half_depth();
    let local = [
        Vector2::new(-hw, -hd),
        Vector2::new(hw, -hd),
        Vector2::new(hw, hd),
        Vector2::new(-hw, hd),
    ];

    let c = center.to_vector();
    match mode {
        FootprintMode::AxisAligned => local.map(|v| PlanePoint::from_vector(&(c + v))),
        FootprintMode::Rotated => {
            // Yaw turns +x toward -z in the right-handed y-up scene, which in
            // the (x, z) plane is a clockwise turn.
            let rot = Rotation2::new(-yaw);
            local.map(|v| PlanePoint::from_vector(&(c + rot * v)))
        }
    }
}

/// Corners are pulled in by this much (meters) before the containment test so
/// that a footprint flush against a wall counts as inside. The crossing test
/// alone treats points on the right and far walls as outside.
pub const EDGE_TOLERANCE: f64 = 1e-9;

/// True when every corner of the footprint lies inside the outline.
pub fn footprint_inside(
    center: &PlanePoint,
    footprint: &Footprint,
    yaw: f64,
    mode: FootprintMode,
    vertices: &[Point2D],
) -> bool {
    let inset = Footprint::new(
        (footprint.width - 2.0 * EDGE_TOLERANCE).max(0.0),
        (footprint.depth - 2.0 * EDGE_TOLERANCE).max(0.0),
    );
    corners(center, &inset, yaw, mode)
        .iter()
        .all(|corner| point_in_polygon(corner, vertices))
}

/// Stricter than [`footprint_inside`]: every corner is inside and no room edge
/// passes through the footprint. Catches a piece bridging the notch of a U
/// room, whose corners all land on the arms.
pub fn footprint_within(
    center: &PlanePoint,
    footprint: &Footprint,
    yaw: f64,
    mode: FootprintMode,
    vertices: &[Point2D],
) -> bool {
    if !footprint_inside(center, footprint, yaw, mode, vertices) {
        return false;
    }

    let hw = (footprint.half_width() - EDGE_TOLERANCE).max(0.0);
    let hd = (footprint.half_depth() - EDGE_TOLERANCE).max(0.0);
    let rot = match mode {
        FootprintMode::AxisAligned => Rotation2::identity(),
        FootprintMode::Rotated => Rotation2::new(-yaw),
    };
    let c = center.to_vector();
    let local = |p: &Point2D| rot.inverse_transform_vector(&(Vector2::new(p.x, p.y) - c));

    let n = vertices.len();
    (0..n).all(|i| {
        let a = local(&vertices[i]);
        let b = local(&vertices[(i + 1) % n]);
        !segment_crosses_box(&a, &b, hw, hd)
    })
}

/// Liang-Barsky clip of segment `a..b` against `[-hw, hw] × [-hd, hd]`. True
/// when a stretch of positive length lies inside the box.
fn segment_crosses_box(a: &Vector2<f64>, b: &Vector2<f64>, hw: f64, hd: f64) -> bool {
    let d = b - a;
    if d.x == 0.0 && d.y == 0.0 {
        return false;
    }

    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    let planes = [
        (-d.x, a.x + hw),
        (d.x, hw - a.x),
        (-d.y, a.y + hd),
        (d.y, hd - a.y),
    ];
    for (p, q) in planes {
        if p == 0.0 {
            if q < 0.0 {
                return false;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
        }
    }
    t0 < t1
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn axis_aligned_corners() {
        let c = corners(
            &PlanePoint::new(2.0, 1.5),
            &Footprint::new(1.0, 0.5),
            1.0,
            FootprintMode::AxisAligned,
        );
        assert_eq!(c[0], PlanePoint::new(1.5, 1.25));
        assert_eq!(c[2], PlanePoint::new(2.5, 1.75));
    }

    #[test]
    fn quarter_turn_swaps_extents() {
        let fp = Footprint::new(2.0, 1.0);
        let (hx, hz) = half_extents(&fp, FRAC_PI_2, FootprintMode::Rotated);
        assert_relative_eq!(hx, 0.5, epsilon = 1e-12);
        assert_relative_eq!(hz, 1.0, epsilon = 1e-12);

        let c = corners(&PlanePoint::new(0.0, 0.0), &fp, FRAC_PI_2, FootprintMode::Rotated);
        for corner in c {
            assert_relative_eq!(corner.x.abs(), 0.5, epsilon = 1e-12);
            assert_relative_eq!(corner.z.abs(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_yaw_modes_agree() {
        let fp = Footprint::new(1.2, 0.8);
        let center = PlanePoint::new(3.0, 2.0);
        let a = corners(&center, &fp, 0.0, FootprintMode::AxisAligned);
        let b = corners(&center, &fp, 0.0, FootprintMode::Rotated);
        for (p, q) in a.iter().zip(b.iter()) {
            assert_relative_eq!(p.x, q.x, epsilon = 1e-12);
            assert_relative_eq!(p.z, q.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn rotated_footprint_can_leave_a_narrow_room() {
        // 3m x 1m corridor
        let room = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(3.0, 0.0),
            Point2D::new(3.0, 1.0),
            Point2D::new(0.0, 1.0),
        ];
        let fp = Footprint::new(2.0, 0.6);
        let center = PlanePoint::new(1.5, 0.5);

        assert!(footprint_inside(&center, &fp, 0.0, FootprintMode::Rotated, &room));
        assert!(!footprint_inside(&center, &fp, FRAC_PI_2, FootprintMode::Rotated, &room));
        assert!(footprint_inside(&center, &fp, FRAC_PI_2, FootprintMode::AxisAligned, &room));
    }

    #[test]
    fn flush_against_every_wall_is_inside() {
        let room = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 3.0),
            Point2D::new(0.0, 3.0),
        ];
        let fp = Footprint::new(1.0, 0.5);
        for center in [
            PlanePoint::new(0.5, 0.25),
            PlanePoint::new(3.5, 0.25),
            PlanePoint::new(3.5, 2.75),
            PlanePoint::new(0.5, 2.75),
        ] {
            assert!(footprint_inside(&center, &fp, 0.0, FootprintMode::AxisAligned, &room));
        }
        assert!(!footprint_inside(
            &PlanePoint::new(3.51, 2.75),
            &fp,
            0.0,
            FootprintMode::AxisAligned,
            &room
        ));
    }

    #[test]
    fn bridging_the_u_notch_is_not_within() {
        // Default U: notch covers x in [2,4], z in [0,2]
        let room = crate::shapes::generate_u_shape(600.0, 400.0, 200.0, 200.0);
        let fp = Footprint::new(5.0, 1.0);
        let bridge = PlanePoint::new(3.0, 1.0);

        assert!(footprint_inside(&bridge, &fp, 0.0, FootprintMode::AxisAligned, &room));
        assert!(!point_in_polygon(&bridge, &room));
        assert!(!footprint_within(&bridge, &fp, 0.0, FootprintMode::AxisAligned, &room));
        assert!(!footprint_within(&bridge, &fp, 0.0, FootprintMode::Rotated, &room));

        // Same piece in the back band, flush against the notch top
        let band = PlanePoint::new(3.0, 2.5);
        assert!(footprint_within(&band, &fp, 0.0, FootprintMode::AxisAligned, &room));
        assert!(footprint_within(&band, &fp, 0.0, FootprintMode::Rotated, &room));
    }

    #[test]
    fn within_agrees_with_corners_in_rectangles() {
        let room = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 3.0),
            Point2D::new(0.0, 3.0),
        ];
        let fp = Footprint::new(1.0, 0.5);
        for (x, z) in [(0.5, 0.25), (3.5, 2.75), (2.0, 1.5), (3.6, 1.0), (-1.0, 1.0)] {
            let p = PlanePoint::new(x, z);
            for yaw in [0.0, 0.3, FRAC_PI_2] {
                assert_eq!(
                    footprint_within(&p, &fp, yaw, FootprintMode::Rotated, &room),
                    footprint_inside(&p, &fp, yaw, FootprintMode::Rotated, &room),
                    "({x}, {z}) yaw {yaw}"
                );
            }
        }
    }
}
