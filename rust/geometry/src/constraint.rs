// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Keeping a furniture footprint inside its room.
//!
//! Resolution runs in two tiers:
//!
//! 1. Clamp the desired center against the room's bounding box, inset by the
//!    footprint's half extents. For rectangular rooms this is already exact.
//! 2. Test the four footprint corners against the real outline. If one falls
//!    outside (a concave corner of an L or U room), step toward the vertex
//!    centroid instead.
//!
//! The fallback is a heuristic: it always returns a position, never an error,
//! and the single-step variant does not re-check the result. The iterative
//! variant tests candidates with [`footprint_within`], which also rejects a
//! footprint bridging a notch with all four corners on the room's arms.

use serde::{Deserialize, Serialize};

use crate::footprint::{footprint_inside, footprint_within, half_extents, FootprintMode};
use crate::polygon::{bounds, vertex_centroid};
use crate::types::{Footprint, PlanePoint, Point2D};

/// Distance moved toward the centroid per fallback step, in meters.
pub const NUDGE_STEP: f64 = 0.1;

/// What to do when the clamped footprint still pokes out of the outline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Fallback {
    /// One step toward the centroid on each axis, returned unchecked.
    #[default]
    Nudge,
    /// Walk toward the centroid in growing multiples of the step, trying each
    /// axis alone before both together, until the footprint lies wholly inside
    /// the outline. Gives up after `max_steps` multiples and returns the
    /// single nudge.
    Iterate { max_steps: u32 },
}

/// Options for [`constrain_with`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintOptions {
    pub footprint_mode: FootprintMode,
    pub fallback: Fallback,
    pub nudge_step: f64,
}

impl Default for ConstraintOptions {
    fn default() -> Self {
        Self {
            footprint_mode: FootprintMode::AxisAligned,
            fallback: Fallback::Nudge,
            nudge_step: NUDGE_STEP,
        }
    }
}

/// Constrains an unrotated footprint centered at `desired` to the room outline.
///
/// `footprint` is in meters. Equivalent to [`constrain_with`] with default
/// options and zero yaw.
pub fn constrain(desired: &PlanePoint, footprint: &Footprint, vertices: &[Point2D]) -> PlanePoint {
    constrain_with(desired, footprint, 0.0, vertices, &ConstraintOptions::default())
}

/// Constrains a footprint with the given yaw to the room outline.
pub fn constrain_with(
    desired: &PlanePoint,
    footprint: &Footprint,
    yaw: f64,
    vertices: &[Point2D],
    options: &ConstraintOptions,
) -> PlanePoint {
    let b = bounds(vertices);
    let (hx, hz) = half_extents(footprint, yaw, options.footprint_mode);

    // max(lo, min(hi, v)): when the footprint is wider than the room the lower
    // bound wins instead of panicking like f64::clamp would.
    let clamped = PlanePoint::new(
        desired.x.min(b.max_x - hx).max(b.min_x + hx),
        desired.z.min(b.max_z - hz).max(b.min_z + hz),
    );

    let contained = |p: &PlanePoint| match options.fallback {
        Fallback::Nudge => footprint_inside(p, footprint, yaw, options.footprint_mode, vertices),
        Fallback::Iterate { .. } => {
            footprint_within(p, footprint, yaw, options.footprint_mode, vertices)
        }
    };

    if contained(&clamped) {
        return clamped;
    }

    let centroid = vertex_centroid(vertices);
    let dir_x = if centroid.x > clamped.x { 1.0 } else { -1.0 };
    let dir_z = if centroid.z > clamped.z { 1.0 } else { -1.0 };
    let step = options.nudge_step;
    let first = PlanePoint::new(clamped.x + dir_x * step, clamped.z + dir_z * step);

    match options.fallback {
        Fallback::Nudge => {
            tracing::debug!(
                x = first.x,
                z = first.z,
                "footprint outside room after clamp, nudged toward centroid"
            );
            first
        }
        Fallback::Iterate { max_steps } => {
            for k in 1..=max_steps {
                let dist = step * f64::from(k);
                // Shortest displacement first: one axis, then both.
                let candidates = [
                    PlanePoint::new(clamped.x + dir_x * dist, clamped.z),
                    PlanePoint::new(clamped.x, clamped.z + dir_z * dist),
                    PlanePoint::new(clamped.x + dir_x * dist, clamped.z + dir_z * dist),
                ];
                if let Some(found) = candidates.into_iter().find(|c| contained(c)) {
                    tracing::debug!(steps = k, x = found.x, z = found.z, "footprint recovered");
                    return found;
                }
            }
            tracing::debug!(max_steps, "no contained position found, keeping first nudge");
            first
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::point_in_polygon;
    use crate::shapes::{generate_l_shape, generate_rectangle, generate_u_shape};
    use approx::assert_relative_eq;

    fn room_4x3() -> Vec<Point2D> {
        generate_rectangle(400.0, 300.0)
    }

    #[test]
    fn contained_position_is_unchanged() {
        let room = room_4x3();
        let fp = Footprint::new(1.0, 0.5);
        let p = PlanePoint::new(2.0, 1.5);
        assert_eq!(constrain(&p, &fp, &room), p);

        let near_wall = PlanePoint::new(3.5, 2.75);
        assert_eq!(constrain(&near_wall, &fp, &room), near_wall);
    }

    #[test]
    fn far_outside_is_clamped_to_inset_bounds() {
        let room = room_4x3();
        let fp = Footprint::new(1.0, 0.5);
        let p = constrain(&PlanePoint::new(10.0, 10.0), &fp, &room);
        assert_relative_eq!(p.x, 3.5);
        assert_relative_eq!(p.z, 2.75);

        let q = constrain(&PlanePoint::new(-7.0, 1.0), &fp, &room);
        assert_relative_eq!(q.x, 0.5);
        assert_relative_eq!(q.z, 1.0);
    }

    #[test]
    fn rectangular_room_always_contains_result() {
        let room = room_4x3();
        let fp = Footprint::new(0.9, 0.6);
        let desired = [
            (-3.0, -3.0),
            (9.0, -1.0),
            (2.0, 14.0),
            (-0.5, 1.0),
            (4.2, 3.1),
            (100.0, 100.0),
        ];
        for (x, z) in desired {
            let p = constrain(&PlanePoint::new(x, z), &fp, &room);
            assert!(
                footprint_inside(&p, &fp, 0.0, FootprintMode::AxisAligned, &room),
                "({}, {}) resolved to {:?}",
                x,
                z,
                p
            );
        }
    }

    #[test]
    fn oversized_footprint_does_not_panic() {
        let room = room_4x3();
        let fp = Footprint::new(6.0, 5.0);
        let p = constrain(&PlanePoint::new(1.0, 1.0), &fp, &room);
        assert!(p.x.is_finite() && p.z.is_finite());
    }

    #[test]
    fn concave_corner_nudges_toward_centroid() {
        // 5x4 L, cutout covers x in [3,5], z in [2,4]
        let room = generate_l_shape(500.0, 400.0, 200.0, 200.0);
        let fp = Footprint::new(1.0, 1.0);

        let p = constrain(&PlanePoint::new(4.0, 3.0), &fp, &room);
        // centroid is (16/6, 2); step is 0.1 on each axis
        assert_relative_eq!(p.x, 3.9, epsilon = 1e-12);
        assert_relative_eq!(p.z, 2.9, epsilon = 1e-12);
    }

    #[test]
    fn iterate_fallback_finds_a_contained_position() {
        let room = generate_l_shape(500.0, 400.0, 200.0, 200.0);
        let fp = Footprint::new(1.0, 1.0);
        let options = ConstraintOptions {
            fallback: Fallback::Iterate { max_steps: 50 },
            ..ConstraintOptions::default()
        };

        let p = constrain_with(&PlanePoint::new(4.0, 3.0), &fp, 0.0, &room, &options);
        assert!(footprint_inside(&p, &fp, 0.0, FootprintMode::AxisAligned, &room));
    }

    #[test]
    fn iterate_fallback_without_success_keeps_first_nudge() {
        let room = generate_l_shape(500.0, 400.0, 200.0, 200.0);
        let fp = Footprint::new(1.0, 1.0);
        let options = ConstraintOptions {
            fallback: Fallback::Iterate { max_steps: 0 },
            ..ConstraintOptions::default()
        };

        let p = constrain_with(&PlanePoint::new(4.0, 3.0), &fp, 0.0, &room, &options);
        assert_eq!(p, constrain(&PlanePoint::new(4.0, 3.0), &fp, &room));
    }

    #[test]
    fn iterate_fallback_leaves_the_u_notch() {
        // Default U: notch covers x in [2,4], z in [0,2]; a 5 m piece at
        // (3, 1) has all corners on the arms but its middle over the notch
        let room = generate_u_shape(600.0, 400.0, 200.0, 200.0);
        let fp = Footprint::new(5.0, 1.0);
        let desired = PlanePoint::new(3.0, 1.0);

        assert_eq!(constrain(&desired, &fp, &room), desired);

        let options = ConstraintOptions {
            fallback: Fallback::Iterate { max_steps: 40 },
            ..ConstraintOptions::default()
        };
        let p = constrain_with(&desired, &fp, 0.0, &room, &options);
        assert!(footprint_within(&p, &fp, 0.0, FootprintMode::AxisAligned, &room));
        assert!(point_in_polygon(&p, &room));
        assert_relative_eq!(p.x, 3.0, epsilon = 1e-9);
        assert_relative_eq!(p.z, 2.5, epsilon = 1e-9);
    }

    #[test]
    fn rotated_mode_uses_rotated_extents() {
        let room = room_4x3();
        let fp = Footprint::new(2.0, 1.0);
        let options = ConstraintOptions {
            footprint_mode: FootprintMode::Rotated,
            ..ConstraintOptions::default()
        };

        let p = constrain_with(
            &PlanePoint::new(10.0, 10.0),
            &fp,
            std::f64::consts::FRAC_PI_2,
            &room,
            &options,
        );
        assert_relative_eq!(p.x, 3.5, epsilon = 1e-9);
        assert_relative_eq!(p.z, 2.0, epsilon = 1e-9);
    }
}
