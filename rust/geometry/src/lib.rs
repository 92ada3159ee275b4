// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # RoomPlan Geometry
//!
//! Plan-level geometry for furniture layout: parametric room outlines,
//! point-in-polygon containment for orthogonal (possibly concave) rooms, and
//! the placement resolver that keeps a furniture footprint inside its room
//! while it is dragged, nudged, rotated or resized.
//!
//! Outlines are `(x, y)` vertex lists in meters. Floor positions in the 3D
//! scene are `(x, z)`; plan `y` maps to scene `z`.
//!
//! ```
//! use roomplan_geometry::{constrain, Footprint, PlanePoint, RoomShape};
//!
//! let room = RoomShape::Rectangle { width: 400.0, depth: 300.0 }.vertices();
//! let p = constrain(&PlanePoint::new(10.0, 10.0), &Footprint::new(1.0, 0.5), &room);
//! assert_eq!(p, PlanePoint::new(3.5, 2.75));
//! ```

pub mod constraint;
pub mod error;
pub mod footprint;
pub mod polygon;
pub mod shapes;
pub mod types;
pub mod units;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use constraint::{constrain, constrain_with, ConstraintOptions, Fallback, NUDGE_STEP};
pub use error::{Error, Result};
pub use footprint::{corners, footprint_inside, footprint_within, half_extents, FootprintMode};
pub use polygon::{
    bounds, is_orthogonal, parse_vertices, point_in_polygon, polygon_area, validate_outline,
    vertex_centroid,
};
pub use shapes::{generate_l_shape, generate_rectangle, generate_u_shape, RoomShape, ShapeType};
pub use types::{Footprint, PlanePoint, Point2D, RoomBounds};
pub use units::{cm_to_m, m_to_cm};
