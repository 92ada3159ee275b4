// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plain value types shared by the shape, polygon and constraint modules.
//!
//! Room outlines live in a 2D plan with `(x, y)` coordinates. In the 3D scene
//! the plan's `y` axis becomes the world `z` axis (the world `y` axis points
//! up), so positions on the floor are expressed as [`PlanePoint`] `{x, z}`.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// A vertex of a room outline, in meters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_nalgebra(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn from_nalgebra(p: &Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }

    /// The same location seen as a floor position (`y` maps to `z`).
    pub fn to_plane(&self) -> PlanePoint {
        PlanePoint::new(self.x, self.y)
    }
}

/// A position on the floor plane of the 3D scene, in meters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PlanePoint {
    pub x: f64,
    pub z: f64,
}

impl PlanePoint {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.z)
    }

    pub fn from_vector(v: &Vector2<f64>) -> Self {
        Self { x: v.x, z: v.y }
    }

    pub fn distance_to(&self, other: &PlanePoint) -> f64 {
        (other.to_vector() - self.to_vector()).norm()
    }
}

/// Axis-aligned bounding box of a room outline on the floor plane
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl RoomBounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    pub fn contains(&self, p: &PlanePoint) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.z >= self.min_z && p.z <= self.max_z
    }
}

/// Rectangular furniture footprint on the floor plane, in meters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Footprint {
    /// Extent along the local x axis
    pub width: f64,
    /// Extent along the local z axis
    pub depth: f64,
}

impl Footprint {
    pub fn new(width: f64, depth: f64) -> Self {
        Self { width, depth }
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_depth(&self) -> f64 {
        self.depth / 2.0
    }
}
