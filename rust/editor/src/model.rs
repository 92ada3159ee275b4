// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rooms and furniture.
//!
//! Rooms are orthogonal outlines in meters with a wall height. Furniture is a
//! box sized in centimeters, positioned in meters by its center, with the
//! scene's `y` axis pointing up and the room plan's `y` axis mapped to `z`.

use roomplan_geometry::{
    bounds, cm_to_m, parse_vertices, point_in_polygon, validate_outline, vertex_centroid,
    Footprint, PlanePoint, Point2D, Point3, RoomBounds, RoomShape,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Smallest allowed furniture dimension, in centimeters.
pub const MIN_SIZE_CM: f64 = 10.0;
/// Largest allowed furniture width or depth, in centimeters.
pub const MAX_FOOTPRINT_CM: f64 = 500.0;
/// Largest allowed furniture height, in centimeters.
pub const MAX_HEIGHT_CM: f64 = 400.0;

pub const DEFAULT_FLOOR_COLOR: &str = "#e0e0e0";
pub const DEFAULT_WALL_COLOR: &str = "#ffffff";
pub const DEFAULT_FURNITURE_COLOR: &str = "#8B4513";

pub fn new_room_id() -> String {
    format!("room-{}", Uuid::new_v4())
}

pub fn new_furniture_id() -> String {
    format!("furniture-{}", Uuid::new_v4())
}

fn default_floor_color() -> String {
    DEFAULT_FLOOR_COLOR.to_string()
}

fn default_wall_color() -> String {
    DEFAULT_WALL_COLOR.to_string()
}

fn checked_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// A room: an orthogonal outline (meters) extruded to `height` meters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub vertices: Vec<Point2D>,
    pub height: f64,
    #[serde(default = "default_floor_color")]
    pub floor_color: String,
    #[serde(default = "default_wall_color")]
    pub wall_color: String,
}

impl Room {
    /// Creates a room after checking the name, height and outline.
    pub fn new(name: &str, vertices: Vec<Point2D>, height: f64) -> Result<Self> {
        let name = checked_name(name)?;
        check_height(height)?;
        validate_outline(&vertices)?;

        Ok(Self {
            id: new_room_id(),
            name,
            vertices,
            height,
            floor_color: default_floor_color(),
            wall_color: default_wall_color(),
        })
    }

    /// Creates a room from a parametric shape. `height_cm` is in centimeters
    /// like the shape's dimensions.
    pub fn from_shape(name: &str, shape: &RoomShape, height_cm: f64) -> Result<Self> {
        let vertices = shape.try_vertices()?;
        Self::new(name, vertices, cm_to_m(height_cm))
    }

    /// Creates a room from typed `x,y` pairs in meters.
    pub fn from_vertex_input(name: &str, input: &str, height: f64) -> Result<Self> {
        Self::new(name, parse_vertices(input)?, height)
    }

    pub fn with_colors(mut self, floor: &str, wall: &str) -> Self {
        self.floor_color = floor.to_string();
        self.wall_color = wall.to_string();
        self
    }

    pub fn bounds(&self) -> RoomBounds {
        bounds(&self.vertices)
    }

    /// Vertex average, used as the default drop position for new furniture.
    pub fn center(&self) -> PlanePoint {
        vertex_centroid(&self.vertices)
    }

    pub fn contains(&self, point: &PlanePoint) -> bool {
        point_in_polygon(point, &self.vertices)
    }
}

fn check_height(height: f64) -> Result<()> {
    if height.is_finite() && height > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidHeight(height))
    }
}

/// Wholesale replacement of a room's editable fields. Unset fields keep
/// their value; a new outline replaces the old one entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomPatch {
    pub name: Option<String>,
    pub vertices: Option<Vec<Point2D>>,
    pub height: Option<f64>,
    pub floor_color: Option<String>,
    pub wall_color: Option<String>,
}

impl RoomPatch {
    /// Validates the patch, then applies it.
    pub fn apply(self, room: &mut Room) -> Result<()> {
        let name = self.name.as_deref().map(checked_name).transpose()?;
        if let Some(h) = self.height {
            check_height(h)?;
        }
        if let Some(v) = &self.vertices {
            validate_outline(v)?;
        }

        if let Some(name) = name {
            room.name = name;
        }
        if let Some(vertices) = self.vertices {
            room.vertices = vertices;
        }
        if let Some(height) = self.height {
            room.height = height;
        }
        if let Some(c) = self.floor_color {
            room.floor_color = c;
        }
        if let Some(c) = self.wall_color {
            room.wall_color = c;
        }
        Ok(())
    }
}

/// A point in the 3D scene, in meters. `y` is up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Floor-plane projection.
    pub fn plane(&self) -> PlanePoint {
        PlanePoint::new(self.x, self.z)
    }

    pub fn with_plane(&self, p: &PlanePoint) -> Self {
        Self::new(p.x, self.y, p.z)
    }

    pub fn to_nalgebra(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }
}

/// Furniture dimensions in centimeters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FurnitureSize {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl FurnitureSize {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) && ok(self.depth) {
            Ok(())
        } else {
            Err(Error::InvalidSize {
                width: self.width,
                height: self.height,
                depth: self.depth,
            })
        }
    }

    /// Clamps width and depth to `[10, 500]` cm and height to `[10, 400]` cm.
    pub fn clamped(&self) -> Self {
        Self {
            width: self.width.clamp(MIN_SIZE_CM, MAX_FOOTPRINT_CM),
            height: self.height.clamp(MIN_SIZE_CM, MAX_HEIGHT_CM),
            depth: self.depth.clamp(MIN_SIZE_CM, MAX_FOOTPRINT_CM),
        }
    }

    /// Floor footprint in meters.
    pub fn footprint(&self) -> Footprint {
        Footprint::new(cm_to_m(self.width), cm_to_m(self.depth))
    }

    pub fn half_height_m(&self) -> f64 {
        cm_to_m(self.height) / 2.0
    }
}

/// Euler rotation in radians. `y` is yaw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A furniture box placed in the scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Furniture {
    pub id: String,
    pub name: String,
    /// Center of the box, in meters.
    pub position: Point3D,
    pub size: FurnitureSize,
    pub rotation: Rotation,
    pub color: String,
    pub room_id: Option<String>,
}

impl Furniture {
    /// Creates unplaced furniture standing on the floor at the origin.
    pub fn new(name: &str, size: FurnitureSize, color: &str) -> Result<Self> {
        let name = checked_name(name)?;
        size.validate()?;

        Ok(Self {
            id: new_furniture_id(),
            name,
            position: Point3D::new(0.0, size.half_height_m(), 0.0),
            size,
            rotation: Rotation::default(),
            color: color.to_string(),
            room_id: None,
        })
    }

    /// Assigns the furniture to `room` and drops it at the room's center,
    /// resting on the floor.
    pub fn place_in(&mut self, room: &Room) {
        let c = room.center();
        self.position = Point3D::new(c.x, self.size.half_height_m(), c.z);
        self.room_id = Some(room.id.clone());
    }

    pub fn footprint(&self) -> Footprint {
        self.size.footprint()
    }

    pub fn yaw(&self) -> f64 {
        self.rotation.y
    }

    /// Quick check: the unrotated footprint lies within the room's bounding
    /// box. Exact for rectangular rooms only.
    pub fn fits_in_bounds(&self, b: &RoomBounds) -> bool {
        let fp = self.footprint();
        let p = self.position;
        p.x - fp.half_width() >= b.min_x
            && p.x + fp.half_width() <= b.max_x
            && p.z - fp.half_depth() >= b.min_z
            && p.z + fp.half_depth() <= b.max_z
    }

    /// Axis-aligned box overlap with another piece in the same room.
    pub fn collides_with(&self, other: &Furniture) -> bool {
        if self.id == other.id || self.room_id != other.room_id {
            return false;
        }

        let half = |f: &Furniture| {
            (
                cm_to_m(f.size.width) / 2.0,
                cm_to_m(f.size.height) / 2.0,
                cm_to_m(f.size.depth) / 2.0,
            )
        };
        let (aw, ah, ad) = half(self);
        let (bw, bh, bd) = half(other);
        let (a, b) = (self.position, other.position);

        (a.x - b.x).abs() < aw + bw && (a.y - b.y).abs() < ah + bh && (a.z - b.z).abs() < ad + bd
    }
}

/// Partial update of a piece of furniture. `room_id: Some(None)` detaches it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FurniturePatch {
    pub name: Option<String>,
    pub position: Option<Point3D>,
    pub size: Option<FurnitureSize>,
    pub rotation: Option<Rotation>,
    pub color: Option<String>,
    pub room_id: Option<Option<String>>,
}

impl FurniturePatch {
    pub fn position(position: Point3D) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, furniture: &mut Furniture) {
        if let Some(name) = self.name {
            furniture.name = name;
        }
        if let Some(position) = self.position {
            furniture.position = position;
        }
        if let Some(size) = self.size {
            furniture.size = size;
        }
        if let Some(rotation) = self.rotation {
            furniture.rotation = rotation;
        }
        if let Some(color) = self.color {
            furniture.color = color;
        }
        if let Some(room_id) = self.room_id {
            furniture.room_id = room_id;
        }
    }
}

/// A named size preset offered when adding furniture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FurniturePreset {
    pub name: &'static str,
    pub size: FurnitureSize,
}

pub const PRESETS: &[FurniturePreset] = &[
    FurniturePreset {
        name: "Table",
        size: FurnitureSize { width: 120.0, height: 75.0, depth: 80.0 },
    },
    FurniturePreset {
        name: "Chair",
        size: FurnitureSize { width: 45.0, height: 85.0, depth: 45.0 },
    },
    FurniturePreset {
        name: "Sofa",
        size: FurnitureSize { width: 180.0, height: 80.0, depth: 90.0 },
    },
    FurniturePreset {
        name: "Bed",
        size: FurnitureSize { width: 200.0, height: 60.0, depth: 100.0 },
    },
    FurniturePreset {
        name: "Bookshelf",
        size: FurnitureSize { width: 80.0, height: 180.0, depth: 30.0 },
    },
    FurniturePreset {
        name: "Desk",
        size: FurnitureSize { width: 120.0, height: 75.0, depth: 60.0 },
    },
];

pub fn preset(name: &str) -> Option<&'static FurniturePreset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
