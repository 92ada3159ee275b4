// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parametric room shapes.
//!
//! Each shape is described in centimeters and expands into an ordered outline
//! in meters, starting at the origin and running along +x first. Every
//! generated outline is orthogonal: edges alternate between horizontal and
//! vertical.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Point2D;
use crate::units::cm_to_m;

/// Discriminant for the supported room shapes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ShapeType {
    Rectangle,
    LShape,
    UShape,
}

impl ShapeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Rectangle => "rectangle",
            ShapeType::LShape => "lShape",
            ShapeType::UShape => "uShape",
        }
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parametric room outline. All dimensions are in centimeters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum RoomShape {
    Rectangle {
        width: f64,
        depth: f64,
    },
    /// Full rectangle with a `cutout_width × cutout_depth` block removed from
    /// the corner farthest from the origin.
    LShape {
        width: f64,
        depth: f64,
        cutout_width: f64,
        cutout_depth: f64,
    },
    /// Two arms joined by a back wall. The notch between the arms is
    /// `opening_width` wide and reaches from the front edge (`y = 0`) to
    /// `depth - arm_depth`.
    UShape {
        width: f64,
        depth: f64,
        opening_width: f64,
        arm_depth: f64,
    },
}

impl RoomShape {
    /// Default parameters offered for each shape.
    pub fn default_for(shape_type: ShapeType) -> Self {
        match shape_type {
            ShapeType::Rectangle => RoomShape::Rectangle {
                width: 400.0,
                depth: 300.0,
            },
            ShapeType::LShape => RoomShape::LShape {
                width: 500.0,
                depth: 400.0,
                cutout_width: 200.0,
                cutout_depth: 200.0,
            },
            ShapeType::UShape => RoomShape::UShape {
                width: 600.0,
                depth: 400.0,
                opening_width: 200.0,
                arm_depth: 200.0,
            },
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        match self {
            RoomShape::Rectangle { .. } => ShapeType::Rectangle,
            RoomShape::LShape { .. } => ShapeType::LShape,
            RoomShape::UShape { .. } => ShapeType::UShape,
        }
    }

    /// Expands the shape into its outline without validating the parameters.
    ///
    /// Cutouts or openings at least as large as the outer dimensions produce a
    /// degenerate or self-intersecting outline; use [`RoomShape::try_vertices`]
    /// to reject those up front.
    pub fn vertices(&self) -> Vec<Point2D> {
        match *self {
            RoomShape::Rectangle { width, depth } => generate_rectangle(width, depth),
            RoomShape::LShape {
                width,
                depth,
                cutout_width,
                cutout_depth,
            } => generate_l_shape(width, depth, cutout_width, cutout_depth),
            RoomShape::UShape {
                width,
                depth,
                opening_width,
                arm_depth,
            } => generate_u_shape(width, depth, opening_width, arm_depth),
        }
    }

    /// Validates the parameters, then expands the shape.
    pub fn try_vertices(&self) -> Result<Vec<Point2D>> {
        self.validate()?;
        Ok(self.vertices())
    }

    /// Checks that every dimension is positive and that cutouts leave a
    /// non-degenerate outline.
    pub fn validate(&self) -> Result<()> {
        match *self {
            RoomShape::Rectangle { width, depth } => {
                positive("width", width)?;
                positive("depth", depth)?;
            }
            RoomShape::LShape {
                width,
                depth,
                cutout_width,
                cutout_depth,
            } => {
                positive("width", width)?;
                positive("depth", depth)?;
                positive("cutoutWidth", cutout_width)?;
                positive("cutoutDepth", cutout_depth)?;
                smaller("cutoutWidth", cutout_width, "width", width)?;
                smaller("cutoutDepth", cutout_depth, "depth", depth)?;
            }
            RoomShape::UShape {
                width,
                depth,
                opening_width,
                arm_depth,
            } => {
                positive("width", width)?;
                positive("depth", depth)?;
                positive("openingWidth", opening_width)?;
                positive("armDepth", arm_depth)?;
                smaller("openingWidth", opening_width, "width", width)?;
                smaller("armDepth", arm_depth, "depth", depth)?;
            }
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDimension { name, value })
    }
}

fn smaller(name: &'static str, value: f64, limit_name: &'static str, limit: f64) -> Result<()> {
    if value < limit {
        Ok(())
    } else {
        Err(Error::CutoutTooLarge {
            name,
            value,
            limit_name,
            limit,
        })
    }
}

/// Rectangle `width × depth` (cm) with one corner at the origin.
pub fn generate_rectangle(width: f64, depth: f64) -> Vec<Point2D> {
    let w = cm_to_m(width);
    let d = cm_to_m(depth);

    vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(w, 0.0),
        Point2D::new(w, d),
        Point2D::new(0.0, d),
    ]
}

/// L-shaped outline: the far corner `(width, depth)` is cut away.
pub fn generate_l_shape(width: f64, depth: f64, cutout_width: f64, cutout_depth: f64) -> Vec<Point2D> {
    let w = cm_to_m(width);
    let d = cm_to_m(depth);
    let cw = cm_to_m(cutout_width);
    let cd = cm_to_m(cutout_depth);

    vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(w, 0.0),
        Point2D::new(w, d - cd),
        Point2D::new(w - cw, d - cd),
        Point2D::new(w - cw, d),
        Point2D::new(0.0, d),
    ]
}

/// U-shaped outline: two arms of width `(width - opening_width) / 2` joined
/// by a back wall, with the notch opening onto the `y = 0` edge.
pub fn generate_u_shape(width: f64, depth: f64, opening_width: f64, arm_depth: f64) -> Vec<Point2D> {
    let w = cm_to_m(width);
    let d = cm_to_m(depth);
    let ow = cm_to_m(opening_width);
    let ad = cm_to_m(arm_depth);

    let arm_width = (w - ow) / 2.0;

    vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(arm_width, 0.0),
        Point2D::new(arm_width, d - ad),
        Point2D::new(arm_width + ow, d - ad),
        Point2D::new(arm_width + ow, 0.0),
        Point2D::new(w, 0.0),
        Point2D::new(w, d),
        Point2D::new(0.0, d),
    ]
}
