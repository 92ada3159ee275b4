// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when validating room outlines and shape parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("Polygon is not orthogonal at vertex {index}")]
    NonOrthogonal { index: usize },

    #[error("Invalid dimension {name}: {value} (must be a positive number)")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("{name} ({value} cm) must be smaller than {limit_name} ({limit} cm)")]
    CutoutTooLarge {
        name: &'static str,
        value: f64,
        limit_name: &'static str,
        limit: f64,
    },

    #[error("Invalid vertex input: {0}")]
    InvalidVertexInput(String),
}
