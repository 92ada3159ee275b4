// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the layout model and project documents.

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the boundary of the layout model.
///
/// Interactive manipulation never fails; these come from creating or
/// editing entities with invalid input and from loading documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A referenced room is not in the layout.
    #[error("room not found: {0}")]
    RoomNotFound(String),

    /// A referenced piece of furniture is not in the layout.
    #[error("furniture not found: {0}")]
    FurnitureNotFound(String),

    /// Names must contain at least one non-whitespace character.
    #[error("name must not be empty")]
    EmptyName,

    /// Room height must be a positive number of meters.
    #[error("invalid room height: {0} m")]
    InvalidHeight(f64),

    /// Furniture dimensions must be positive.
    #[error("invalid furniture size: {width} x {height} x {depth} cm")]
    InvalidSize { width: f64, height: f64, depth: f64 },

    /// The caller's room limit has been reached.
    #[error("room limit reached: at most {0} room(s) allowed")]
    RoomLimitReached(usize),

    /// Outline or shape parameters were rejected.
    #[error(transparent)]
    Geometry(#[from] roomplan_geometry::Error),

    /// Document (de)serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
