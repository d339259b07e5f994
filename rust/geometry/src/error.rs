// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for elevation geometry operations.

use nalgebra::Point3;
use thiserror::Error;

/// Result type alias for elevation geometry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while computing crop boxes, centroids and masks.
///
/// Every variant is local to one room/view pair: callers record it and move
/// on to the next room.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The vertex average and all four nudged probes lie outside the room.
    #[error("centroid not located in room (vertex average {center})")]
    CentroidNotLocatable { center: Point3<f64> },

    /// A transform basis has a zero or near-zero determinant.
    #[error("singular transform: determinant {determinant:e}")]
    SingularMatrix { determinant: f64 },

    /// The room has no world-space bounding box.
    #[error("room has no world bounding box")]
    MissingBoundingBox,

    /// The crop box is too small for the inner mask rectangle to nest inside it.
    #[error("degenerate mask boundary on {axis} axis: inner min {min} >= inner max {max}")]
    DegenerateMask { axis: char, min: f64, max: f64 },

    /// A boundary loop is not a closed chain of non-degenerate lines.
    #[error("invalid boundary loop: {0}")]
    InvalidLoop(String),
}

impl Error {
    /// Convenience constructor for loop validation failures.
    pub fn invalid_loop(msg: impl Into<String>) -> Self {
        Error::InvalidLoop(msg.into())
    }
}
