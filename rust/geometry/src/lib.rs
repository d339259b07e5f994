// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Interior Elevations Geometry
//!
//! Geometric core for placing interior elevation views: an interior anchor
//! point for each room, a crop box fitted around the room in the view's
//! rotated frame, and the two nested loops of the masking region drawn over
//! the view edges.
//!
//! Host documents are reached only through the [`Room`] and [`View`] traits;
//! every function here is a pure computation apart from the single crop box
//! write-back in [`resize_crop_box`].

pub mod angles;
pub mod bbox;
pub mod boundary;
pub mod centroid;
pub mod crop;
pub mod error;
pub mod host;
pub mod mask;
pub mod matrix;
pub mod projector;
pub mod transform;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

pub use angles::ProjectNorth;
pub use bbox::BoundingBox;
pub use boundary::{BoundaryLoop, Line};
pub use centroid::{locate_centroid, CENTROID_NUDGE};
pub use crop::{fit_crop_box, resize_crop_box, CROP_MARGIN};
pub use error::{Error, Result};
pub use host::{Room, View};
pub use mask::{mask_boundary, MaskBoundary, MASK_INNER_INSET, MASK_OUTER_OFFSET};
pub use projector::ViewFrameProjector;
pub use transform::AffineTransform;
