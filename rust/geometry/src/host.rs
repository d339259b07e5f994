// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Contract between the geometry core and the host document model.
//!
//! The host owns rooms and views; the core only reads room geometry and
//! writes a recomputed crop box back to a view. Adapters translate the host's
//! native point/curve/transform types into the value types used here.

use crate::bbox::BoundingBox;
use crate::boundary::Line;
use nalgebra::Point3;

/// A placed room as seen by the geometry core.
pub trait Room {
    /// Boundary loops of the room, each a sequence of segments.
    ///
    /// Unbound rooms return an empty list.
    fn boundary_loops(&self) -> Vec<Vec<Line>>;

    /// Point-in-room predicate.
    fn is_point_inside(&self, point: &Point3<f64>) -> bool;

    /// World-space axis-aligned bounding box, if the room has resolved geometry.
    fn world_bounding_box(&self) -> Option<BoundingBox>;
}

/// A view whose crop box can be read and replaced.
pub trait View {
    fn crop_box(&self) -> BoundingBox;

    fn set_crop_box(&mut self, crop_box: BoundingBox);
}
