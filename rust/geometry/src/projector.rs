// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mapping points between world space and a view's local frame.

use crate::bbox::{reorder_min_max, BoundingBox};
use crate::error::Result;
use crate::matrix;
use crate::transform::AffineTransform;
use nalgebra::{Matrix3, Point3};

/// Forward and inverse linear maps of one view frame.
///
/// Only the 3x3 linear part is used; the frame origin does not take part.
#[derive(Debug, Clone, Copy)]
pub struct ViewFrameProjector {
    forward: Matrix3<f64>,
    inverse: Matrix3<f64>,
}

impl ViewFrameProjector {
    /// Fails with [`crate::Error::SingularMatrix`] for a degenerate basis.
    pub fn new(transform: &AffineTransform) -> Result<Self> {
        let forward = matrix::to_matrix(transform);
        let inverse = matrix::invert(&forward)?;
        Ok(Self { forward, inverse })
    }

    /// World → local.
    pub fn to_local(&self, world: &Point3<f64>) -> Point3<f64> {
        matrix::apply(&self.inverse, world)
    }

    /// Local → world.
    pub fn to_world(&self, local: &Point3<f64>) -> Point3<f64> {
        matrix::apply(&self.forward, local)
    }

    /// Both corners of `bbox` in the local frame, reordered component-wise.
    pub fn bounding_box_to_local(&self, bbox: &BoundingBox) -> (Point3<f64>, Point3<f64>) {
        let a = self.to_local(&bbox.min);
        let b = self.to_local(&bbox.max);
        reorder_min_max(&a, &b)
    }
}
