// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transformed bounding boxes

use crate::transform::AffineTransform;
use nalgebra::Point3;

/// Axis-aligned box in the local frame of `transform`.
///
/// `min` and `max` are not guaranteed ordered once a transform has been
/// applied to them; call [`BoundingBox::renormalized`] before treating the box
/// as a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
    pub transform: AffineTransform,
}

impl BoundingBox {
    pub fn new(min: Point3<f64>, max: Point3<f64>, transform: AffineTransform) -> Self {
        Self { min, max, transform }
    }

    /// World-space box (identity transform).
    pub fn world(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self::new(min, max, AffineTransform::identity())
    }

    /// Copy with min/max reordered component-wise.
    pub fn renormalized(&self) -> Self {
        let (min, max) = reorder_min_max(&self.min, &self.max);
        Self::new(min, max, self.transform)
    }

    /// Whether min <= max on every axis.
    pub fn is_ordered(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).abs()
    }

    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).abs()
    }

    /// Local x/y containment, inclusive.
    pub fn contains_xy(&self, point: &Point3<f64>) -> bool {
        let b = self.renormalized();
        point.x >= b.min.x && point.x <= b.max.x && point.y >= b.min.y && point.y <= b.max.y
    }
}

/// Component-wise min/max of two corners.
pub fn reorder_min_max(a: &Point3<f64>, b: &Point3<f64>) -> (Point3<f64>, Point3<f64>) {
    (a.inf(b), a.sup(b))
}
