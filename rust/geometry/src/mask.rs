// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Nested boundary loops for a view's masking region.
//!
//! The inner rectangle sits just inside the crop box and the outer one just
//! outside it; the band between them is filled to hide the view edges.
//! Corners are pushed through the crop transform into world space and then
//! back through its inverse, which is the frame convention the host's curve
//! API expects for elevation views.

use crate::bbox::BoundingBox;
use crate::boundary::BoundaryLoop;
use crate::error::{Error, Result};
use crate::projector::ViewFrameProjector;
use nalgebra::Point3;

/// Inset of the inner rectangle from each crop edge.
pub const MASK_INNER_INSET: f64 = 1.0;

/// Offset of the outer rectangle beyond each crop edge.
pub const MASK_OUTER_OFFSET: f64 = 0.5;

/// Inner and outer loops of a masking region, both in the crop box frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskBoundary {
    pub inner: BoundaryLoop,
    pub outer: BoundaryLoop,
}

impl MaskBoundary {
    /// Loops in the order the host expects: inner first.
    pub fn loops(&self) -> [&BoundaryLoop; 2] {
        [&self.inner, &self.outer]
    }
}

/// Build the mask loops for an already resized crop box.
pub fn mask_boundary(crop: &BoundingBox) -> Result<MaskBoundary> {
    let projector = ViewFrameProjector::new(&crop.transform)?;
    let min = crop.min;
    let max = crop.max;

    let inner_min = (min.x + MASK_INNER_INSET, min.y + MASK_INNER_INSET);
    let inner_max = (max.x - MASK_INNER_INSET, max.y - MASK_INNER_INSET);
    check_nesting('x', inner_min.0, inner_max.0)?;
    check_nesting('y', inner_min.1, inner_max.1)?;

    let outer_min = (min.x - MASK_OUTER_OFFSET, min.y - MASK_OUTER_OFFSET);
    let outer_max = (max.x + MASK_OUTER_OFFSET, max.y + MASK_OUTER_OFFSET);

    let inner = rectangle_loop(&projector, inner_min, inner_max, min.z)?;
    let outer = rectangle_loop(&projector, outer_min, outer_max, min.z)?;

    Ok(MaskBoundary { inner, outer })
}

fn check_nesting(axis: char, min: f64, max: f64) -> Result<()> {
    if min < max {
        Ok(())
    } else {
        Err(Error::DegenerateMask { axis, min, max })
    }
}

fn rectangle_loop(
    projector: &ViewFrameProjector,
    (min_x, min_y): (f64, f64),
    (max_x, max_y): (f64, f64),
    z: f64,
) -> Result<BoundaryLoop> {
    let corners = [
        Point3::new(min_x, min_y, z),
        Point3::new(min_x, max_y, z),
        Point3::new(max_x, max_y, z),
        Point3::new(max_x, min_y, z),
    ]
    .map(|local| projector.to_local(&projector.to_world(&local)));

    BoundaryLoop::from_corners(corners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::AffineTransform;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn crop(min: (f64, f64), max: (f64, f64), transform: AffineTransform) -> BoundingBox {
        BoundingBox::new(
            Point3::new(min.0, min.1, -2.0),
            Point3::new(max.0, max.1, 8.0),
            transform,
        )
    }

    #[test]
    fn inner_and_outer_offsets() {
        let b = crop((0.0, 0.0), (10.0, 6.0), AffineTransform::identity());
        let mask = mask_boundary(&b).unwrap();

        assert_relative_eq!(mask.inner.min(), Point3::new(1.0, 1.0, -2.0));
        assert_relative_eq!(mask.inner.max(), Point3::new(9.0, 5.0, -2.0));
        assert_relative_eq!(mask.outer.min(), Point3::new(-0.5, -0.5, -2.0));
        assert_relative_eq!(mask.outer.max(), Point3::new(10.5, 6.5, -2.0));
    }

    #[test]
    fn corner_order_and_winding() {
        let b = crop((0.0, 0.0), (10.0, 6.0), AffineTransform::identity());
        let mask = mask_boundary(&b).unwrap();
        let lines = mask.inner.lines();

        // First line runs from the (max x, min y) corner back to (min x, min y).
        assert_relative_eq!(lines[0].start, Point3::new(9.0, 1.0, -2.0));
        assert_relative_eq!(lines[0].end, Point3::new(1.0, 1.0, -2.0));
        assert_relative_eq!(lines[1].end, Point3::new(1.0, 5.0, -2.0));
        assert_relative_eq!(lines[2].end, Point3::new(9.0, 5.0, -2.0));
    }

    #[test]
    fn rotated_frame_stays_in_local_coordinates() {
        let t =
            AffineTransform::elevation(Vector3::new(-0.6, 0.8, 0.0), Point3::new(4.0, 4.0, 0.0));
        let b = crop((-7.0, -1.0), (5.0, 3.5), t);
        let mask = mask_boundary(&b).unwrap();

        assert_relative_eq!(mask.inner.min(), Point3::new(-6.0, 0.0, -2.0), epsilon = 1e-9);
        assert_relative_eq!(mask.inner.max(), Point3::new(4.0, 2.5, -2.0), epsilon = 1e-9);
        assert_relative_eq!(mask.outer.min(), Point3::new(-7.5, -1.5, -2.0), epsilon = 1e-9);
        assert_relative_eq!(mask.outer.max(), Point3::new(5.5, 4.0, -2.0), epsilon = 1e-9);
    }

    #[test]
    fn loops_are_inner_first() {
        let b = crop((0.0, 0.0), (4.0, 4.0), AffineTransform::identity());
        let mask = mask_boundary(&b).unwrap();
        let [first, second] = mask.loops();

        assert!(first.perimeter() < second.perimeter());
    }

    #[test]
    fn crop_under_two_units_is_degenerate() {
        let b = crop((0.0, 0.0), (1.5, 10.0), AffineTransform::identity());
        match mask_boundary(&b) {
            Err(Error::DegenerateMask { axis, min, max }) => {
                assert_eq!(axis, 'x');
                assert!(min > max);
            }
            other => panic!("expected DegenerateMask, got {other:?}"),
        }
    }

    #[test]
    fn crop_of_exactly_two_units_is_degenerate() {
        let b = crop((0.0, 0.0), (10.0, 2.0), AffineTransform::identity());
        assert!(matches!(
            mask_boundary(&b),
            Err(Error::DegenerateMask { axis: 'y', .. })
        ));
    }

    #[test]
    fn singular_crop_transform_is_reported() {
        let t = AffineTransform::from_basis(
            Vector3::x(),
            Vector3::x(),
            Vector3::z(),
            Point3::origin(),
        );
        let b = crop((0.0, 0.0), (10.0, 10.0), t);
        assert!(matches!(mask_boundary(&b), Err(Error::SingularMatrix { .. })));
    }
}
