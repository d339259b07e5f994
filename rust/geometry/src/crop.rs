// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fitting a view's crop box around a room.
//!
//! Room corners are taken into the view frame by dotting them with the crop
//! transform's basis rows. No inverse and no origin are involved: the corners
//! are transformed as directions. Rotation can swap which corner is smaller
//! on an axis, so x and y are reordered before the margin is added. Z bounds
//! are kept from the original crop box.

use crate::bbox::BoundingBox;
use crate::error::{Error, Result};
use crate::host::{Room, View};
use crate::matrix;
use nalgebra::Point3;

/// Margin added around the room on every side of the crop rectangle.
pub const CROP_MARGIN: f64 = 1.0;

/// Room corner mapped into the crop frame with the basis rows.
pub fn project_direction(crop: &BoundingBox, world: &Point3<f64>) -> Point3<f64> {
    matrix::apply(&crop.transform.basis_rows(), world)
}

/// New crop box tightly bounding `room_bbox` plus [`CROP_MARGIN`].
pub fn fit_crop_box(crop: &BoundingBox, room_bbox: &BoundingBox) -> BoundingBox {
    let a = project_direction(crop, &room_bbox.min);
    let b = project_direction(crop, &room_bbox.max);

    let min_x = a.x.min(b.x);
    let min_y = a.y.min(b.y);
    let max_x = a.x.max(b.x);
    let max_y = a.y.max(b.y);

    BoundingBox::new(
        Point3::new(min_x - CROP_MARGIN, min_y - CROP_MARGIN, crop.min.z),
        Point3::new(max_x + CROP_MARGIN, max_y + CROP_MARGIN, crop.max.z),
        crop.transform,
    )
}

/// Resize the crop box of `view` around `room` and write it back once.
///
/// Returns the room's world bounding box for reuse by the caller; the new
/// crop box is available from the view.
pub fn resize_crop_box<V, R>(view: &mut V, room: &R) -> Result<BoundingBox>
where
    V: View + ?Sized,
    R: Room + ?Sized,
{
    let room_bbox = room.world_bounding_box().ok_or(Error::MissingBoundingBox)?;
    let resized = fit_crop_box(&view.crop_box(), &room_bbox);
    view.set_crop_box(resized);
    Ok(room_bbox)
}
