// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interior anchor point for a room.
//!
//! The anchor starts as the unweighted average of every boundary segment
//! endpoint. Room outlines are often non-convex (L-shapes, alcoves), so when
//! the average falls outside the room a fixed set of axis-nudged probes is
//! tried before giving up.
//!
//! All loops of a room are pooled into one average; interior islands are not
//! treated specially and can pull the average into a hole.

use crate::error::{Error, Result};
use crate::host::Room;
use nalgebra::{Point3, Vector3};

/// Distance of each fallback probe from the vertex average.
pub const CENTROID_NUDGE: f64 = 1.0;

/// Fallback probe offsets, in the order they are tried: −x, +x, −y, +y.
pub fn probe_offsets() -> [Vector3<f64>; 4] {
    [
        Vector3::new(-CENTROID_NUDGE, 0.0, 0.0),
        Vector3::new(CENTROID_NUDGE, 0.0, 0.0),
        Vector3::new(0.0, -CENTROID_NUDGE, 0.0),
        Vector3::new(0.0, CENTROID_NUDGE, 0.0),
    ]
}

/// Both endpoints of every segment across every loop.
pub fn boundary_end_points<R: Room + ?Sized>(room: &R) -> Vec<Point3<f64>> {
    room.boundary_loops()
        .iter()
        .flatten()
        .flat_map(|line| [line.end_point(0), line.end_point(1)])
        .collect()
}

/// Component-wise arithmetic mean. `None` for an empty slice.
pub fn vertex_average(points: &[Point3<f64>]) -> Option<Point3<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum / points.len() as f64))
}

/// Locate a point inside `room`.
///
/// Returns `Ok(None)` for a room without boundary data, which callers skip.
/// Returns [`Error::CentroidNotLocatable`] when neither the average nor any
/// probe is accepted by the room's containment predicate.
pub fn locate_centroid<R: Room + ?Sized>(room: &R) -> Result<Option<Point3<f64>>> {
    let end_points = boundary_end_points(room);
    let Some(center) = vertex_average(&end_points) else {
        return Ok(None);
    };

    if room.is_point_inside(&center) {
        return Ok(Some(center));
    }

    for (index, offset) in probe_offsets().iter().enumerate() {
        let candidate = center + offset;
        if room.is_point_inside(&candidate) {
            tracing::debug!(
                probe = index,
                x = candidate.x,
                y = candidate.y,
                "vertex average outside room, using nudged probe"
            );
            return Ok(Some(candidate));
        }
    }

    Err(Error::CentroidNotLocatable { center })
}
