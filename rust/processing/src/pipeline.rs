// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room-by-room elevation pipeline.
//!
//! For each room: locate an interior anchor, let the host place an elevation
//! marker there, then fit every resulting view's crop box around the room and
//! hand the mask loops back to the host. Rooms run strictly in sequence. A
//! failure ends work on that room only; writes already made for it or for
//! earlier rooms are left in place.

use crate::error::{HostError, Result};
use crate::host::{ElevationHost, RoomId, ViewId};
use crate::report::{coords, BatchReport, RoomOutcome, RoomReport, SkipReason, ViewReport};
use interior_elevations_geometry::{
    locate_centroid, mask_boundary, resize_crop_box, ProjectNorth, View,
};

/// Read-only document context shared by every room in a batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElevationContext {
    pub north: ProjectNorth,
}

impl ElevationContext {
    pub fn new(north: ProjectNorth) -> Self {
        Self { north }
    }
}

/// Process every room the host offers.
pub fn run_batch<H: ElevationHost>(host: &mut H, ctx: &ElevationContext) -> BatchReport {
    let mut report = BatchReport {
        north_offset_degrees: ctx.north.degrees(),
        rooms: Vec::new(),
    };

    for room in host.room_ids() {
        let name = host.room_name(room);
        let outcome = match process_room(host, ctx, room) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(room = %room, error = %e, "room failed, continuing with next room");
                RoomOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        report.push(RoomReport {
            room,
            name,
            outcome,
        });
    }

    tracing::info!(
        rooms = report.rooms.len(),
        placed = report.placed(),
        skipped = report.skipped(),
        failed = report.failed(),
        views = report.view_count(),
        "elevation batch finished"
    );

    report
}

/// Process one room: anchor, placement, then each placed view.
pub fn process_room<H: ElevationHost>(
    host: &mut H,
    ctx: &ElevationContext,
    room: RoomId,
) -> Result<RoomOutcome> {
    let geometry = host.room(room).ok_or(HostError::RoomNotFound(room))?;

    let Some(center) = locate_centroid(geometry)? else {
        tracing::debug!(room = %room, "room is not bound, skipping");
        return Ok(RoomOutcome::Skipped {
            reason: SkipReason::Unbound,
        });
    };

    let views = host.place_elevations(room, center)?;
    if views.is_empty() {
        tracing::debug!(room = %room, "no plan hosts this room, skipping");
        return Ok(RoomOutcome::Skipped {
            reason: SkipReason::NoPlan,
        });
    }

    let mut reports = Vec::with_capacity(views.len());
    for view in views {
        reports.push(process_view(host, ctx, room, view)?);
    }

    Ok(RoomOutcome::Placed {
        center: coords(&center),
        views: reports,
    })
}

fn process_view<H: ElevationHost>(
    host: &mut H,
    ctx: &ElevationContext,
    room: RoomId,
    view: ViewId,
) -> Result<ViewReport> {
    let (geometry, elevation) = host.room_and_view_mut(room, view)?;
    resize_crop_box(elevation, geometry)?;
    let crop = elevation.crop_box();

    let mask = mask_boundary(&crop)?;
    host.create_mask_region(view, &mask)?;

    let facing = ctx.north.facing_degrees(&crop.transform.view_direction());
    tracing::debug!(
        room = %room,
        view = %view,
        width = crop.width(),
        height = crop.height(),
        facing,
        "crop box fitted"
    );

    Ok(ViewReport::new(view, &crop, &mask, facing))
}
