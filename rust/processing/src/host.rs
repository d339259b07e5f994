// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host document seen by the pipeline.
//!
//! Element creation, view templates, phases and transactions all live behind
//! this trait. The pipeline only decides *what* to compute and in which order.

use crate::error::HostError;
use interior_elevations_geometry::{MaskBoundary, Point3, Room, View};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Document operations the elevation pipeline needs from its host.
pub trait ElevationHost {
    type Room: Room;
    type View: View;

    /// Rooms to process, in processing order.
    fn room_ids(&self) -> Vec<RoomId>;

    fn room(&self, id: RoomId) -> Option<&Self::Room>;

    /// Display name used in reports and logs.
    fn room_name(&self, _id: RoomId) -> Option<String> {
        None
    }

    /// Place an elevation marker at `center` and create its views.
    ///
    /// An empty list means the room has no plan to host the marker; the room
    /// is skipped.
    fn place_elevations(
        &mut self,
        room: RoomId,
        center: Point3<f64>,
    ) -> Result<Vec<ViewId>, HostError>;

    fn view(&self, id: ViewId) -> Option<&Self::View>;

    /// Borrow a room and one of its views at the same time, the view mutably.
    fn room_and_view_mut(
        &mut self,
        room: RoomId,
        view: ViewId,
    ) -> Result<(&Self::Room, &mut Self::View), HostError>;

    /// Create the masking region on `view` from the two loops in `mask`.
    fn create_mask_region(&mut self, view: ViewId, mask: &MaskBoundary) -> Result<(), HostError>;
}
